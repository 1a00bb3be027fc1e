//! Search box shared by the list pages

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search input with a leading icon and a clear button.
///
/// Every keystroke goes straight to `on_change`, without debounce.
/// Enter submits the surrounding form, which only calls `on_submit`.
#[component]
pub fn SearchInput(
    /// Current query
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every input event
    on_change: Callback<String>,
    /// Called on form submit
    #[prop(optional)]
    on_submit: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <form
            class="search-input"
            on:submit=move |ev| {
                ev.prevent_default();
                if let Some(submit) = on_submit {
                    submit.run(());
                }
            }
        >
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    type="button"
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </form>
    }
}
