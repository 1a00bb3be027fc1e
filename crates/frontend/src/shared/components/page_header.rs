use leptos::prelude::*;

/// Title row of a page, with the actions slot on the right.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Smaller accent text after the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">
                    {title}
                    {move || subtitle.get().map(|s| view! {
                        <span class="page-header__subtitle">{s}</span>
                    })}
                </h1>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
