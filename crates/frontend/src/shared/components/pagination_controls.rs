use crate::shared::icons::icon;
use contracts::shared::catalog::{page_items, PageItem};
use leptos::prelude::*;

/// Pagination bar: Previous, page window with first/last jumps, Next.
///
/// Previous/Next stay clickable on the edge pages and only carry
/// `aria-disabled`; the page-change handler rejects out-of-range targets.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages, 0 when nothing matched
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback with the requested page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let items = move || page_items(current_page.get(), total_pages.get());

    view! {
        <nav class="pagination-controls" role="navigation" aria-label="pagination">
            <ul class="pagination-controls__list">
                {move || {
                    items()
                        .into_iter()
                        .map(|item| view! { <li class="pagination-controls__item">{render_item(item, on_page_change)}</li> })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

fn render_item(item: PageItem, on_page_change: Callback<usize>) -> AnyView {
    match item {
        PageItem::Previous { target, disabled } => view! {
            <a
                href="#"
                class=if disabled { "pagination-btn pagination-btn--disabled" } else { "pagination-btn" }
                aria-disabled=disabled.to_string()
                aria-label="Go to previous page"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_page_change.run(target);
                }
            >
                {icon("chevron-left")}
                <span>"Previous"</span>
            </a>
        }
        .into_any(),
        PageItem::Page { number, active } => view! {
            <a
                href="#"
                class=if active { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                aria-current=active.then_some("page")
                on:click=move |ev| {
                    ev.prevent_default();
                    on_page_change.run(number);
                }
            >
                {number.to_string()}
            </a>
        }
        .into_any(),
        PageItem::Ellipsis => view! {
            <span class="pagination-ellipsis" aria-hidden="true">
                {icon("more-horizontal")}
            </span>
        }
        .into_any(),
        PageItem::Next { target, disabled } => view! {
            <a
                href="#"
                class=if disabled { "pagination-btn pagination-btn--disabled" } else { "pagination-btn" }
                aria-disabled=disabled.to_string()
                aria-label="Go to next page"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_page_change.run(target);
                }
            >
                <span>"Next"</span>
                {icon("chevron-right")}
            </a>
        }
        .into_any(),
    }
}
