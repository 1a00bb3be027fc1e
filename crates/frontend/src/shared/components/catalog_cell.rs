use crate::shared::icons::icon;
use contracts::shared::catalog::{CellValue, PLACEHOLDER};
use leptos::prelude::*;
use leptos_router::components::A;

/// Markup for one cell of the catalog table or card.
pub fn render_cell(value: CellValue) -> AnyView {
    match value {
        CellValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellValue::Placeholder => {
            view! { <span class="catalog-cell__placeholder">{PLACEHOLDER}</span> }.into_any()
        }
        CellValue::Lines(lines) => view! {
            <ul class="catalog-cell__lines">
                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
        CellValue::Link { href, label } => view! {
            <span class="catalog-cell__link">
                <A href=href>{label}</A>
            </span>
        }
        .into_any(),
        CellValue::Document { href, label } => view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="catalog-cell__document"
            >
                {icon("file-text")}
                {label}
            </a>
        }
        .into_any(),
    }
}
