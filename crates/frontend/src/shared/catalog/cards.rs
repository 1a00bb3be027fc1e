use crate::shared::components::catalog_cell::render_cell;
use contracts::shared::catalog::{CatalogRecord, ColumnDef};
use leptos::prelude::*;

use super::NO_RESULTS;

/// Label/value rows for one record. Also used by the detail page.
pub fn record_card<T: CatalogRecord>(record: &T, rows: &[ColumnDef<T>]) -> impl IntoView {
    view! {
        <div class="catalog-card">
            <table class="catalog-card__table">
                <tbody>
                    {rows
                        .iter()
                        .map(|col| {
                            let cell = col.cell(record);
                            view! {
                                <tr class="catalog-card__row" data-key=col.key>
                                    <th class="catalog-card__label">{format!("{} :", col.title)}</th>
                                    <td class="catalog-card__value">{render_cell(cell)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Mobile view: stacked cards for the records of the current page.
#[component]
pub fn CatalogCards<T>(
    records: &'static [T],
    #[prop(into)]
    rows: Signal<Vec<usize>>,
    columns: Vec<ColumnDef<T>>,
) -> impl IntoView
where
    T: CatalogRecord,
{
    let columns = StoredValue::new(columns);

    view! {
        <div class="catalog-cards">
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <div class="catalog-empty">{NO_RESULTS}</div> }
            >
                <For
                    each=move || rows.get()
                    key=|idx| *idx
                    children=move |idx| columns.with_value(|cols| record_card(&records[idx], cols))
                />
            </Show>
        </div>
    }
}
