use crate::shared::components::catalog_cell::render_cell;
use contracts::shared::catalog::{CatalogRecord, ColumnDef};
use leptos::prelude::*;
use thaw::*;

use super::NO_RESULTS;

/// Desktop view: one table row per record of the current page.
#[component]
pub fn CatalogTable<T>(
    /// Whole dataset; `rows` index into it
    records: &'static [T],
    /// Dataset positions of the records on the current page
    #[prop(into)]
    rows: Signal<Vec<usize>>,
    columns: Vec<ColumnDef<T>>,
) -> impl IntoView
where
    T: CatalogRecord,
{
    let column_count = columns.len();
    let columns = StoredValue::new(columns);

    view! {
        <div class="catalog-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns.with_value(|cols| {
                            cols.iter()
                                .map(|col| {
                                    let (key, title) = (col.key, col.title);
                                    view! {
                                        <TableHeaderCell resizable=false attr:data-key=key>
                                            {title}
                                        </TableHeaderCell>
                                    }
                                })
                                .collect_view()
                        })}
                    </TableRow>
                </TableHeader>

                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|idx| *idx
                        children=move |idx| {
                            let record = &records[idx];
                            view! {
                                <TableRow>
                                    {columns.with_value(|cols| {
                                        cols.iter()
                                            .map(|col| {
                                                let cell = col.cell(record);
                                                let tooltip = cell.display_text();
                                                view! {
                                                    <TableCell attr:title=tooltip>
                                                        <TableCellLayout>{render_cell(cell)}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()
                                    })}
                                </TableRow>
                            }
                        }
                    />
                    <Show when=move || rows.with(Vec::is_empty)>
                        <TableRow>
                            <TableCell class="catalog-empty" attr:colspan=column_count.to_string()>
                                {NO_RESULTS}
                            </TableCell>
                        </TableRow>
                    </Show>
                </TableBody>
            </Table>
        </div>
    }
}
