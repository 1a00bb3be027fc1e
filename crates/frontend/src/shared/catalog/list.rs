use super::cards::CatalogCards;
use super::state::create_state;
use super::table::CatalogTable;
use crate::layout::breadcrumbs::{Breadcrumbs, Crumb};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::shared::catalog::{
    display_page, filter_indices, page_slice, total_pages, CatalogLayout, CatalogRecord,
};
use leptos::prelude::*;

/// Searchable, paginated listing of one dataset.
///
/// The table and the card stack always render the same page; CSS picks
/// which one is visible for the viewport.
#[component]
pub fn CatalogList<T>(records: &'static [T], layout: CatalogLayout<T>) -> impl IntoView
where
    T: CatalogRecord,
{
    let state = create_state();

    let matched = Memo::new(move |_| state.with(|s| filter_indices(records, &s.query)));
    let pages = Memo::new(move |_| matched.with(|m| total_pages(m.len())));
    let current_page = Signal::derive(move || state.with(|s| display_page(s.page, pages.get())));
    let page_rows = Signal::derive(move || {
        let page = state.with(|s| s.page);
        matched.with(|m| page_slice(m, page).to_vec())
    });

    let query = Signal::derive(move || state.with(|s| s.query.clone()));

    let on_query = Callback::new(move |text: String| {
        log::debug!("catalog search: {:?}", text);
        state.update(|s| s.set_query(text));
    });

    let on_submit = Callback::new(move |_: ()| {
        state.update(|s| s.submit_search());
    });

    let on_page_change = Callback::new(move |target: usize| {
        let count = matched.with_untracked(Vec::len);
        let mut moved = false;
        state.update(|s| moved = s.go_to_page_of(target, count));
        if !moved {
            log::debug!("page {} ignored ({} matches)", target, count);
        }
    });

    let CatalogLayout {
        entity,
        title,
        search_placeholder,
        table,
        card,
    } = layout;

    view! {
        <PageFrame page_id=page_id(entity, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <Breadcrumbs crumbs=vec![Crumb::link("Home", "/"), Crumb::current(title)] />
                <PageHeader title=title subtitle="List".to_string()>
                    <Badge variant="primary".to_string()>
                        {move || format!("{} of {}", matched.with(Vec::len), records.len())}
                    </Badge>
                </PageHeader>
                <SearchInput
                    value=query
                    on_change=on_query
                    on_submit=on_submit
                    placeholder=search_placeholder
                />
            </div>

            <div class="page__content">
                <CatalogTable records=records rows=page_rows columns=table />
                <CatalogCards records=records rows=page_rows columns=card />
                <PaginationControls
                    current_page=current_page
                    total_pages=pages
                    on_page_change=on_page_change
                />
            </div>
        </PageFrame>
    }
}
