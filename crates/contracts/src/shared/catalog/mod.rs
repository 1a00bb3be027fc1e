//! Catalog listing core: record accessors, search, paging and the column model

pub mod columns;
pub mod dataset;
pub mod filter;
pub mod list_state;
pub mod pagination;
pub mod record;

pub use columns::{CatalogLayout, CellValue, ColumnDef};
pub use dataset::parse_dataset;
pub use filter::{filter_indices, filter_records};
pub use list_state::CatalogListState;
pub use pagination::{
    display_page, page_bounds, page_items, page_slice, total_pages, PageItem, PageWindow,
    PAGE_SIZE, PAGE_WINDOW,
};
pub use record::{is_present, CatalogRecord, UnitPrice, PLACEHOLDER};
