//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_chemical--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity searchable: copy the id from the
//! DOM inspector and it leads to `domain/a001_chemical/`.

/// List of records with search box, table/cards and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Free-form page (home).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// `{entity}--{category}`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}
