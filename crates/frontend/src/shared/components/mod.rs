pub mod catalog_cell;
pub mod page_header;
pub mod pagination_controls;
pub mod ui;
