pub mod cards;
pub mod list;
pub mod state;
pub mod table;

pub use cards::record_card;
pub use list::CatalogList;
pub use state::load_or_empty;

/// Empty-state message of both views
pub const NO_RESULTS: &str = "No results found.";
