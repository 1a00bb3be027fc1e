pub mod catalog;
pub mod error;
pub mod lenient;

pub use error::CatalogError;
