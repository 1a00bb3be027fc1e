pub mod aggregate;
pub mod dataset;
pub mod layout;

pub use aggregate::{PackPrice, SampleChemical, PRODUCTS_ROUTE};
pub use layout::layout;
