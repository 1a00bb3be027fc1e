pub mod aggregate;
pub mod dataset;
pub mod layout;

pub use aggregate::{find_by_catalogue_number, find_by_route_param, Chemical, CHEMICALS_ROUTE};
pub use layout::layout;
