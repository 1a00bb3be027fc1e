use super::aggregate::Chemical;
use crate::shared::catalog::parse_dataset;
use crate::shared::error::CatalogError;

pub const DATASET_NAME: &str = "chemicals";

/// Catalogue price sheet, bundled at build time
pub const CHEMICALS_JSON: &str = include_str!("../../../data/chemicals.json");

pub fn load() -> Result<Vec<Chemical>, CatalogError> {
    parse_dataset(DATASET_NAME, CHEMICALS_JSON)
}
