use super::aggregate::SampleChemical;
use crate::shared::catalog::parse_dataset;
use crate::shared::error::CatalogError;

pub const DATASET_NAME: &str = "sample_chemicals";

/// Article-numbered product list, bundled at build time
pub const SAMPLE_CHEMICALS_JSON: &str = include_str!("../../../data/sample_chemicals.json");

pub fn load() -> Result<Vec<SampleChemical>, CatalogError> {
    parse_dataset(DATASET_NAME, SAMPLE_CHEMICALS_JSON)
}
