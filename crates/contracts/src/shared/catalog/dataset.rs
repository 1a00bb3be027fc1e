use crate::shared::error::CatalogError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a bundled dataset: a JSON array of records in their original order.
pub fn parse_dataset<T: DeserializeOwned>(
    name: &'static str,
    json: &str,
) -> Result<Vec<T>, CatalogError> {
    let value: Value =
        serde_json::from_str(json).map_err(|source| CatalogError::Dataset { name, source })?;
    if !value.is_array() {
        return Err(CatalogError::NotAnArray { name });
    }
    serde_json::from_value(value).map_err(|source| CatalogError::Dataset { name, source })
}
