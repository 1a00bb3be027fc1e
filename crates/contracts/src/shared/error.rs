use thiserror::Error;

/// Errors raised while preparing catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("dataset '{name}' could not be decoded: {source}")]
    Dataset {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset '{name}' must be a JSON array of records")]
    NotAnArray { name: &'static str },
}
