use contracts::shared::catalog::CatalogListState;
use contracts::shared::CatalogError;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}

/// Unwraps a decoded dataset. A broken bundle is logged and shows as an
/// empty listing instead of taking the page down.
pub fn load_or_empty<T>(result: Result<Vec<T>, CatalogError>) -> Vec<T> {
    match result {
        Ok(records) => {
            log::debug!("dataset loaded: {} records", records.len());
            records
        }
        Err(e) => {
            log::error!("{}", e);
            Vec::new()
        }
    }
}
