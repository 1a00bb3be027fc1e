pub mod ui;

use crate::shared::catalog::load_or_empty;
use contracts::domain::a001_chemical::dataset;
use contracts::domain::a001_chemical::Chemical;
use once_cell::sync::Lazy;

static CHEMICALS: Lazy<Vec<Chemical>> = Lazy::new(|| load_or_empty(dataset::load()));

/// Catalogue dataset bundled into the app, decoded on first use
pub fn chemicals() -> &'static [Chemical] {
    &CHEMICALS
}
