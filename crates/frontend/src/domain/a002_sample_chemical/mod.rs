pub mod ui;

use crate::shared::catalog::load_or_empty;
use contracts::domain::a002_sample_chemical::dataset;
use contracts::domain::a002_sample_chemical::SampleChemical;
use once_cell::sync::Lazy;

static SAMPLE_CHEMICALS: Lazy<Vec<SampleChemical>> =
    Lazy::new(|| load_or_empty(dataset::load()));

pub fn sample_chemicals() -> &'static [SampleChemical] {
    &SAMPLE_CHEMICALS
}
