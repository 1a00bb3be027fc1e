use crate::domain::a002_sample_chemical::sample_chemicals;
use crate::shared::catalog::CatalogList;
use contracts::domain::a002_sample_chemical::layout;
use leptos::prelude::*;

/// Article-shape listing at `/products`
#[component]
pub fn SampleChemicalList() -> impl IntoView {
    view! { <CatalogList records=sample_chemicals() layout=layout() /> }
}
