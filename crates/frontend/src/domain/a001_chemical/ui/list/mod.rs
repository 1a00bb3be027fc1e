use crate::domain::a001_chemical::chemicals;
use crate::shared::catalog::CatalogList;
use contracts::domain::a001_chemical::layout;
use leptos::prelude::*;

#[component]
pub fn ChemicalList() -> impl IntoView {
    view! { <CatalogList records=chemicals() layout=layout() /> }
}
