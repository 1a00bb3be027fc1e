use crate::domain::a001_chemical::chemicals;
use crate::layout::breadcrumbs::{Breadcrumbs, Crumb};
use crate::shared::catalog::record_card;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use contracts::domain::a001_chemical::layout::ENTITY;
use contracts::domain::a001_chemical::{find_by_route_param, layout, Chemical, CHEMICALS_ROUTE};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// `/chemicals/:catalogue_number`
#[component]
pub fn ChemicalDetails() -> impl IntoView {
    let params = use_params_map();
    let catalogue_number = Memo::new(move |_| {
        params.with(|p| p.get("catalogue_number").unwrap_or_default())
    });

    let record = move || {
        let number = catalogue_number.get();
        let found = find_by_route_param(chemicals(), &number);
        if found.is_none() {
            log::warn!("no chemical with catalogue number {:?}", number);
        }
        found
    };

    view! {
        <PageFrame page_id=page_id(ENTITY, PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            {move || match record() {
                Some(chemical) => found_view(chemical).into_any(),
                None => not_found_view().into_any(),
            }}
        </PageFrame>
    }
}

fn found_view(chemical: &Chemical) -> impl IntoView {
    let name = chemical
        .chemical_name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| chemical.catalogue_number.clone())
        .unwrap_or_default();
    let rows = layout().card;

    view! {
        <div class="page__header">
            <Breadcrumbs crumbs=vec![
                Crumb::link("Home", "/"),
                Crumb::link("Chemicals", CHEMICALS_ROUTE),
                Crumb::current(name.clone()),
            ] />
            <PageHeader title=name subtitle=chemical.catalogue_number.clone().unwrap_or_default()>
                <A href=CHEMICALS_ROUTE>"Back to list"</A>
            </PageHeader>
        </div>
        <div class="page__content">
            {record_card(chemical, &rows)}
        </div>
    }
}

fn not_found_view() -> impl IntoView {
    view! {
        <div class="page__content catalog-empty">
            <p>"Chemical not found."</p>
            <A href=CHEMICALS_ROUTE>"Back to list"</A>
        </div>
    }
}
