//! TopHeader component - site brand and links to the listings.

use contracts::domain::a001_chemical::CHEMICALS_ROUTE;
use contracts::domain::a002_sample_chemical::PRODUCTS_ROUTE;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <span class="top-header__title">
                <A href="/">"Chemical Catalog"</A>
            </span>
            <nav class="top-header__nav">
                <A href=CHEMICALS_ROUTE>"Chemicals"</A>
                <A href=PRODUCTS_ROUTE>"Products"</A>
            </nav>
        </header>
    }
}
