use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::domain::a001_chemical::CHEMICALS_ROUTE;
use contracts::domain::a002_sample_chemical::PRODUCTS_ROUTE;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--custom" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <h1 class="page__title">"Chemical Catalog"</h1>
            </div>
            <div class="page__content home__links">
                <A href=CHEMICALS_ROUTE>
                    <div class="home__card">
                        <h2>"Chemicals"</h2>
                        <p>"Laboratory chemicals with purity, pack prices and certificates of analysis."</p>
                    </div>
                </A>
                <A href=PRODUCTS_ROUTE>
                    <div class="home__card">
                        <h2>"Products"</h2>
                        <p>"Article-numbered products with MSDS and COA documents."</p>
                    </div>
                </A>
            </div>
        </PageFrame>
    }
}
