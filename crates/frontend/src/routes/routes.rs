use crate::domain::a001_chemical::ui::details::ChemicalDetails;
use crate::domain::a001_chemical::ui::list::ChemicalList;
use crate::domain::a002_sample_chemical::ui::list::SampleChemicalList;
use crate::layout::home::HomePage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <p class="page__empty-text">"Page not found."</p>
            <A href="/">"Back to home"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/chemicals") view=ChemicalList />
                <Route path=path!("/chemicals/:catalogue_number") view=ChemicalDetails />
                <Route path=path!("/products") view=SampleChemicalList />
            </Routes>
        </Shell>
    }
}
