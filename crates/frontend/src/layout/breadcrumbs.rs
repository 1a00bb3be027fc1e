use leptos::prelude::*;
use leptos_router::components::A;

/// One step of the trail. The last step is the current page and has no link.
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// `Home / Chemicals` style trail above the page title
#[component]
pub fn Breadcrumbs(crumbs: Vec<Crumb>) -> impl IntoView {
    let last = crumbs.len().saturating_sub(1);

    view! {
        <nav class="breadcrumbs" aria-label="breadcrumb">
            <ol class="breadcrumbs__list">
                {crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        let item = match crumb.href {
                            Some(href) => view! { <A href=href>{crumb.label}</A> }.into_any(),
                            None => view! {
                                <span class="breadcrumbs__current" aria-current="page">
                                    {crumb.label}
                                </span>
                            }
                            .into_any(),
                        };
                        view! {
                            <li class="breadcrumbs__item">
                                {item}
                                {(idx < last).then(|| view! {
                                    <span class="breadcrumbs__separator" aria-hidden="true">"/"</span>
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}
