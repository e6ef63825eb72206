//! Breadcrumb trail rendered from the current route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::breadcrumbs::derive_trail;

/// Breadcrumb navigation for the current path. Renders nothing on the
/// root and auth routes.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();

    move || {
        let trail = derive_trail(&location.pathname.get());
        if trail.is_empty() {
            return ().into_any();
        }
        view! {
            <nav class="breadcrumbs" aria-label="Breadcrumb">
                {trail
                    .into_iter()
                    .map(|crumb| match crumb.href {
                        Some(href) => view! {
                            <a class="breadcrumbs__link" href=href>{crumb.label}</a>
                        }
                            .into_any(),
                        None => view! {
                            <span class="breadcrumbs__current">{crumb.label}</span>
                        }
                            .into_any(),
                    })
                    .collect::<Vec<_>>()}
            </nav>
        }
        .into_any()
    }
}
