//! Moderator roster page.

use domain::role::Role;
use leptos::prelude::*;

use crate::components::access_gate::AccessGate;

#[component]
pub fn ModeratorsPage() -> impl IntoView {
    view! {
        <AccessGate required_role=Role::Admin>
            <ModeratorList/>
        </AccessGate>
    }
}

#[component]
fn ModeratorList() -> impl IntoView {
    let staff = LocalResource::new(|| crate::net::api::fetch_assignable());

    view! {
        <div class="moderators-page">
            <header class="moderators-page__header">
                <h1>"Moderators"</h1>
                <a href="/admin/moderators/new" class="btn btn--primary">"+ New Moderator"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading moderators..."</p> }>
                {move || {
                    staff
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) if list.is_empty() => view! {
                                <p class="moderators-page__empty">"No staff accounts yet."</p>
                            }
                                .into_any(),
                            Some(list) => view! {
                                <ul class="moderators-page__list">
                                    {list
                                        .into_iter()
                                        .map(|u| view! {
                                            <li class="moderators-page__item">
                                                <span>{u.display_name()}</span>
                                                <span class="moderators-page__email">
                                                    {u.email.clone()}
                                                </span>
                                                <span class="moderators-page__role">
                                                    {u.role_label()}
                                                </span>
                                            </li>
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any(),
                            None => view! {
                                <p class="moderators-page__error">"Could not load moderators."</p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
