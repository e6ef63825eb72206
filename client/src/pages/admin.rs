//! Admin overview page with full user management.

use domain::role::Role;
use leptos::prelude::*;
use uuid::Uuid;

use crate::components::access_gate::AccessGate;
use crate::net::types::User;
use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AccessGate required_role=Role::Admin>
            <AdminContent/>
        </AccessGate>
    }
}

#[component]
fn AdminContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let self_id = auth.get_untracked().user.map(|u| u.id);

    let version = RwSignal::new(0u32);
    let users = LocalResource::new(move || {
        version.track();
        crate::net::api::fetch_users()
    });
    let info = RwSignal::new(String::new());

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"User Management"</h1>
                <a href="/admin/moderators" class="btn">"Moderators"</a>
            </header>

            <Show when=move || !info.get().is_empty()>
                <p class="admin-page__message">{move || info.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) => view! {
                                <table class="admin-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th>"Joined"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|u| view! {
                                                <UserRow
                                                    user=u
                                                    self_id=self_id
                                                    version=version
                                                    info=info
                                                />
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                            None => view! {
                                <p class="admin-page__error">"Could not load users."</p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn UserRow(
    user: User,
    self_id: Option<Uuid>,
    version: RwSignal<u32>,
    info: RwSignal<String>,
) -> impl IntoView {
    let user_id = user.id;
    let is_self = Some(user_id) == self_id;
    let current_role = user.role.clone();

    let on_role = move |ev: leptos::ev::Event| {
        let role = event_target_value(&ev);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user_role(user_id, &role).await {
                Ok(()) => {
                    info.set(String::new());
                    version.update(|v| *v += 1);
                }
                Err(e) => info.set(format!("Role change failed: {e}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = role;
    };

    let on_delete = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(user_id).await {
                Ok(()) => {
                    info.set(String::new());
                    version.update(|v| *v += 1);
                }
                Err(e) => info.set(format!("Delete failed: {e}")),
            }
        });
    };

    view! {
        <tr class="admin-page__row">
            <td>{user.display_name()}</td>
            <td>{user.email.clone()}</td>
            <td>
                <select disabled=is_self on:change=on_role>
                    {Role::ALL
                        .into_iter()
                        .map(|r| {
                            let selected = r.as_str() == current_role;
                            view! {
                                <option value=r.as_str() selected=selected>{r.label()}</option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td>{user.created_at.clone().unwrap_or_default()}</td>
            <td>
                <button class="btn btn--danger" disabled=is_self on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
