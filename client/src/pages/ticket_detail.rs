//! Ticket detail page with role-aware edit controls.

use domain::role::Role;
use domain::ticket::{TicketPriority, TicketStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::components::access_gate::AccessGate;
use crate::net::types::{Ticket, TicketPatch, User};
use crate::state::auth::AuthState;

#[component]
pub fn TicketDetailPage() -> impl IntoView {
    view! {
        <AccessGate>
            <TicketDetail/>
        </AccessGate>
    }
}

#[component]
fn TicketDetail() -> impl IntoView {
    let params = use_params_map();
    let ticket_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<Uuid>().ok())
    });

    // Bumped after every successful mutation to refetch the ticket.
    let version = RwSignal::new(0u32);
    let ticket = LocalResource::new(move || {
        let id = ticket_id.get();
        version.track();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_ticket(id).await,
                None => None,
            }
        }
    });

    view! {
        <div class="ticket-detail-page">
            <Suspense fallback=move || view! { <p>"Loading ticket..."</p> }>
                {move || {
                    ticket
                        .get()
                        .map(|loaded| match loaded {
                            Some(t) => view! { <TicketView ticket=t version=version/> }.into_any(),
                            None => view! {
                                <p class="ticket-detail-page__error">
                                    "Ticket not found or not visible to you."
                                </p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn TicketView(ticket: Ticket, version: RwSignal<u32>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let viewer = auth.get_untracked().user;

    let is_owner = viewer.as_ref().is_some_and(|u| u.id == ticket.created_by);
    let is_staff = viewer.as_ref().is_some_and(|u| u.has_role(Role::Moderator));
    let is_admin = viewer.as_ref().is_some_and(|u| u.has_role(Role::Admin));
    let can_edit_body = is_owner || is_staff;
    let can_delete = is_owner || is_admin;

    let ticket_id = ticket.id;
    let info = RwSignal::new(String::new());
    let editing = RwSignal::new(false);
    let title = RwSignal::new(ticket.title.clone());
    let description = RwSignal::new(ticket.description.clone());

    let apply_patch = move |patch: TicketPatch| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_ticket(ticket_id, &patch).await {
                Ok(_) => {
                    editing.set(false);
                    info.set(String::new());
                    version.update(|v| *v += 1);
                }
                Err(e) => info.set(format!("Update failed: {e}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = patch;
    };

    let on_save_body = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_owned();
        if title_value.is_empty() {
            info.set("Title cannot be empty.".to_owned());
            return;
        }
        apply_patch(TicketPatch {
            title: Some(title_value),
            description: Some(description.get()),
            ..TicketPatch::default()
        });
    };

    let on_priority = move |ev: leptos::ev::Event| {
        if let Some(p) = TicketPriority::from_name(&event_target_value(&ev)) {
            apply_patch(TicketPatch {
                priority: Some(p),
                ..TicketPatch::default()
            });
        }
    };

    let on_status = move |ev: leptos::ev::Event| {
        if let Some(s) = TicketStatus::from_name(&event_target_value(&ev)) {
            apply_patch(TicketPatch {
                status: Some(s),
                ..TicketPatch::default()
            });
        }
    };

    let on_assign = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let assigned_to = if raw.is_empty() {
            Some(None)
        } else {
            match raw.parse::<Uuid>() {
                Ok(id) => Some(Some(id)),
                Err(_) => return,
            }
        };
        apply_patch(TicketPatch {
            assigned_to,
            ..TicketPatch::default()
        });
    };

    let on_delete = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_ticket(ticket_id).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/tickets");
                    }
                }
                Err(e) => info.set(format!("Delete failed: {e}")),
            }
        });
    };

    let current_priority = ticket.priority;
    let current_status = ticket.status;
    let current_assignee = ticket.assigned_to;

    view! {
        <article class="ticket-detail">
            <header class="ticket-detail__header">
                <Show
                    when=move || editing.get()
                    fallback={
                        let heading = ticket.title.clone();
                        move || view! { <h1>{heading.clone()}</h1> }
                    }
                >
                    <form class="ticket-detail__edit" on:submit=on_save_body>
                        <input
                            class="ticket-form__input"
                            type="text"
                            maxlength="200"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <textarea
                            class="ticket-form__textarea"
                            rows="8"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary" type="submit">"Save"</button>
                        <button class="btn" type="button" on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                    </form>
                </Show>
                <Show when=move || can_edit_body && !editing.get()>
                    <button class="btn" on:click=move |_| editing.set(true)>"Edit"</button>
                </Show>
            </header>

            <Show when=move || !editing.get()>
                <p class="ticket-detail__description">{ticket.description.clone()}</p>
            </Show>

            <dl class="ticket-detail__meta">
                <dt>"Requester"</dt>
                <dd>{ticket.requester.clone()}</dd>
                <dt>"Assignee"</dt>
                <dd>{ticket.assignee.clone().unwrap_or_else(|| "Unassigned".to_owned())}</dd>
                <dt>"Opened"</dt>
                <dd>{ticket.created_at.clone()}</dd>
                <dt>"Updated"</dt>
                <dd>{ticket.updated_at.clone()}</dd>
            </dl>

            <div class="ticket-detail__controls">
                <Show when=move || can_edit_body>
                    <label>"Priority"</label>
                    <select prop:value=current_priority.as_str() on:change=on_priority>
                        {TicketPriority::ALL
                            .into_iter()
                            .map(|p| view! {
                                <option value=p.as_str() selected={p == current_priority}>
                                    {p.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </Show>

                <Show when=move || is_staff>
                    <label>"Status"</label>
                    <select prop:value=current_status.as_str() on:change=on_status>
                        {TicketStatus::ALL
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.as_str() selected={s == current_status}>
                                    {s.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <AssigneeSelect current=current_assignee on_assign=on_assign/>
                </Show>

                <Show when=move || can_delete>
                    <button class="btn btn--danger" on:click=on_delete>"Delete Ticket"</button>
                </Show>
            </div>

            <Show when=move || !info.get().is_empty()>
                <p class="ticket-detail__message">{move || info.get()}</p>
            </Show>
        </article>
    }
}

/// Staff-only dropdown of assignable moderators and admins.
#[component]
fn AssigneeSelect<F>(current: Option<Uuid>, on_assign: F) -> impl IntoView
where
    F: Fn(leptos::ev::Event) + Copy + Send + 'static,
{
    let assignable = LocalResource::new(|| crate::net::api::fetch_assignable());

    view! {
        <label>"Assignee"</label>
        <Suspense fallback=move || view! { <span>"Loading staff..."</span> }>
            {move || {
                assignable
                    .get()
                    .map(|loaded| {
                        let staff: Vec<User> = loaded.unwrap_or_default();
                        view! {
                            <select on:change=on_assign>
                                <option value="" selected=current.is_none()>"Unassigned"</option>
                                {staff
                                    .into_iter()
                                    .map(|u| {
                                        let id = u.id;
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected={Some(id) == current}
                                            >
                                                {u.display_name()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        }
                    })
            }}
        </Suspense>
    }
}
