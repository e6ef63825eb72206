//! Form for creating a moderator account.

use domain::role::Role;
use leptos::prelude::*;

use crate::components::access_gate::AccessGate;

#[component]
pub fn ModeratorNewPage() -> impl IntoView {
    view! {
        <AccessGate required_role=Role::Admin>
            <ModeratorNewForm/>
        </AccessGate>
    }
}

#[component]
fn ModeratorNewForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        let optional = |s: String| {
            let s = s.trim().to_owned();
            (!s.is_empty()).then_some(s)
        };
        let first = optional(first_name.get());
        let last = optional(last_name.get());
        busy.set(true);
        info.set("Creating moderator...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let data = crate::net::api::SignupData {
                email: email_value,
                password: password_value,
                first_name: first,
                last_name: last,
            };
            match crate::net::api::create_moderator(&data).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/admin/moderators");
                    }
                }
                Err(e) => {
                    info.set(format!("Could not create moderator: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="moderator-form-page">
            <h1>"New Moderator"</h1>
            <form class="ticket-form" on:submit=on_submit>
                <input
                    class="ticket-form__input"
                    type="text"
                    placeholder="First name (optional)"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <input
                    class="ticket-form__input"
                    type="text"
                    placeholder="Last name (optional)"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
                <input
                    class="ticket-form__input"
                    type="email"
                    placeholder="moderator@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="ticket-form__input"
                    type="password"
                    placeholder="Password (8+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create Moderator"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="ticket-form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
