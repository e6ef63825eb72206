//! Signup page with registration form.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::auth::AuthState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let auth = expect_context::<RwSignal<AuthState>>();

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
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let data = crate::net::api::SignupData {
                email: email_value,
                password: password_value,
                first_name: first,
                last_name: last,
            };
            match crate::net::api::signup(&data).await {
                Ok(user) => {
                    auth.update(|a| a.set_user(Some(user)));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(format!("Signup failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Smart Tickets"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="First name (optional)"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Last name (optional)"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    <a href="/login">"Already have an account? Sign in"</a>
                </p>
            </div>
        </div>
    }
}
