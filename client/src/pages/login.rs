//! Login page with email + password form.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let credentials = crate::net::api::Credentials {
                email: email_value,
                password: password_value,
            };
            match crate::net::api::login(&credentials).await {
                Ok(user) => {
                    auth.update(|a| a.set_user(Some(user)));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(format!("Login failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Smart Tickets"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
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
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    <a href="/forgot-password">"Forgot password?"</a>
                    " | "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
