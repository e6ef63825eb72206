//! Top navigation bar with role-aware links and logout.

use domain::role::Role;
use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Site-wide navigation. Shows the signed-in user's display name, an
/// admin link only for admins, and a logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let display_name = move || {
        auth.get()
            .user
            .map_or_else(String::new, |u| u.display_name())
    };
    let signed_in = move || auth.get().is_authenticated();
    let is_admin = move || {
        auth.get()
            .user
            .as_ref()
            .is_some_and(|u| u.has_role(Role::Admin))
    };

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.set_user(None));
                // Full reload clears any page-local state.
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"Smart Tickets"</a>
            <div class="navbar__links">
                <a href="/tickets" class="navbar__link">"Tickets"</a>
                <Show when=is_admin>
                    <a href="/admin" class="navbar__link">"Admin"</a>
                </Show>
            </div>
            <Show
                when=signed_in
                fallback=|| view! { <a href="/login" class="navbar__link">"Log in"</a> }
            >
                <div class="navbar__session">
                    <span class="navbar__user">{display_name}</span>
                    <button class="navbar__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
