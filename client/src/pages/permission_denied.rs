//! Landing page for users who lack the role a route requires.

use leptos::prelude::*;

#[component]
pub fn PermissionDeniedPage() -> impl IntoView {
    view! {
        <div class="denied-page">
            <h1>"Permission denied"</h1>
            <p>"Your account does not have access to that page."</p>
            <a href="/" class="denied-page__home">"Back to dashboard"</a>
        </div>
    }
}
