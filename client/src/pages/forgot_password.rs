//! Static notice page for password recovery.

use leptos::prelude::*;

/// Password reset is handled out of band, so this page only points the
/// user at an administrator.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot your password?"</h1>
                <p>
                    "Password resets are handled by your administrator. "
                    "Contact them to have your account password reset."
                </p>
                <p class="auth-card__footer">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
