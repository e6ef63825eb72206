//! Declarative route guard wrapping protected page content.

use domain::role::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::gate::{self, GateDecision};

/// Renders its children only when the session satisfies the route's
/// requirements. While the session is loading it renders a placeholder;
/// once resolved, unauthenticated or under-privileged users are
/// navigated away instead of seeing the content.
#[component]
pub fn AccessGate(
    /// Minimum role needed to view the content, if any.
    #[prop(into, optional)]
    required_role: Option<Role>,
    /// Whether a signed-in session is required at all.
    #[prop(default = true)]
    require_auth: bool,
    /// Where to send unauthenticated visitors.
    #[prop(default = String::from(gate::DEFAULT_LOGIN_PATH), into)]
    redirect_to: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        gate::decide(&auth.get(), require_auth, required_role, &redirect_to)
    });

    Effect::new(move || {
        if let GateDecision::Redirect(path) = decision.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    move || match decision.get() {
        GateDecision::Allow => children().into_any(),
        GateDecision::Pending => {
            view! { <div class="access-gate__loading">"Loading..."</div> }.into_any()
        }
        GateDecision::Redirect(_) => ().into_any(),
    }
}
