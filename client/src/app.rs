//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{breadcrumbs::Breadcrumbs, navbar::Navbar};
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage,
    login::LoginPage, moderator_new::ModeratorNewPage, moderators::ModeratorsPage,
    permission_denied::PermissionDeniedPage, signup::SignupPage, ticket_detail::TicketDetailPage,
    ticket_new::TicketNewPage, tickets::TicketsPage,
};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the shared auth context, kicks off the initial session fetch,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resolve the session once on startup. The epoch token makes sure a
    // login completing before this response lands is not overwritten.
    #[cfg(feature = "csr")]
    {
        let epoch = auth.try_update(AuthState::begin_fetch).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.resolve(epoch, user));
        });
    }

    view! {
        <Title text="Smart Tickets"/>

        <Router>
            <Navbar/>
            <Breadcrumbs/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("permission-denied") view=PermissionDeniedPage/>
                    <Route path=StaticSegment("tickets") view=TicketsPage/>
                    <Route
                        path=(StaticSegment("tickets"), StaticSegment("new"))
                        view=TicketNewPage
                    />
                    <Route
                        path=(StaticSegment("tickets"), ParamSegment("id"))
                        view=TicketDetailPage
                    />
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("moderators"))
                        view=ModeratorsPage
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("moderators"),
                            StaticSegment("new"),
                        )
                        view=ModeratorNewPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
