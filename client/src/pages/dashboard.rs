//! Dashboard page with ticket stats and quick links.

use leptos::prelude::*;

use crate::components::access_gate::AccessGate;
use crate::state::auth::AuthState;

/// Signed-in landing page. Shows ticket counts by status and shortcuts
/// into the ticket list.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AccessGate>
            <DashboardContent/>
        </AccessGate>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.get()
            .user
            .map_or_else(String::new, |u| format!("Welcome back, {}", u.display_name()))
    };

    let stats = LocalResource::new(|| crate::net::api::fetch_stats());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <a href="/tickets/new" class="btn btn--primary">"+ New Ticket"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|loaded| match loaded {
                            Some(s) => view! {
                                <div class="dashboard-page__stats">
                                    <StatCard label="Open" value=s.open/>
                                    <StatCard label="In Progress" value=s.in_progress/>
                                    <StatCard label="Resolved" value=s.resolved/>
                                    <StatCard label="Closed" value=s.closed/>
                                    <StatCard label="Total" value=s.total/>
                                </div>
                            }
                                .into_any(),
                            None => view! {
                                <p class="dashboard-page__error">"Could not load stats."</p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>

            <a href="/tickets" class="dashboard-page__link">"View all tickets"</a>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: i64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
