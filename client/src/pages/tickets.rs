//! Ticket list page.

use leptos::prelude::*;

use crate::components::access_gate::AccessGate;
use crate::components::ticket_card::TicketCard;

/// List of tickets the signed-in user may see. Regular users see their
/// own and assigned tickets; staff see everything (the server scopes the
/// query).
#[component]
pub fn TicketsPage() -> impl IntoView {
    view! {
        <AccessGate>
            <TicketList/>
        </AccessGate>
    }
}

#[component]
fn TicketList() -> impl IntoView {
    let tickets = LocalResource::new(|| crate::net::api::fetch_tickets());

    view! {
        <div class="tickets-page">
            <header class="tickets-page__header">
                <h1>"Tickets"</h1>
                <a href="/tickets/new" class="btn btn--primary">"+ New Ticket"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Loading tickets..."</p> }>
                {move || {
                    tickets
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) if list.is_empty() => view! {
                                <p class="tickets-page__empty">
                                    "No tickets yet. Open one with the button above."
                                </p>
                            }
                                .into_any(),
                            Some(list) => view! {
                                <div class="tickets-page__list">
                                    {list
                                        .into_iter()
                                        .map(|t| view! { <TicketCard ticket=t/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                            None => view! {
                                <p class="tickets-page__error">"Could not load tickets."</p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
