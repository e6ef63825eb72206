//! Reusable card component for ticket list items.

use leptos::prelude::*;

use crate::net::types::Ticket;

/// A clickable card summarizing one ticket in a list.
#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let href = format!("/tickets/{}", ticket.id);
    let status_class = format!("ticket-card__status ticket-card__status--{}", ticket.status.as_str());
    let priority_class = format!(
        "ticket-card__priority ticket-card__priority--{}",
        ticket.priority.as_str()
    );

    view! {
        <a class="ticket-card" href=href>
            <span class="ticket-card__title">{ticket.title}</span>
            <span class=status_class>{ticket.status.label()}</span>
            <span class=priority_class>{ticket.priority.label()}</span>
            <span class="ticket-card__requester">{ticket.requester}</span>
            <span class="ticket-card__date">{ticket.created_at}</span>
        </a>
    }
}
