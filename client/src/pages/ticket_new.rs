//! New ticket form.

use domain::ticket::TicketPriority;
use leptos::prelude::*;

use crate::components::access_gate::AccessGate;

#[component]
pub fn TicketNewPage() -> impl IntoView {
    view! {
        <AccessGate>
            <TicketNewForm/>
        </AccessGate>
    }
}

#[component]
fn TicketNewForm() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(TicketPriority::Medium.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        if title_value.is_empty() {
            info.set("Enter a title first.".to_owned());
            return;
        }
        let Some(priority_value) = TicketPriority::from_name(&priority.get()) else {
            info.set("Pick a priority.".to_owned());
            return;
        };
        let description_value = description.get();
        busy.set(true);
        info.set("Opening ticket...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let ticket = crate::net::types::NewTicket {
                title: title_value,
                description: description_value,
                priority: priority_value,
            };
            match crate::net::api::create_ticket(&ticket).await {
                Ok(created) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .location()
                            .set_href(&format!("/tickets/{}", created.id));
                    }
                }
                Err(e) => {
                    info.set(format!("Could not open ticket: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="ticket-form-page">
            <h1>"New Ticket"</h1>
            <form class="ticket-form" on:submit=on_submit>
                <label class="ticket-form__label">"Title"</label>
                <input
                    class="ticket-form__input"
                    type="text"
                    maxlength="200"
                    placeholder="Short summary"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <label class="ticket-form__label">"Description"</label>
                <textarea
                    class="ticket-form__textarea"
                    rows="8"
                    placeholder="What happened?"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <label class="ticket-form__label">"Priority"</label>
                <select
                    class="ticket-form__select"
                    prop:value=move || priority.get()
                    on:change=move |ev| priority.set(event_target_value(&ev))
                >
                    {TicketPriority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Open Ticket"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="ticket-form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
