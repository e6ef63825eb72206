//! REST API helpers for communicating with the server.
//!
//! Browser builds (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `None`/error so pure-logic tests link
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! fetch failures degrade page behavior without crashing the app. A failed
//! `/api/auth/me` means "anonymous", never an error surface.

#![allow(clippy::unused_async)]

use uuid::Uuid;

use super::types::{NewTicket, Ticket, TicketPatch, TicketStats, User};

#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SignupData {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg(feature = "csr")]
async fn error_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => format!("request failed: {status}"),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn login(credentials: &Credentials) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err("not available outside the browser".to_owned())
    }
}

/// Register via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn signup(data: &SignupData) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(data)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = data;
        Err("not available outside the browser".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch visible tickets from `/api/tickets`.
pub async fn fetch_tickets() -> Option<Vec<Ticket>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/tickets").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Ticket>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch one ticket from `/api/tickets/{id}`.
pub async fn fetch_ticket(ticket_id: Uuid) -> Option<Ticket> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/tickets/{ticket_id}");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Ticket>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ticket_id;
        None
    }
}

/// Open a ticket via `POST /api/tickets`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn create_ticket(ticket: &NewTicket) -> Result<Ticket, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/tickets")
            .json(ticket)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<Ticket>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ticket;
        Err("not available outside the browser".to_owned())
    }
}

/// Patch a ticket via `PATCH /api/tickets/{id}`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn update_ticket(ticket_id: Uuid, patch: &TicketPatch) -> Result<Ticket, String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/tickets/{ticket_id}");
        let resp = gloo_net::http::Request::patch(&url)
            .json(patch)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<Ticket>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ticket_id, patch);
        Err("not available outside the browser".to_owned())
    }
}

/// Delete a ticket via `DELETE /api/tickets/{id}`.
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn delete_ticket(ticket_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/tickets/{ticket_id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ticket_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch dashboard stats from `/api/tickets/stats`.
pub async fn fetch_stats() -> Option<TicketStats> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/tickets/stats").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<TicketStats>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch all accounts from `/api/users` (admin).
pub async fn fetch_users() -> Option<Vec<User>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/users").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<User>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch staff accounts from `/api/users/assignable` (moderator+).
pub async fn fetch_assignable() -> Option<Vec<User>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/users/assignable").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<User>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Create a moderator account via `POST /api/users/moderators` (admin).
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn create_moderator(data: &SignupData) -> Result<User, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/users/moderators")
            .json(data)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = data;
        Err("not available outside the browser".to_owned())
    }
}

/// Change an account's role via `PATCH /api/users/{id}/role` (admin).
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn update_user_role(user_id: Uuid, role: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/users/{user_id}/role");
        let resp = gloo_net::http::Request::patch(&url)
            .json(&serde_json::json!({ "role": role }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, role);
        Err("not available outside the browser".to_owned())
    }
}

/// Delete an account via `DELETE /api/users/{id}` (admin).
///
/// # Errors
///
/// Returns the server's message (or a generic one) on failure.
pub async fn delete_user(user_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/users/{user_id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        Err("not available outside the browser".to_owned())
    }
}
