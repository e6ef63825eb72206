//! Display-name resolution.
//!
//! One canonical rule for the whole system, applied the same way on the
//! server (ticket requester/assignee columns) and the client (navbar,
//! member lists). Precedence: first+last name, then first name only, then
//! last name only, then the local part of the email address.

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve a display name from profile fields.
#[must_use]
pub fn display_name(first_name: Option<&str>, last_name: Option<&str>, email: &str) -> String {
    match (present(first_name), present(last_name)) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.to_owned(),
        (None, Some(last)) => last.to_owned(),
        (None, None) => email_local_part(email).to_owned(),
    }
}

/// Local part of an email address, falling back to `"user"` when the
/// address has no usable local part.
#[must_use]
pub fn email_local_part(email: &str) -> &str {
    email
        .split('@')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("user")
}
