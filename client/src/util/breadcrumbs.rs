//! Breadcrumb trails derived from the current URL path.
//!
//! Each path segment becomes a crumb linking to its accumulated prefix,
//! with a "Home" crumb in front. The last crumb is the current page and
//! carries no link. Auth pages and the root suppress the trail entirely.

/// One entry in a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the current page.
    pub href: Option<String>,
}

/// Known segments and their display labels. Anything else falls back to
/// capitalizing the raw segment.
const SEGMENT_LABELS: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("tickets", "Tickets"),
    ("new", "New"),
    ("admin", "Admin"),
    ("moderators", "Moderators"),
    ("profile", "Profile"),
    ("permission-denied", "Permission Denied"),
];

/// Any path containing one of these never shows a trail.
const SUPPRESSED: &[&str] = &["/login", "/signup", "/forgot-password"];

fn segment_label(segment: &str) -> String {
    for (name, label) in SEGMENT_LABELS {
        if *name == segment {
            return (*label).to_owned();
        }
    }
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the trail for `path`. Empty for the root and for auth routes.
#[must_use]
pub fn derive_trail(path: &str) -> Vec<Crumb> {
    if path == "/" || SUPPRESSED.iter().any(|marker| path.contains(marker)) {
        return Vec::new();
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Vec::new();
    }

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(Crumb {
        label: "Home".to_owned(),
        href: Some("/".to_owned()),
    });

    let mut prefix = String::new();
    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        prefix.push('/');
        prefix.push_str(segment);
        trail.push(Crumb {
            label: segment_label(segment),
            href: (i != last).then(|| prefix.clone()),
        });
    }
    trail
}

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod tests;
