//! The list the message pane shows: folder membership, then search, then
//! newest first.

use crate::models::{Email, ViewFolder};

/// Records visible in `folder` that match `query`, newest first.
///
/// An empty query matches everything. Matching is a case-insensitive
/// substring test over subject, sender and body. Records with equal
/// timestamps keep their collection order.
pub fn visible_emails<'a>(emails: &'a [Email], folder: &ViewFolder, query: &str) -> Vec<&'a Email> {
    let needle = query.to_lowercase();
    let mut visible: Vec<&Email> = emails
        .iter()
        .filter(|e| folder.shows(e))
        .filter(|e| needle.is_empty() || e.matches_lowercase(&needle))
        .collect();
    // sort_by is stable
    visible.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    visible
}
