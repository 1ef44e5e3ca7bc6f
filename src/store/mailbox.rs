use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::commands::MailboxCommand;
use super::notice::Notice;
use crate::config::Config;
use crate::display::FolderCounts;
use crate::models::{Email, EmailId, Folder, ViewFolder};
use crate::{seed, view};

// ---------------------------------------------------------------------------
// MailboxStore — the single writer of email state
// ---------------------------------------------------------------------------

/// In-memory mailbox: the records plus what the list and reading pane
/// currently point at.
///
/// Every command is total. Ids that match no record are skipped, so a batch
/// that names already-archived records still applies to the rest.
#[derive(Debug, Clone, Default)]
pub struct MailboxStore {
    emails: Vec<Email>,
    selection: IndexSet<EmailId>,
    active_folder: ViewFolder,
    search_query: String,
    opened: Option<Email>,
}

/// Owned copy of the whole store state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailboxSnapshot {
    pub emails: Vec<Email>,
    pub selection: IndexSet<EmailId>,
    pub active_folder: ViewFolder,
    pub search_query: String,
    pub opened: Option<Email>,
}

impl MailboxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection (front of the vec is newest
    /// insertion).
    pub fn with_emails(emails: Vec<Email>) -> Self {
        Self {
            emails,
            ..Self::default()
        }
    }

    pub fn with_demo_data(now: DateTime<Utc>) -> Self {
        Self::with_emails(seed::demo_mailbox(now))
    }

    /// Empty or demo mailbox, depending on `config.seed_demo_mailbox`.
    pub fn from_config(config: &Config, now: DateTime<Utc>) -> Self {
        if config.seed_demo_mailbox {
            Self::with_demo_data(now)
        } else {
            Self::new()
        }
    }

    // -- queries -------------------------------------------------------------

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn get(&self, id: &str) -> Option<&Email> {
        self.emails.iter().find(|e| e.id == id)
    }

    pub fn selection(&self) -> &IndexSet<EmailId> {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn active_folder(&self) -> &ViewFolder {
        &self.active_folder
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn opened(&self) -> Option<&Email> {
        self.opened.as_ref()
    }

    /// The message list for the active folder and query.
    pub fn visible(&self) -> Vec<&Email> {
        view::visible_emails(&self.emails, &self.active_folder, &self.search_query)
    }

    pub fn folder_counts(&self) -> FolderCounts {
        FolderCounts::from_emails(&self.emails)
    }

    pub fn snapshot(&self) -> MailboxSnapshot {
        MailboxSnapshot {
            emails: self.emails.clone(),
            selection: self.selection.clone(),
            active_folder: self.active_folder.clone(),
            search_query: self.search_query.clone(),
            opened: self.opened.clone(),
        }
    }

    // -- commands ------------------------------------------------------------

    /// Flip one row's checkbox. Unknown ids are ignored.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.selection.shift_remove(id) {
            return;
        }
        if self.get(id).is_some() {
            self.selection.insert(id.to_string());
        }
    }

    /// Select every record the active folder owns (flag-based for starred
    /// and important, exact folder otherwise). The search query is not
    /// applied.
    pub fn select_all_visible(&mut self) {
        let folder = &self.active_folder;
        self.selection = self
            .emails
            .iter()
            .filter(|e| folder.owns(e))
            .map(|e| e.id.clone())
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Header checkbox behaviour. An empty list always clears, so nothing
    /// off screen gets selected.
    pub fn toggle_select_all(&mut self) {
        if self.selection.len() == self.visible().len() {
            self.clear_selection();
        } else {
            self.select_all_visible();
        }
    }

    /// Returns how many records matched.
    pub fn mark_read(&mut self, ids: &[EmailId]) -> usize {
        self.set_read(ids, true)
    }

    /// Returns how many records matched.
    pub fn mark_unread(&mut self, ids: &[EmailId]) -> usize {
        self.set_read(ids, false)
    }

    fn set_read(&mut self, ids: &[EmailId], read: bool) -> usize {
        let mut matched = 0;
        for email in self.emails.iter_mut().filter(|e| ids.contains(&e.id)) {
            email.is_read = read;
            matched += 1;
        }
        matched
    }

    /// Returns the new starred state, or `None` for an unknown id.
    pub fn toggle_star(&mut self, id: &str) -> Option<bool> {
        let email = self.emails.iter_mut().find(|e| e.id == id)?;
        email.is_starred = !email.is_starred;
        Some(email.is_starred)
    }

    /// Returns the new important state, or `None` for an unknown id.
    pub fn toggle_important(&mut self, id: &str) -> Option<bool> {
        let email = self.emails.iter_mut().find(|e| e.id == id)?;
        email.is_important = !email.is_important;
        Some(email.is_important)
    }

    /// Move matches to trash and clear the selection. Records are kept.
    /// Returns how many records matched.
    pub fn delete(&mut self, ids: &[EmailId]) -> usize {
        let mut moved = 0;
        for email in self.emails.iter_mut().filter(|e| ids.contains(&e.id)) {
            email.folder = Folder::Trash;
            moved += 1;
        }
        self.selection.clear();
        moved
    }

    /// Remove matches from the mailbox for good and clear the selection.
    /// Returns how many records were removed.
    pub fn archive(&mut self, ids: &[EmailId]) -> usize {
        let before = self.emails.len();
        self.emails.retain(|e| !ids.contains(&e.id));
        self.selection.clear();
        before - self.emails.len()
    }

    /// Show `email` in the reading pane, or close the pane with `None`.
    /// Opening marks the stored record read as well as the shown copy.
    pub fn open_email(&mut self, email: Option<Email>) {
        self.opened = email.map(|mut shown| {
            if let Some(stored) = self.emails.iter_mut().find(|e| e.id == shown.id) {
                stored.is_read = true;
            }
            shown.is_read = true;
            shown
        });
    }

    /// Open the stored record with this id. Unknown ids leave the pane as is.
    pub fn open_by_id(&mut self, id: &str) {
        if let Some(email) = self.get(id).cloned() {
            self.open_email(Some(email));
        }
    }

    /// Stored verbatim; case folding happens when the view is computed.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_active_folder(&mut self, folder: impl Into<ViewFolder>) {
        self.active_folder = folder.into();
        self.selection.clear();
        self.opened = None;
    }

    /// Insert at the front of the collection, unmodified.
    pub fn create_email(&mut self, email: Email) {
        self.emails.insert(0, email);
    }

    /// Reset selection and search. There is no remote side, so the records
    /// themselves are left alone.
    pub fn refresh(&mut self) {
        self.selection.clear();
        self.search_query.clear();
    }

    // -- single entry point ---------------------------------------------------

    /// Apply one command and return the notices the user should see.
    pub fn dispatch(&mut self, cmd: MailboxCommand) -> Vec<Notice> {
        log::debug!("mailbox: {}", cmd.name());
        match cmd {
            MailboxCommand::ToggleSelection(id) => self.toggle_selection(&id),
            MailboxCommand::SelectAllVisible => self.select_all_visible(),
            MailboxCommand::ClearSelection => self.clear_selection(),
            MailboxCommand::ToggleSelectAll => self.toggle_select_all(),
            MailboxCommand::MarkRead(ids) => {
                self.mark_read(&ids);
            }
            MailboxCommand::MarkUnread(ids) => {
                self.mark_unread(&ids);
            }
            MailboxCommand::ToggleStar(id) => {
                return match self.toggle_star(&id) {
                    Some(true) => vec![Notice::success("Added to starred")],
                    Some(false) => vec![Notice::success("Removed from starred")],
                    None => Vec::new(),
                };
            }
            MailboxCommand::ToggleImportant(id) => {
                return match self.toggle_important(&id) {
                    Some(true) => vec![Notice::success("Marked as important")],
                    Some(false) => vec![Notice::success("Removed from important")],
                    None => Vec::new(),
                };
            }
            // Notices count the ids the user acted on, stale ones included.
            MailboxCommand::Delete(ids) => {
                self.delete(&ids);
                if !ids.is_empty() {
                    let n = ids.len();
                    return vec![Notice::success(format!("{n} email(s) moved to trash"))];
                }
            }
            MailboxCommand::Archive(ids) => {
                self.archive(&ids);
                if !ids.is_empty() {
                    let n = ids.len();
                    return vec![Notice::success(format!("{n} email(s) archived"))];
                }
            }
            MailboxCommand::OpenEmail(email) => self.open_email(email),
            MailboxCommand::SetSearchQuery(query) => {
                let notice = (!query.is_empty())
                    .then(|| Notice::success(format!("Searching for: {query}")));
                self.set_search_query(query);
                return notice.into_iter().collect();
            }
            MailboxCommand::SetActiveFolder(folder) => {
                let text = format!("Switched to {folder}");
                self.set_active_folder(folder);
                return vec![Notice::success(text)];
            }
            MailboxCommand::CreateEmail(email) => self.create_email(email),
            MailboxCommand::Refresh => {
                self.refresh();
                return vec![Notice::success("Emails refreshed")];
            }
        }
        Vec::new()
    }
}
