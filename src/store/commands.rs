use crate::models::{Email, EmailId, ViewFolder};

/// Every mutation the mailbox accepts. Collaborators send these through
/// [`MailboxStore::dispatch`](super::MailboxStore::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum MailboxCommand {
    ToggleSelection(EmailId),
    SelectAllVisible,
    ClearSelection,
    /// Header checkbox: select everything, or clear if all is selected.
    ToggleSelectAll,
    MarkRead(Vec<EmailId>),
    MarkUnread(Vec<EmailId>),
    ToggleStar(EmailId),
    ToggleImportant(EmailId),
    Delete(Vec<EmailId>),
    Archive(Vec<EmailId>),
    OpenEmail(Option<Email>),
    SetSearchQuery(String),
    SetActiveFolder(ViewFolder),
    CreateEmail(Email),
    Refresh,
}

impl MailboxCommand {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleSelection(_) => "toggle_selection",
            Self::SelectAllVisible => "select_all_visible",
            Self::ClearSelection => "clear_selection",
            Self::ToggleSelectAll => "toggle_select_all",
            Self::MarkRead(_) => "mark_read",
            Self::MarkUnread(_) => "mark_unread",
            Self::ToggleStar(_) => "toggle_star",
            Self::ToggleImportant(_) => "toggle_important",
            Self::Delete(_) => "delete",
            Self::Archive(_) => "archive",
            Self::OpenEmail(_) => "open_email",
            Self::SetSearchQuery(_) => "set_search_query",
            Self::SetActiveFolder(_) => "set_active_folder",
            Self::CreateEmail(_) => "create_email",
            Self::Refresh => "refresh",
        }
    }
}
