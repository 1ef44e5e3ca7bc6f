use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type EmailId = String;

/// Storage folder of a record. Starred and important are flags on
/// [`Email`], never folder values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    Inbox,
    Sent,
    Drafts,
    Spam,
    Trash,
}

impl Folder {
    pub const ALL: &[Folder] = &[
        Self::Inbox,
        Self::Sent,
        Self::Drafts,
        Self::Spam,
        Self::Trash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Spam => "spam",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One email in the mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: EmailId,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub is_starred: bool,
    pub is_important: bool,
    pub labels: Vec<String>,
    pub has_attachments: bool,
    pub folder: Folder,
}

impl Email {
    /// Case-insensitive substring match over subject, sender and body.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.subject.to_lowercase().contains(needle)
            || self.from.to_lowercase().contains(needle)
            || self.body.to_lowercase().contains(needle)
    }
}

/// The folder tag the sidebar has active.
///
/// Tags other than the known ones are kept verbatim and render the
/// default inbox view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ViewFolder {
    #[default]
    Inbox,
    Starred,
    Important,
    Sent,
    Drafts,
    Spam,
    Trash,
    Other(String),
}

impl ViewFolder {
    /// Sidebar entries in display order.
    pub const SIDEBAR: &[ViewFolder] = &[
        Self::Inbox,
        Self::Starred,
        Self::Sent,
        Self::Drafts,
        Self::Important,
        Self::Spam,
        Self::Trash,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Inbox => "inbox",
            Self::Starred => "starred",
            Self::Important => "important",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Spam => "spam",
            Self::Trash => "trash",
            Self::Other(tag) => tag,
        }
    }

    /// Whether a record belongs in the list for this folder.
    pub fn shows(&self, email: &Email) -> bool {
        match self {
            Self::Starred => email.is_starred,
            Self::Important => email.is_important,
            Self::Sent => email.folder == Folder::Sent,
            Self::Drafts => email.folder == Folder::Drafts,
            Self::Trash => email.folder == Folder::Trash,
            Self::Inbox | Self::Spam | Self::Other(_) => {
                matches!(email.folder, Folder::Inbox | Folder::Sent)
            }
        }
    }

    /// Whether "select all" picks this record: flags for starred and
    /// important, exact folder match for everything else.
    pub fn owns(&self, email: &Email) -> bool {
        match self {
            Self::Starred => email.is_starred,
            Self::Important => email.is_important,
            other => other.as_str() == email.folder.as_str(),
        }
    }
}

impl From<&str> for ViewFolder {
    fn from(tag: &str) -> Self {
        match tag {
            "inbox" => Self::Inbox,
            "starred" => Self::Starred,
            "important" => Self::Important,
            "sent" => Self::Sent,
            "drafts" => Self::Drafts,
            "spam" => Self::Spam,
            "trash" => Self::Trash,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ViewFolder {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ViewFolder> for String {
    fn from(folder: ViewFolder) -> Self {
        folder.as_str().to_string()
    }
}

impl From<Folder> for ViewFolder {
    fn from(folder: Folder) -> Self {
        Self::from(folder.as_str())
    }
}

impl FromStr for ViewFolder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ViewFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
