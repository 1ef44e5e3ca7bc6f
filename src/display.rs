//! Strings and counters the list, reading pane and sidebar render.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone};
use serde::Serialize;

use crate::models::{Email, Folder, ViewFolder};

/// Date column of the message list: clock time for anything within the last
/// day, month and day otherwise.
pub fn list_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let age = now.clone().signed_duration_since(ts.clone());
    if age < Duration::hours(24) {
        ts.format("%-I:%M %p").to_string()
    } else {
        ts.format("%b %-d").to_string()
    }
}

/// Header line of the reading pane.
pub fn full_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    ts.format("%A, %B %-d, %Y at %-I:%M %p").to_string()
}

/// Badge numbers next to each sidebar entry.
///
/// Storage folders count unread records; starred and important count every
/// flagged record. Sent never shows a badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FolderCounts {
    pub inbox: usize,
    pub starred: usize,
    pub sent: usize,
    pub drafts: usize,
    pub important: usize,
    pub spam: usize,
    pub trash: usize,
}

impl FolderCounts {
    pub fn from_emails(emails: &[Email]) -> Self {
        let mut counts = Self::default();
        for e in emails {
            if e.is_starred {
                counts.starred += 1;
            }
            if e.is_important {
                counts.important += 1;
            }
            if e.is_read {
                continue;
            }
            match e.folder {
                Folder::Inbox => counts.inbox += 1,
                Folder::Drafts => counts.drafts += 1,
                Folder::Spam => counts.spam += 1,
                Folder::Trash => counts.trash += 1,
                Folder::Sent => {}
            }
        }
        counts
    }

    pub fn get(&self, folder: &ViewFolder) -> usize {
        match folder {
            ViewFolder::Inbox => self.inbox,
            ViewFolder::Starred => self.starred,
            ViewFolder::Sent => self.sent,
            ViewFolder::Drafts => self.drafts,
            ViewFolder::Important => self.important,
            ViewFolder::Spam => self.spam,
            ViewFolder::Trash => self.trash,
            ViewFolder::Other(_) => 0,
        }
    }
}
