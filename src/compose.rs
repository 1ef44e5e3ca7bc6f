//! UI-agnostic compose overlay.
//!
//! Frontends render [`ComposeForm`] and map their input events to
//! [`ComposeInput`]. Validation and record creation live here; the caller
//! decides what to do with the overlay from the returned
//! [`ComposeTransition`].

use crate::clock::Clock;
use crate::config::Config;
use crate::error::ValidationError;
use crate::models::{Email, EmailId, Folder};
use crate::store::{MailboxStore, Notice};

// ---------------------------------------------------------------------------
// Send / save-draft contracts
// ---------------------------------------------------------------------------

/// The three text fields of a message being written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    fn any_empty(&self) -> bool {
        self.to.is_empty() || self.subject.is_empty() || self.body.is_empty()
    }

    fn all_empty(&self) -> bool {
        self.to.is_empty() && self.subject.is_empty() && self.body.is_empty()
    }
}

/// Record a sent message. Every field must be non-empty; on rejection the
/// store is not touched.
pub fn send(
    store: &mut MailboxStore,
    clock: &mut dyn Clock,
    config: &Config,
    email: &OutgoingEmail,
) -> Result<EmailId, ValidationError> {
    if email.any_empty() {
        return Err(ValidationError::MissingFields);
    }
    let id = clock.next_id();
    store.create_email(Email {
        id: id.clone(),
        from: config.sender_address.clone(),
        to: email.to.clone(),
        subject: email.subject.clone(),
        body: email.body.clone(),
        timestamp: clock.now(),
        is_read: true,
        is_starred: false,
        is_important: false,
        labels: Vec::new(),
        has_attachments: false,
        folder: Folder::Sent,
    });
    log::info!("Sent email {} to {}", id, email.to);
    Ok(id)
}

/// Record a draft. Needs at least one non-empty field; an empty subject is
/// replaced by the configured placeholder.
pub fn save_draft(
    store: &mut MailboxStore,
    clock: &mut dyn Clock,
    config: &Config,
    email: &OutgoingEmail,
) -> Result<EmailId, ValidationError> {
    if email.all_empty() {
        return Err(ValidationError::NothingToSave);
    }
    let subject = if email.subject.is_empty() {
        config.draft_placeholder_subject.clone()
    } else {
        email.subject.clone()
    };
    let id = clock.next_id();
    store.create_email(Email {
        id: id.clone(),
        from: config.sender_address.clone(),
        to: email.to.clone(),
        subject,
        body: email.body.clone(),
        timestamp: clock.now(),
        is_read: true,
        is_starred: false,
        is_important: false,
        labels: vec!["Draft".to_string()],
        has_attachments: false,
        folder: Folder::Drafts,
    });
    log::info!("Saved draft {}", id);
    Ok(id)
}

// ---------------------------------------------------------------------------
// Form model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposeField {
    To,
    Subject,
    Body,
}

/// Input events the UI maps its native events to.
#[derive(Debug, Clone)]
pub enum ComposeInput {
    SetField(ComposeField, String),
    ToggleMinimize,
    Send,
    SaveDraft,
    /// Close the overlay and drop what was typed.
    Discard,
}

/// What the UI should do after processing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeTransition {
    /// Keep showing the form.
    Continue,
    /// Message recorded in Sent; close the overlay.
    Sent(EmailId),
    /// Draft recorded; the form keeps its contents.
    DraftSaved(EmailId),
    /// Form cleared; close the overlay.
    Discarded,
    /// Nothing was recorded.
    Rejected(ValidationError),
}

impl ComposeTransition {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Sent(_) => Some(Notice::success("Email sent successfully!")),
            Self::DraftSaved(_) => Some(Notice::success("Draft saved")),
            Self::Rejected(e) => Some(Notice::error(e.to_string())),
            Self::Continue | Self::Discarded => None,
        }
    }

    /// Whether the overlay should close.
    pub fn closes(&self) -> bool {
        matches!(self, Self::Sent(_) | Self::Discarded)
    }
}

/// Everything a submit needs from outside the form.
pub struct ComposeContext<'a> {
    pub store: &'a mut MailboxStore,
    pub clock: &'a mut dyn Clock,
    pub config: &'a Config,
}

/// Compose overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeForm {
    pub email: OutgoingEmail,
    pub minimized: bool,
}

impl ComposeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_value(&self, field: ComposeField) -> &str {
        match field {
            ComposeField::To => &self.email.to,
            ComposeField::Subject => &self.email.subject,
            ComposeField::Body => &self.email.body,
        }
    }

    /// Process an input event. Returns what the UI should do next.
    pub fn update(&mut self, input: ComposeInput, ctx: &mut ComposeContext<'_>) -> ComposeTransition {
        match input {
            ComposeInput::SetField(field, value) => {
                match field {
                    ComposeField::To => self.email.to = value,
                    ComposeField::Subject => self.email.subject = value,
                    ComposeField::Body => self.email.body = value,
                }
                ComposeTransition::Continue
            }
            ComposeInput::ToggleMinimize => {
                self.minimized = !self.minimized;
                ComposeTransition::Continue
            }
            ComposeInput::Send => match send(ctx.store, ctx.clock, ctx.config, &self.email) {
                Ok(id) => {
                    *self = Self::default();
                    ComposeTransition::Sent(id)
                }
                Err(e) => ComposeTransition::Rejected(e),
            },
            ComposeInput::SaveDraft => {
                match save_draft(ctx.store, ctx.clock, ctx.config, &self.email) {
                    Ok(id) => ComposeTransition::DraftSaved(id),
                    Err(e) => ComposeTransition::Rejected(e),
                }
            }
            ComposeInput::Discard => {
                *self = Self::default();
                ComposeTransition::Discarded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap())
    }

    // ── send ─────────────────────────────────────────────────────

    #[test]
    fn send_rejects_any_empty_field() {
        let mut store = MailboxStore::new();
        let mut clock = clock();
        let config = Config::default();
        for email in [
            OutgoingEmail::new("", "x", "y"),
            OutgoingEmail::new("a@b.com", "", "y"),
            OutgoingEmail::new("a@b.com", "x", ""),
        ] {
            let err = send(&mut store, &mut clock, &config, &email).unwrap_err();
            assert_eq!(err, ValidationError::MissingFields);
        }
        assert!(store.emails().is_empty());
    }

    #[test]
    fn send_records_sent_message_at_front() {
        let mut store = MailboxStore::new();
        let mut clock = clock();
        let config = Config::default();
        save_draft(&mut store, &mut clock, &config, &OutgoingEmail::new("", "", "old")).unwrap();

        let id = send(
            &mut store,
            &mut clock,
            &config,
            &OutgoingEmail::new("a@b.com", "Hi", "Hello"),
        )
        .unwrap();

        assert_eq!(store.emails().len(), 2);
        let e = &store.emails()[0];
        assert_eq!(e.id, id);
        assert_eq!(e.folder, Folder::Sent);
        assert!(e.is_read);
        assert!(!e.is_starred);
        assert!(!e.is_important);
        assert!(e.labels.is_empty());
        assert_eq!(e.from, "me@gmail.com");
        assert_eq!(e.timestamp, clock.now());
    }

    // ── save draft ───────────────────────────────────────────────

    #[test]
    fn draft_needs_something() {
        let mut store = MailboxStore::new();
        let err = save_draft(&mut store, &mut clock(), &Config::default(), &OutgoingEmail::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::NothingToSave);
        assert!(store.emails().is_empty());
    }

    #[test]
    fn draft_gets_placeholder_subject_and_label() {
        let mut store = MailboxStore::new();
        save_draft(
            &mut store,
            &mut clock(),
            &Config::default(),
            &OutgoingEmail::new("a@b.com", "", ""),
        )
        .unwrap();
        let d = &store.emails()[0];
        assert_eq!(d.folder, Folder::Drafts);
        assert_eq!(d.subject, "(no subject)");
        assert_eq!(d.labels, ["Draft"]);
    }

    // ── form ─────────────────────────────────────────────────────

    #[test]
    fn form_send_resets_and_closes() {
        let mut store = MailboxStore::new();
        let mut clock = clock();
        let config = Config::default();
        let mut ctx = ComposeContext {
            store: &mut store,
            clock: &mut clock,
            config: &config,
        };
        let mut form = ComposeForm::new();
        form.update(ComposeInput::SetField(ComposeField::To, "a@b.com".into()), &mut ctx);
        form.update(ComposeInput::SetField(ComposeField::Subject, "Hi".into()), &mut ctx);

        let t = form.update(ComposeInput::Send, &mut ctx);
        assert_eq!(t, ComposeTransition::Rejected(ValidationError::MissingFields));
        assert_eq!(t.notice().unwrap().text, "Please fill in all required fields");
        assert_eq!(form.field_value(ComposeField::Subject), "Hi");

        form.update(ComposeInput::SetField(ComposeField::Body, "Hello".into()), &mut ctx);
        let t = form.update(ComposeInput::Send, &mut ctx);
        assert_eq!(t, ComposeTransition::Sent("1001".into()));
        assert!(t.closes());
        assert_eq!(form, ComposeForm::default());
        assert_eq!(store.emails().len(), 1);
    }

    #[test]
    fn form_draft_keeps_contents() {
        let mut store = MailboxStore::new();
        let mut clock = clock();
        let config = Config::default();
        let mut ctx = ComposeContext {
            store: &mut store,
            clock: &mut clock,
            config: &config,
        };
        let mut form = ComposeForm::new();
        form.update(ComposeInput::SetField(ComposeField::Body, "notes".into()), &mut ctx);
        form.update(ComposeInput::ToggleMinimize, &mut ctx);
        let t = form.update(ComposeInput::SaveDraft, &mut ctx);
        assert!(matches!(t, ComposeTransition::DraftSaved(_)));
        assert!(!t.closes());
        assert_eq!(form.field_value(ComposeField::Body), "notes");
        assert!(form.minimized);

        let t = form.update(ComposeInput::Discard, &mut ctx);
        assert_eq!(t, ComposeTransition::Discarded);
        assert!(t.notice().is_none());
        assert_eq!(form.field_value(ComposeField::Body), "");
    }
}
