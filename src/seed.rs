use chrono::{DateTime, Duration, Utc};

use crate::models::{Email, Folder};

/// The four inbox messages a fresh demo session starts with, timed
/// relative to `now`.
pub fn demo_mailbox(now: DateTime<Utc>) -> Vec<Email> {
    let inbox = |id: &str, from: &str, subject: &str, body: &str, hours_ago: i64| Email {
        id: id.to_string(),
        from: from.to_string(),
        to: "me@gmail.com".to_string(),
        subject: subject.to_string(),
        body: body.to_string(),
        timestamp: now - Duration::hours(hours_ago),
        is_read: false,
        is_starred: false,
        is_important: false,
        labels: Vec::new(),
        has_attachments: false,
        folder: Folder::Inbox,
    };

    vec![
        Email {
            is_starred: true,
            is_important: true,
            labels: vec!["Work".into()],
            ..inbox(
                "1",
                "john.doe@company.com",
                "Important Project Update",
                "Hi there,\n\nI wanted to update you on the latest project developments. \
                 We have made significant progress on the frontend implementation and are \
                 ahead of schedule.\n\nPlease let me know if you have any questions.\n\n\
                 Best regards,\nJohn",
                2,
            )
        },
        Email {
            is_read: true,
            labels: vec!["GitHub".into()],
            ..inbox(
                "2",
                "notifications@github.com",
                "New pull request in your repository",
                "A new pull request has been opened in your repository. Please review the \
                 changes and provide feedback.",
                5,
            )
        },
        Email {
            labels: vec!["Work".into(), "Meetings".into()],
            has_attachments: true,
            ..inbox(
                "3",
                "team@company.com",
                "Weekly Team Meeting Notes",
                "Hello team,\n\nPlease find attached the notes from our weekly team meeting. \
                 We discussed the upcoming deadlines and assigned new tasks.\n\nThanks,\nTeam Lead",
                24,
            )
        },
        Email {
            labels: vec!["Subscriptions".into()],
            ..inbox(
                "4",
                "support@service.com",
                "Your subscription expires soon",
                "Your premium subscription will expire in 7 days. Renew now to continue \
                 enjoying premium features.",
                3,
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewFolder;
    use crate::view::visible_emails;
    use chrono::TimeZone;

    #[test]
    fn demo_inbox_order() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let emails = demo_mailbox(now);
        let ids: Vec<&str> = visible_emails(&emails, &ViewFolder::Inbox, "")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "4", "2", "3"]);
    }

    #[test]
    fn demo_flags() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let emails = demo_mailbox(now);
        assert!(emails.iter().all(|e| e.folder == Folder::Inbox));
        assert_eq!(emails.iter().filter(|e| !e.is_read).count(), 3);
        assert!(emails[0].is_starred && emails[0].is_important);
        assert!(emails[2].has_attachments);
        assert_eq!(emails[2].labels, ["Work", "Meetings"]);
        assert!(emails[1].body.contains("provide feedback"));
    }
}
