mod commands;
mod mailbox;
mod notice;

pub use commands::MailboxCommand;
pub use mailbox::{MailboxSnapshot, MailboxStore};
pub use notice::{Notice, NoticeLevel};
