pub mod clock;
pub mod compose;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

// Re-export the types most consumers touch
pub use clock::{Clock, FixedClock, SystemClock};
pub use compose::{ComposeForm, ComposeInput, ComposeTransition, OutgoingEmail};
pub use config::Config;
pub use error::{ConfigError, ValidationError};
pub use models::{Email, EmailId, Folder, ViewFolder};
pub use session::{Theme, UiSession};
pub use store::{MailboxCommand, MailboxSnapshot, MailboxStore, Notice, NoticeLevel};
