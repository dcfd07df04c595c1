//! Teams webhook notifications
//!
//! [card] builds the run and release adaptive cards; [webhook] delivers them.

pub mod card;
pub mod webhook;

pub use card::{parse_skus, Notification, ReleaseNotification, RunNotification};
pub use webhook::WebhookClient;
