//! Workflows behind the two binaries, callable without clap.

pub mod notify;
pub mod publish;

pub use notify::{build_notification, run_notify_workflow, NotifyWorkflowArgs};
pub use publish::{run_publish_workflow, PublishWorkflowArgs, WorkflowResult};
