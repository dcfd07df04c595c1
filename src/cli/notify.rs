//! Webhook notification workflow

use std::time::Duration;

use crate::config::NotifyConfig;
use crate::domain::RunStatus;
use crate::error::Result;
use crate::notify::{parse_skus, Notification, ReleaseNotification, RunNotification, WebhookClient};
use crate::ui;

/// Arguments for the notify workflow, decoupled from clap
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotifyWorkflowArgs {
    pub webhook_url: String,
    pub status: RunStatus,
    pub git_ref: Option<String>,
    pub run_url: Option<String>,
    pub environment: Option<String>,
    pub skus: Option<String>,
    /// Presence selects the release card over the run card
    pub release_version: Option<String>,
    pub release_url: Option<String>,
    pub dry_run: bool,
}

/// Pick the card shape and fill omitted fields from `defaults`.
pub fn build_notification(args: &NotifyWorkflowArgs, defaults: &NotifyConfig) -> Notification {
    let environment = args
        .environment
        .clone()
        .unwrap_or_else(|| defaults.environment.clone());
    let skus = parse_skus(args.skus.as_deref().unwrap_or(&defaults.skus));

    match args.release_version.as_deref().filter(|v| !v.is_empty()) {
        Some(version) => Notification::Release(ReleaseNotification {
            version: version.to_string(),
            release_url: args.release_url.clone(),
            environment,
            skus,
        }),
        None => Notification::Run(RunNotification {
            status: args.status,
            git_ref: args
                .git_ref
                .clone()
                .unwrap_or_else(|| defaults.ref_name.clone()),
            run_url: args.run_url.clone(),
            environment,
            skus,
        }),
    }
}

/// Build the payload, print it, and post it unless this is a dry run.
pub fn run_notify_workflow(args: &NotifyWorkflowArgs, defaults: &NotifyConfig) -> Result<Notification> {
    let notification = build_notification(args, defaults);
    let payload = notification.payload();

    ui::display_json("Sending payload to Teams:", &serde_json::to_string_pretty(&payload)?);

    if args.dry_run {
        ui::display_status("Dry run: payload not sent");
        return Ok(notification);
    }

    let client = WebhookClient::new(
        args.webhook_url.clone(),
        Duration::from_secs(defaults.timeout_secs),
    )?;
    client.post(&payload)?;
    ui::display_success("Teams notification sent.");

    Ok(notification)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> NotifyWorkflowArgs {
        NotifyWorkflowArgs {
            webhook_url: "https://example.invalid/hook".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_card_without_release_version() {
        let notification = build_notification(&args(), &NotifyConfig::default());
        match notification {
            Notification::Run(run) => {
                assert_eq!(run.status, RunStatus::Success);
                assert_eq!(run.git_ref, "main");
                assert_eq!(run.environment, "production");
                assert!(run.skus.is_empty());
            }
            other => panic!("expected run card, got {:?}", other),
        }
    }

    #[test]
    fn test_release_card_with_release_version() {
        let mut args = args();
        args.release_version = Some("2508.4".to_string());
        args.skus = Some("pro,lite".to_string());

        match build_notification(&args, &NotifyConfig::default()) {
            Notification::Release(release) => {
                assert_eq!(release.version, "2508.4");
                assert_eq!(release.skus, vec!["pro", "lite"]);
            }
            other => panic!("expected release card, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_release_version_means_run_card() {
        let mut args = args();
        args.release_version = Some(String::new());
        assert!(matches!(
            build_notification(&args, &NotifyConfig::default()),
            Notification::Run(_)
        ));
    }

    #[test]
    fn test_dry_run_does_not_post() {
        let mut args = args();
        args.dry_run = true;
        args.status = RunStatus::Failed;
        let notification = run_notify_workflow(&args, &NotifyConfig::default()).unwrap();
        assert!(matches!(notification, Notification::Run(run) if run.status == RunStatus::Failed));
    }
}
