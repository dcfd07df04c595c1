//! Adaptive card payloads for Teams webhooks.

use serde_json::{json, Value};

use crate::domain::RunStatus;

const RUN_CARD_SCHEMA: &str = "https://adaptivecards.io/schemas/adaptive-card.json";
const RELEASE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Inputs of a pipeline run card
#[derive(Debug, Clone, PartialEq)]
pub struct RunNotification {
    pub status: RunStatus,
    pub git_ref: String,
    pub run_url: Option<String>,
    pub environment: String,
    pub skus: Vec<String>,
}

/// Inputs of a release announcement card
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotification {
    pub version: String,
    pub release_url: Option<String>,
    pub environment: String,
    pub skus: Vec<String>,
}

/// One of the two card shapes the notifier sends
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Run(RunNotification),
    Release(ReleaseNotification),
}

impl Notification {
    /// Card content (the `content` of the attachment)
    pub fn card(&self) -> Value {
        match self {
            Notification::Run(run) => run_card(run),
            Notification::Release(release) => release_card(release),
        }
    }

    /// Full webhook message wrapping the card
    pub fn payload(&self) -> Value {
        wrap_card(self.card())
    }
}

/// Split a comma-separated SKU list, trimming blanks.
pub fn parse_skus(skus: &str) -> Vec<String> {
    skus.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn open_url_action(title: &str, url: Option<&str>) -> Vec<Value> {
    match url.filter(|u| !u.is_empty()) {
        Some(url) => vec![json!({
            "type": "Action.OpenUrl",
            "title": title,
            "url": url,
        })],
        None => Vec::new(),
    }
}

fn run_card(run: &RunNotification) -> Value {
    let style = run.status.style();

    json!({
        "$schema": RUN_CARD_SCHEMA,
        "type": "AdaptiveCard",
        "version": "1.5",
        "body": [
            {
                "type": "Container",
                "style": style.style,
                "bleed": true,
                "items": [
                    {
                        "type": "TextBlock",
                        "text": format!("Run for SKUs: {}", run.skus.join(", ")),
                        "weight": "Bolder",
                        "size": "Large",
                        "color": style.color,
                        "wrap": true,
                        "spacing": "Small",
                    },
                ],
            },
            {
                "type": "Badge",
                "text": run.status.as_str(),
                "size": "Large",
                "style": style.style,
            },
            {
                "type": "TextBlock",
                "text": format!("🔖 Version: {}", run.git_ref),
                "wrap": true,
            },
            {
                "type": "TextBlock",
                "text": format!("🛠️ Environment: {}", run.environment.to_uppercase()),
                "wrap": true,
            },
        ],
        "actions": open_url_action("🔍 View Workflow Run", run.run_url.as_deref()),
    })
}

fn release_card(release: &ReleaseNotification) -> Value {
    json!({
        "$schema": RELEASE_CARD_SCHEMA,
        "type": "AdaptiveCard",
        "version": "1.4",
        "body": [
            {
                "type": "TextBlock",
                "size": "Large",
                "weight": "Bolder",
                "text": "✅ Release Notification",
            },
            {
                "type": "FactSet",
                "facts": [
                    { "title": "📦 Release Version:", "value": release.version },
                    { "title": "🛍️ SKU(s):", "value": release.skus.join(", ") },
                    { "title": "🚀 Environment:", "value": release.environment },
                ],
            },
        ],
        "actions": open_url_action("📄 View Release", release.release_url.as_deref()),
    })
}

fn wrap_card(card: Value) -> Value {
    json!({
        "type": "message",
        "attachments": [
            {
                "contentType": ADAPTIVE_CARD_CONTENT_TYPE,
                "content": card,
            }
        ],
    })
}
