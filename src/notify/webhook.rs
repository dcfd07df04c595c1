use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{RcPublishError, Result};

/// Posts JSON payloads to a chat webhook with a fixed timeout
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(RcPublishError::config("Webhook URL must not be empty"));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(WebhookClient { client, url })
    }

    /// POST `payload`; any non-success status is an error.
    pub fn post(&self, payload: &Value) -> Result<()> {
        debug!(url = %self.url, "posting webhook payload");

        let response = self.client.post(&self.url).json(payload).send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(RcPublishError::webhook(format!(
            "{} responded {}: {}",
            self.url, status, body
        )))
    }
}
