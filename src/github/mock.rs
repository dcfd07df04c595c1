use std::sync::Mutex;

use crate::domain::RepoSlug;
use crate::error::{RcPublishError, Result};
use crate::github::{CreatedRelease, ReleaseApi, ReleaseRequest};

/// Release API double that records requests instead of sending them
#[derive(Default)]
pub struct MockReleaseApi {
    requests: Mutex<Vec<(RepoSlug, ReleaseRequest)>>,
    failure: Option<(u16, String)>,
}

impl MockReleaseApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request with `status` and `body`
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        MockReleaseApi {
            requests: Mutex::new(Vec::new()),
            failure: Some((status, body.into())),
        }
    }

    /// Requests received, in call order
    pub fn requests(&self) -> Vec<(RepoSlug, ReleaseRequest)> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ReleaseApi for MockReleaseApi {
    fn create_release(&self, repo: &RepoSlug, request: &ReleaseRequest) -> Result<CreatedRelease> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((repo.clone(), request.clone()));

        if let Some((status, body)) = &self.failure {
            return Err(RcPublishError::Api {
                status: *status,
                body: body.clone(),
            });
        }

        let id = self.requests().len() as u64;
        Ok(CreatedRelease {
            id,
            html_url: Some(format!(
                "https://github.com/{}/releases/tag/{}",
                repo, request.tag_name
            )),
        })
    }
}
