//! GitHub Releases API
//!
//! [ReleaseApi] is the seam between the publish workflow and the hosting
//! service. [GitHubClient] talks to the real REST API; [MockReleaseApi]
//! records requests for tests.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockReleaseApi;

use serde::{Deserialize, Serialize};

use crate::domain::RepoSlug;
use crate::error::Result;

/// Body of `POST /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

/// Fields of the created release that the workflow reports
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CreatedRelease {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Registers release objects with a hosting service.
pub trait ReleaseApi {
    /// Create a release for an already-pushed tag.
    ///
    /// A non-2xx response is returned as [crate::error::RcPublishError::Api]
    /// carrying the status code and response body.
    fn create_release(&self, repo: &RepoSlug, request: &ReleaseRequest) -> Result<CreatedRelease>;
}
