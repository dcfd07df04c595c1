use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

use crate::domain::RepoSlug;
use crate::error::{RcPublishError, Result};
use crate::github::{CreatedRelease, ReleaseApi, ReleaseRequest};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Blocking client for the GitHub REST API
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `api_url` (e.g. `https://api.github.com`)
    /// authenticating with `token`.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("rc-publish/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubClient {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn releases_url(&self, repo: &RepoSlug) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.name)
    }
}

impl ReleaseApi for GitHubClient {
    fn create_release(&self, repo: &RepoSlug, request: &ReleaseRequest) -> Result<CreatedRelease> {
        let url = self.releases_url(repo);
        debug!(%url, tag = %request.tag_name, "creating GitHub release");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(RcPublishError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx with an unexpected body still means the release exists.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_url() {
        let client = GitHubClient::new("https://ghe.example.com/api/v3/", "t").unwrap();
        let repo = RepoSlug::parse("acme/widgets").unwrap();
        assert_eq!(
            client.releases_url(&repo),
            "https://ghe.example.com/api/v3/repos/acme/widgets/releases"
        );
    }

    #[test]
    fn test_request_serializes_expected_fields() {
        let request = ReleaseRequest {
            tag_name: "2508.4".to_string(),
            name: "2508.4".to_string(),
            body: "Release Candidate 2508.4 based on branch release/2508.".to_string(),
            draft: false,
            prerelease: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tag_name"], "2508.4");
        assert_eq!(value["draft"], false);
        assert_eq!(value["prerelease"], true);
        assert_eq!(value.as_object().unwrap().len(), 5);
    }
}
