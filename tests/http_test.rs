//! HTTP clients against a local mock server.
//!
//! The clients are blocking, so each call runs on a blocking thread while the
//! mock server lives on the test runtime.

use std::time::Duration;

use rc_publish::domain::{RepoSlug, RunStatus};
use rc_publish::github::{GitHubClient, ReleaseApi, ReleaseRequest};
use rc_publish::notify::{Notification, RunNotification, WebhookClient};
use rc_publish::RcPublishError;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(tag: &str) -> ReleaseRequest {
    ReleaseRequest {
        tag_name: tag.to_string(),
        name: tag.to_string(),
        body: format!("Release Candidate {} based on branch release/2508.", tag),
        draft: false,
        prerelease: true,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_release_posts_expected_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/releases"))
        .and(header("authorization", "token secret"))
        .and(header("accept", "application/vnd.github+json"))
        .and(body_json(json!({
            "tag_name": "2508.4",
            "name": "2508.4",
            "body": "Release Candidate 2508.4 based on branch release/2508.",
            "draft": false,
            "prerelease": true,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "html_url": "https://github.com/acme/widgets/releases/tag/2508.4",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let created = tokio::task::spawn_blocking(move || {
        let client = GitHubClient::new(uri, "secret").unwrap();
        let repo = RepoSlug::parse("acme/widgets").unwrap();
        client.create_release(&repo, &request("2508.4"))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(created.id, 42);
    assert_eq!(
        created.html_url.as_deref(),
        Some("https://github.com/acme/widgets/releases/tag/2508.4")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_release_non_2xx_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/releases"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"message":"Validation Failed"}"#),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = GitHubClient::new(uri, "secret").unwrap();
        let repo = RepoSlug::parse("acme/widgets").unwrap();
        client.create_release(&repo, &request("2508.4"))
    })
    .await
    .unwrap();

    match result {
        Err(RcPublishError::Api { status, body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("Validation Failed"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

fn failed_run() -> Notification {
    Notification::Run(RunNotification {
        status: RunStatus::Failed,
        git_ref: "2508.4".to_string(),
        run_url: None,
        environment: "prod".to_string(),
        skus: vec!["pro".to_string()],
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_webhook_posts_card() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "type": "message",
            "attachments": [{ "contentType": "application/vnd.microsoft.card.adaptive" }],
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/hook", server.uri());
    let payload = failed_run().payload();
    tokio::task::spawn_blocking(move || {
        WebhookClient::new(url, Duration::from_secs(10))
            .unwrap()
            .post(&payload)
    })
    .await
    .unwrap()
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_webhook_error_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad card"))
        .mount(&server)
        .await;

    let url = format!("{}/hook", server.uri());
    let payload = failed_run().payload();
    let err = tokio::task::spawn_blocking(move || {
        WebhookClient::new(url, Duration::from_secs(10))
            .unwrap()
            .post(&payload)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, RcPublishError::Webhook(_)));
    assert!(err.to_string().contains("bad card"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_webhook_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let url = format!("{}/hook", server.uri());
    let payload = failed_run().payload();
    let err = tokio::task::spawn_blocking(move || {
        WebhookClient::new(url, Duration::from_millis(200))
            .unwrap()
            .post(&payload)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, RcPublishError::Http(_)));
}

#[test]
fn test_webhook_rejects_empty_url() {
    assert!(WebhookClient::new("  ", Duration::from_secs(1)).is_err());
}
