use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RcPublishError, Result};

const LOCAL_CONFIG: &str = "./rcpublish.toml";
const USER_CONFIG: &str = ".rcpublish.toml";

/// Represents the complete configuration for rc-publish and rc-notify.
///
/// Every section is optional; a missing file yields the defaults the CI
/// pipeline expects.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub notify: NotifyConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch_prefix() -> String {
    "release/".to_string()
}

fn default_name_template() -> String {
    "{tag}".to_string()
}

fn default_body_template() -> String {
    "Release Candidate {tag} based on branch {branch}.".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for tagging and registering a release candidate.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch prefix (after `refs/heads/`) that marks a release branch
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,

    /// Release display name; `{tag}` and `{branch}` are substituted
    #[serde(default = "default_name_template")]
    pub name_template: String,

    /// Release description; `{tag}` and `{branch}` are substituted
    #[serde(default = "default_body_template")]
    pub body_template: String,

    #[serde(default)]
    pub draft: bool,

    #[serde(default = "default_true")]
    pub prerelease: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            remote: default_remote(),
            branch_prefix: default_branch_prefix(),
            name_template: default_name_template(),
            body_template: default_body_template(),
            draft: false,
            prerelease: true,
        }
    }
}

impl ReleaseConfig {
    /// Renders the release display name for a tag.
    pub fn render_name(&self, tag: &str, branch: &str) -> String {
        render_template(&self.name_template, tag, branch)
    }

    /// Renders the release description for a tag.
    pub fn render_body(&self, tag: &str, branch: &str) -> String {
        render_template(&self.body_template, tag, branch)
    }
}

fn render_template(template: &str, tag: &str, branch: &str) -> String {
    template.replace("{tag}", tag).replace("{branch}", branch)
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_web_url() -> String {
    "https://github.com".to_string()
}

/// GitHub endpoints. Override both for GitHub Enterprise Server.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_web_url")]
    pub web_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: default_api_url(),
            web_url: default_web_url(),
        }
    }
}

impl GithubConfig {
    /// Public page of a release tag, written to the CI outputs.
    pub fn release_page_url(&self, repo: &str, tag: &str) -> String {
        format!(
            "{}/{}/releases/tag/{}",
            self.web_url.trim_end_matches('/'),
            repo,
            tag
        )
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_ref_name() -> String {
    "main".to_string()
}

fn default_environment() -> String {
    "production".to_string()
}

/// Defaults for the webhook notifier, used when a flag is omitted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NotifyConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_ref_name")]
    pub ref_name: String,

    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default)]
    pub skus: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            timeout_secs: default_timeout_secs(),
            ref_name: default_ref_name(),
            environment: default_environment(),
            skus: String::new(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `rcpublish.toml` in current directory
/// 3. `.rcpublish.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG).exists() {
        fs::read_to_string(LOCAL_CONFIG)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses a TOML document into a [`Config`], filling omitted fields with defaults.
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)
        .map_err(|e| RcPublishError::config(format!("Invalid configuration: {}", e)))?;

    if config.release.branch_prefix.is_empty() {
        return Err(RcPublishError::config("release.branch_prefix must not be empty"));
    }
    if config.notify.timeout_secs == 0 {
        return Err(RcPublishError::config("notify.timeout_secs must be positive"));
    }

    Ok(config)
}
