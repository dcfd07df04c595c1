use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{RcPublishError, Result};

/// `<owner>/<repo>` identifier of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").expect("slug regex is valid")
    })
}

impl RepoSlug {
    /// Parse `owner/repo` as found in `GITHUB_REPOSITORY`
    pub fn parse(value: &str) -> Result<Self> {
        let caps = slug_regex().captures(value.trim()).ok_or_else(|| {
            RcPublishError::environment(format!(
                "Repository '{}' is not of the form <owner>/<repo>",
                value
            ))
        })?;

        Ok(RepoSlug {
            owner: caps[1].to_string(),
            name: caps[2].to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
