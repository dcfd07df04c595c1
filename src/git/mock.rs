use std::sync::Mutex;

use regex::Regex;

use crate::error::{RcPublishError, Result};
use crate::git::TagStore;

/// In-memory tag store for testing without a repository
#[derive(Default)]
pub struct MockRepository {
    remote_tags: Vec<String>,
    state: Mutex<MockState>,
    fail_fetch: bool,
    fail_push: bool,
}

#[derive(Default)]
struct MockState {
    local_tags: Vec<String>,
    fetched: Vec<String>,
    pushed: Vec<(String, String)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags that only become visible after [TagStore::fetch_tags]
    pub fn with_remote_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remote_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Add a tag that already exists locally
    pub fn add_local_tag(&self, name: impl Into<String>) {
        self.lock().local_tags.push(name.into());
    }

    pub fn fail_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn fail_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Remotes fetched from, in call order
    pub fn fetched(&self) -> Vec<String> {
        self.lock().fetched.clone()
    }

    /// `(remote, tag)` pairs pushed, in call order
    pub fn pushed(&self) -> Vec<(String, String)> {
        self.lock().pushed.clone()
    }

    /// All local tags, including ones created through the store
    pub fn local_tags(&self) -> Vec<String> {
        self.lock().local_tags.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Translate a git tag glob (`*` and `?` only) into an anchored regex
fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let escaped = regex::escape(pattern)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");
    Regex::new(&format!("^{}$", escaped))
        .map_err(|e| RcPublishError::tag(format!("Invalid tag pattern '{}': {}", pattern, e)))
}

impl TagStore for MockRepository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        if self.fail_fetch {
            return Err(RcPublishError::remote(format!(
                "Failed to fetch tags from '{}': mock failure",
                remote
            )));
        }

        let mut state = self.lock();
        state.fetched.push(remote.to_string());
        for tag in &self.remote_tags {
            if !state.local_tags.contains(tag) {
                state.local_tags.push(tag.clone());
            }
        }
        Ok(())
    }

    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let state = self.lock();
        match pattern {
            Some(pattern) => {
                let re = glob_to_regex(pattern)?;
                Ok(state
                    .local_tags
                    .iter()
                    .filter(|tag| re.is_match(tag))
                    .cloned()
                    .collect())
            }
            None => Ok(state.local_tags.clone()),
        }
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let mut state = self.lock();
        if state.local_tags.iter().any(|t| t == name) {
            return Err(RcPublishError::tag(format!("Tag '{}' already exists", name)));
        }
        state.local_tags.push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(RcPublishError::remote(format!(
                "Failed to push tag '{}': mock failure",
                name
            )));
        }
        self.lock().pushed.push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
