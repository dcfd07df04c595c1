use std::fmt;

use crate::error::{RcPublishError, Result};

const HEADS_PREFIX: &str = "refs/heads/";

/// The token naming a release window, e.g. `2508` from `release/2508`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseIdentifier(String);

impl ReleaseIdentifier {
    /// Create an identifier; it must be non-empty and free of `.` and `/`
    /// so that `<id>.<n>` stays a two-segment tag.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(RcPublishError::config(
                "Branch name format invalid. Expecting release/<number>",
            ));
        }
        if value.contains('.') || value.contains('/') {
            return Err(RcPublishError::config(format!(
                "Release identifier '{}' must not contain '.' or '/'",
                value
            )));
        }
        Ok(ReleaseIdentifier(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Glob matching every tag that may belong to this identifier
    pub fn tag_glob(&self) -> String {
        format!("{}.*", self.0)
    }
}

impl fmt::Display for ReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A release branch resolved from the CI ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBranch {
    /// Branch name without `refs/heads/`, e.g. `release/2508`
    pub name: String,
    pub identifier: ReleaseIdentifier,
}

impl ReleaseBranch {
    /// Resolve a release branch from a full ref such as `refs/heads/release/2508`.
    ///
    /// `branch_prefix` is the part after `refs/heads/` that marks a release
    /// branch (normally `release/`). The identifier is the path segment that
    /// follows the prefix.
    pub fn from_ref(git_ref: &str, branch_prefix: &str) -> Result<Self> {
        let required = format!("{}{}", HEADS_PREFIX, branch_prefix);
        if !git_ref.starts_with(&required) {
            return Err(RcPublishError::environment(format!(
                "This tool must run on a {}* branch (got ref '{}')",
                branch_prefix, git_ref
            )));
        }

        let name = &git_ref[HEADS_PREFIX.len()..];
        let segment = name[branch_prefix.len()..]
            .split('/')
            .next()
            .unwrap_or_default();

        Ok(ReleaseBranch {
            name: name.to_string(),
            identifier: ReleaseIdentifier::new(segment)?,
        })
    }
}
