//! CI environment: inputs read from the runner and step outputs written back.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::RepoSlug;
use crate::error::{RcPublishError, Result};

pub const GITHUB_REF: &str = "GITHUB_REF";
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Inputs the publisher reads from the CI runner
#[derive(Debug, Clone, PartialEq)]
pub struct CiEnvironment {
    pub git_ref: String,
    pub token: String,
    pub repository: RepoSlug,
    pub output_file: Option<PathBuf>,
}

impl CiEnvironment {
    /// Read the environment of the current process
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the environment through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let (token, repository) = match (get(GITHUB_TOKEN), get(GITHUB_REPOSITORY)) {
            (Some(token), Some(repository)) => (token, repository),
            _ => {
                return Err(RcPublishError::environment(
                    "GITHUB_TOKEN and GITHUB_REPOSITORY env vars are required",
                ))
            }
        };

        Ok(CiEnvironment {
            git_ref: get(GITHUB_REF).unwrap_or_default(),
            token,
            repository: RepoSlug::parse(&repository)?,
            output_file: get(GITHUB_OUTPUT).map(PathBuf::from),
        })
    }
}

/// Append `key=value` lines to a CI output file.
pub fn append_outputs(path: &Path, outputs: &[(&str, String)]) -> Result<()> {
    if let Some((key, _)) = outputs.iter().find(|(_, value)| value.contains('\n')) {
        return Err(RcPublishError::environment(format!(
            "Output '{}' must be a single line",
            key
        )));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (key, value) in outputs {
        writeln!(file, "{}={}", key, value)?;
    }
    Ok(())
}
