use std::path::Path;

use git2::{
    AutotagOption, Cred, CredentialType, ErrorClass, ErrorCode, FetchOptions, PushOptions,
    RemoteCallbacks, Repository,
};
use tracing::debug;

use crate::error::{RcPublishError, Result};
use crate::git::TagStore;

/// libgit2 keeps asking for credentials after a rejection; stop after this many.
const MAX_CREDENTIAL_ATTEMPTS: u32 = 4;

const TOKEN_USERNAME: &str = "x-access-token";

/// Wrapper around git2::Repository implementing [TagStore]
pub struct Git2Repository {
    repo: Repository,
    token: Option<String>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| RcPublishError::config(format!("Not in a git repository: {}", e)))?;

        Ok(Git2Repository { repo, token: None })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Repository { repo, token: None }
    }

    /// Offer `token` when an HTTPS remote asks for a username and password.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Credential callbacks shared by fetch and push.
    ///
    /// HTTPS remotes get the API token; SSH remotes try keys from `~/.ssh`
    /// and then the SSH agent.
    fn callbacks(&self) -> RemoteCallbacks<'_> {
        let mut attempts = 0;
        let token = self.token.as_deref();

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(move |url, username_from_url, allowed_types| {
            attempts += 1;
            if attempts > MAX_CREDENTIAL_ATTEMPTS {
                return Err(git2::Error::from_str(&format!(
                    "authentication failed for {}",
                    url
                )));
            }

            if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
                if let Some(token) = token {
                    return Cred::userpass_plaintext(TOKEN_USERNAME, token);
                }
            }

            if allowed_types.contains(CredentialType::SSH_KEY) {
                let user = username_from_url.unwrap_or("git");
                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = Cred::ssh_key(user, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }
                if let Ok(cred) = Cred::ssh_key_from_agent(user) {
                    return Ok(cred);
                }
            }

            Cred::default()
        });

        callbacks
    }
}

impl TagStore for Git2Repository {
    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| RcPublishError::remote(format!("Cannot find remote '{}': {}", remote, e)))?;

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(self.callbacks());
        fetch_options.download_tags(AutotagOption::All);

        debug!(remote, "fetching tags");
        remote_handle
            .fetch(&["+refs/tags/*:refs/tags/*"], Some(&mut fetch_options), None)
            .map_err(|e| {
                RcPublishError::remote(format!("Failed to fetch tags from '{}': {}", remote, e))
            })?;

        Ok(())
    }

    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(pattern)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| RcPublishError::tag(format!("Cannot resolve HEAD commit: {}", e)))?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| {
                if e.code() == ErrorCode::Exists {
                    RcPublishError::tag(format!("Tag '{}' already exists", name))
                } else {
                    RcPublishError::tag(format!("Cannot create tag '{}': {}", name, e))
                }
            })?;

        debug!(tag = name, commit = %head.id(), "created lightweight tag");
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| RcPublishError::remote(format!("Cannot find remote '{}': {}", remote, e)))?;

        let mut callbacks = self.callbacks();
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);
        debug!(remote, refspec = %refspec, "pushing tag");

        remote_handle
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                ErrorClass::Net => {
                    RcPublishError::remote(format!("Network error during push: {}", e))
                }
                ErrorClass::Reference => {
                    RcPublishError::remote(format!("Reference error during push: {}", e))
                }
                _ => RcPublishError::remote(format!("Failed to push tag '{}': {}", name, e)),
            })
    }
}
