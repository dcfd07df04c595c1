//! Git tag store abstraction
//!
//! The publisher only needs four things from a repository: refresh tags from
//! the remote, list tags by glob, create a tag at HEAD and push it. The
//! [TagStore] trait captures exactly that so the publish workflow can run
//! against a real repository or an in-memory one.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use rc_publish::git::TagStore;
//! # fn example<S: TagStore>(store: &S) -> rc_publish::Result<()> {
//! store.fetch_tags("origin")?;
//! let tags = store.list_tags(Some("2508.*"))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Tag operations needed to publish a release candidate.
///
/// Tags are append-only: nothing here moves or deletes an existing tag.
pub trait TagStore {
    /// Fetch all tags from `remote` into the local repository.
    ///
    /// # Returns
    /// * `Ok(())` - Tags refreshed
    /// * `Err` - Remote missing, unreachable, or authentication failed
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// List local tag names, optionally filtered by a glob such as `2508.*`.
    fn list_tags(&self, pattern: Option<&str>) -> Result<Vec<String>>;

    /// Create a lightweight tag pointing at the current HEAD commit.
    ///
    /// Fails if the tag already exists.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a single tag to `remote`.
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
