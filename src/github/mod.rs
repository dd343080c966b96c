//! Repository API abstraction layer
//!
//! The release pipeline talks to the hosting service through the
//! [ReleaseHost] trait. The concrete implementations are:
//!
//! - [client::GitHubClient]: the real GitHub REST implementation
//! - [mock::MockHost]: an in-memory implementation for testing
//!
//! Code above this module should depend on the trait, not the concrete
//! client, so the pipeline stays testable without network access.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockHost;

use crate::domain::Commit;
use crate::error::Result;

/// The latest published release, as seen by the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    /// Version text of the release (e.g., "v1.2.3")
    pub version: String,
    /// Commit the release tag resolves to
    pub commit_sha: String,
}

/// Operations the release pipeline needs from the hosting service.
///
/// All implementors must be `Send + Sync`. Implementations map transport
/// errors to [crate::error::AutoreleaseError] variants; the two lookup
/// failures the pipeline distinguishes are a repository with no releases
/// and a release tag that does not resolve to a commit.
pub trait ReleaseHost: Send + Sync {
    /// Get the latest published release and the commit its tag points at.
    ///
    /// # Returns
    /// * `Ok(LatestRelease)` - version text and resolved commit sha
    /// * `Err(NoReleases)` - the repository has no published releases
    /// * `Err(ReleaseNotAnnotated)` - the tag does not resolve to a commit
    fn latest_release(&self) -> Result<LatestRelease>;

    /// Get commits newer than `sha`, oldest first, exclusive of `sha`.
    fn commits_since(&self, sha: &str) -> Result<Vec<Commit>>;

    /// Publish a release tagged `tag` at `target_commit` carrying `body`
    /// as its notes document. Duplicate tags are the service's concern.
    fn publish_release(&self, tag: &str, target_commit: &str, body: &str) -> Result<()>;
}
