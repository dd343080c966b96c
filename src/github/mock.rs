use crate::domain::Commit;
use crate::error::{AutoreleaseError, Result};
use crate::github::{LatestRelease, ReleaseHost};
use std::sync::Mutex;

/// A release recorded by the mock instead of being published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedRelease {
    pub tag: String,
    pub target_commit: String,
    pub body: String,
}

/// Mock host for testing the pipeline without network access
pub struct MockHost {
    release: Option<LatestRelease>,
    commits: Vec<Commit>,
    commits_error: Option<String>,
    publish_error: Option<String>,
    published: Mutex<Vec<PublishedRelease>>,
}

impl MockHost {
    /// Create a mock with no releases and no commits
    pub fn new() -> Self {
        MockHost {
            release: None,
            commits: Vec::new(),
            commits_error: None,
            publish_error: None,
            published: Mutex::new(Vec::new()),
        }
    }

    /// Set the latest published release
    pub fn with_release(mut self, version: impl Into<String>, sha: impl Into<String>) -> Self {
        self.release = Some(LatestRelease {
            version: version.into(),
            commit_sha: sha.into(),
        });
        self
    }

    /// Append a commit to the batch returned by `commits_since`
    pub fn with_commit(mut self, sha: impl Into<String>, message: impl Into<String>) -> Self {
        self.commits.push(Commit::new(sha, message));
        self
    }

    /// Make `commits_since` fail with an API error
    pub fn fail_commits_with(mut self, msg: impl Into<String>) -> Self {
        self.commits_error = Some(msg.into());
        self
    }

    /// Make `publish_release` fail with an API error
    pub fn fail_publish_with(mut self, msg: impl Into<String>) -> Self {
        self.publish_error = Some(msg.into());
        self
    }

    /// Releases recorded by `publish_release`
    pub fn published(&self) -> Vec<PublishedRelease> {
        self.published.lock().unwrap().clone()
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for MockHost {
    fn latest_release(&self) -> Result<LatestRelease> {
        self.release.clone().ok_or(AutoreleaseError::NoReleases)
    }

    fn commits_since(&self, _sha: &str) -> Result<Vec<Commit>> {
        if let Some(msg) = &self.commits_error {
            return Err(AutoreleaseError::api(msg.clone()));
        }
        Ok(self.commits.clone())
    }

    fn publish_release(&self, tag: &str, target_commit: &str, body: &str) -> Result<()> {
        if let Some(msg) = &self.publish_error {
            return Err(AutoreleaseError::api(msg.clone()));
        }
        self.published.lock().unwrap().push(PublishedRelease {
            tag: tag.to_string(),
            target_commit: target_commit.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
