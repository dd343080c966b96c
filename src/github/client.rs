//! GitHub REST implementation of the release host.

use crate::config::Settings;
use crate::domain::Commit;
use crate::error::{AutoreleaseError, Result};
use crate::github::{LatestRelease, ReleaseHost};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    tag_name: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RefResponse {
    object: RefObject,
}

#[derive(Debug, Deserialize)]
struct RefObject {
    sha: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct CommitEntry {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

/// GitHub REST client bound to one token and one repository
pub struct GitHubClient {
    api_url: String,
    token: String,
    owner: String,
    repo: String,
    draft: bool,
    prerelease: bool,
}

impl GitHubClient {
    /// Create a client from resolved settings
    pub fn new(settings: &Settings) -> Self {
        GitHubClient {
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            owner: settings.owner.clone(),
            repo: settings.repo.clone(),
            draft: settings.draft,
            prerelease: settings.prerelease,
        }
    }

    fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_url, self.owner, self.repo, path)
    }

    fn get(&self, url: &str) -> ureq::Request {
        ureq::get(url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", "autorelease")
    }

    fn post(&self, url: &str) -> ureq::Request {
        ureq::post(url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", "autorelease")
    }

    /// Resolve a release tag to the commit it points at
    fn resolve_tag_commit(&self, tag: &str) -> Result<String> {
        let url = self.repo_url(&format!("git/ref/tags/{}", tag));
        let reference: RefResponse = self.get(&url).call()?.into_json()?;

        if reference.object.kind != "commit" {
            return Err(AutoreleaseError::ReleaseNotAnnotated(tag.to_string()));
        }

        Ok(reference.object.sha)
    }
}

impl ReleaseHost for GitHubClient {
    fn latest_release(&self) -> Result<LatestRelease> {
        let url = self.repo_url("releases/latest");
        let release: ReleaseResponse = match self.get(&url).call() {
            Ok(response) => response.into_json()?,
            Err(ureq::Error::Status(404, _)) => return Err(AutoreleaseError::NoReleases),
            Err(e) => return Err(e.into()),
        };

        let commit_sha = self.resolve_tag_commit(&release.tag_name)?;

        // The release name is the version text the action published;
        // fall back to the tag when a release carries no name.
        let version = release.name.unwrap_or(release.tag_name);

        Ok(LatestRelease {
            version,
            commit_sha,
        })
    }

    fn commits_since(&self, sha: &str) -> Result<Vec<Commit>> {
        let url = self.repo_url("commits");
        let entries: Vec<CommitEntry> = self.get(&url).call()?.into_json()?;

        // The listing is newest first; walk until the limiter commit,
        // then flip to chronological order.
        let mut newer = Vec::new();
        for entry in entries {
            if entry.sha == sha {
                break;
            }
            newer.push(Commit::new(entry.sha, entry.commit.message));
        }

        newer.reverse();
        Ok(newer)
    }

    fn publish_release(&self, tag: &str, target_commit: &str, body: &str) -> Result<()> {
        let url = self.repo_url("releases");
        self.post(&url).send_json(serde_json::json!({
            "tag_name": tag,
            "target_commitish": target_commit,
            "name": tag,
            "body": body,
            "draft": self.draft,
            "prerelease": self.prerelease,
        }))?;
        Ok(())
    }
}
