use crate::error::{AutoreleaseError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Default GitHub API base URL
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

/// Repository-local configuration file for autorelease.
///
/// Everything here is optional; the file only exists to override defaults.
/// Per-run values (token, repository, target commit) come from the
/// environment, not from this file.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

/// GitHub endpoint settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: default_api_url(),
        }
    }
}

/// Flags applied to every published release
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub prerelease: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autorelease.toml` in current directory
/// 3. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./autorelease.toml").exists() {
        fs::read_to_string("./autorelease.toml")?
    } else {
        return Ok(FileConfig::default());
    };

    let config: FileConfig = toml::from_str(&config_str)
        .map_err(|e| AutoreleaseError::config(format!("invalid config file: {}", e)))?;
    Ok(config)
}

/// Fully resolved per-run settings, passed explicitly to the client and
/// pipeline. No process-global state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub api_url: String,
    pub target_commit: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl Settings {
    /// Resolve settings from the config file plus the CI environment.
    ///
    /// `GITHUB_TOKEN` and a repository (from `repo_override` or
    /// `GITHUB_REPOSITORY` as "owner/name") are required. `GITHUB_SHA`
    /// supplies the target commitish for a published release and
    /// `GITHUB_API_URL` overrides the configured base URL.
    pub fn resolve(file: &FileConfig, repo_override: Option<&str>) -> Result<Self> {
        let token = env::var("GITHUB_TOKEN")
            .map_err(|_| AutoreleaseError::config("GITHUB_TOKEN is not set"))?;

        let repo_spec = match repo_override {
            Some(spec) => spec.to_string(),
            None => env::var("GITHUB_REPOSITORY").map_err(|_| {
                AutoreleaseError::config("GITHUB_REPOSITORY is not set and no --repo was given")
            })?,
        };

        let (owner, repo) = match repo_spec.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                (owner.to_string(), repo.to_string())
            }
            _ => {
                return Err(AutoreleaseError::config(format!(
                    "repository '{}' is not of the form owner/name",
                    repo_spec
                )))
            }
        };

        let api_url = env::var("GITHUB_API_URL").unwrap_or_else(|_| file.github.api_url.clone());
        let target_commit = env::var("GITHUB_SHA").unwrap_or_default();

        Ok(Settings {
            token,
            owner,
            repo,
            api_url,
            target_commit,
            draft: file.release.draft,
            prerelease: file.release.prerelease,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert!(!config.release.draft);
        assert!(!config.release.prerelease);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: FileConfig = toml::from_str(
            r#"
            [release]
            draft = true
            "#,
        )
        .unwrap();
        assert!(config.release.draft);
        assert!(!config.release.prerelease);
        assert_eq!(config.github.api_url, "https://api.github.com");
    }

    #[test]
    fn test_parse_api_url_override() {
        let config: FileConfig = toml::from_str(
            r#"
            [github]
            api_url = "https://github.example.com/api/v3"
            "#,
        )
        .unwrap();
        assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
    }
}
