use crate::error::{AutoreleaseError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from its textual form (e.g., "v1.2.3" -> Version(1,2,3)).
    ///
    /// The leading 'v' is optional. Anything that is not exactly three
    /// dot-separated non-negative integers is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.strip_prefix('v').unwrap_or(text);

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(AutoreleaseError::version(format!(
                "'{}' - expected v<major>.<minor>.<patch>",
                text
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| AutoreleaseError::version(format!("invalid major part: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| AutoreleaseError::version(format!("invalid minor part: {}", parts[1])))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| AutoreleaseError::version(format!("invalid patch part: {}", parts[2])))?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}
