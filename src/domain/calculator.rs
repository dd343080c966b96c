use crate::domain::commit::{classify, Category, Commit};
use crate::domain::version::{Version, VersionBump};

/// Outcome of scanning a commit batch against a prior version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    NoRelease,
    NewVersion(Version),
}

/// Fold a commit batch into a release decision.
///
/// Strict precedence ladder: a breaking commit anywhere in the batch means
/// a major bump, otherwise a feature commit means a minor bump, otherwise
/// any fix-like commit (fix, perf, refactor) means a patch bump. A batch
/// with none of the three needs no release. Bumps never compound;
/// unclassified commits contribute nothing.
pub fn decide(commits: &[Commit], prior: Version) -> ReleaseDecision {
    let mut has_breaking = false;
    let mut has_feature = false;
    let mut has_fix_like = false;

    for commit in commits {
        match classify(&commit.message) {
            Category::Breaking => has_breaking = true,
            Category::Feature => has_feature = true,
            Category::Fix | Category::Performance | Category::Refactor => has_fix_like = true,
            Category::Unclassified => {}
        }
    }

    let bump = if has_breaking {
        Some(VersionBump::Major)
    } else if has_feature {
        Some(VersionBump::Minor)
    } else if has_fix_like {
        Some(VersionBump::Patch)
    } else {
        None
    };

    match bump {
        Some(bump) => ReleaseDecision::NewVersion(prior.bump(bump)),
        None => ReleaseDecision::NoRelease,
    }
}
