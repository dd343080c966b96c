//! Release pipeline orchestration
//!
//! One sequential pass per invocation: fetch the latest release, list the
//! commits published since it, decide on a version bump, and when a bump
//! is warranted, compose notes and publish. Any step failure aborts the
//! remaining pipeline; the publish call is the only side effect.

use crate::domain::{calculator, notes, ReleaseDecision, Version};
use crate::error::Result;
use crate::github::ReleaseHost;
use crate::ui;

/// Per-run pipeline options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Commitish a published release is anchored to
    pub target_commit: String,

    /// Compute the decision and notes but skip the publish call
    pub dry_run: bool,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Released(Version),
    NoRelease,
}

/// Run the release pipeline against a host.
///
/// Returns `NoRelease` when the commit batch warrants no bump; that is a
/// normal outcome, not an error. Errors from any step propagate
/// immediately and leave no partial release behind.
pub fn run(host: &dyn ReleaseHost, options: &RunOptions) -> Result<RunOutcome> {
    let latest = host.latest_release()?;
    let prior = Version::parse(&latest.version)?;

    let commits = host.commits_since(&latest.commit_sha)?;
    ui::display_commit_batch(&commits);

    let next = match calculator::decide(&commits, prior) {
        ReleaseDecision::NoRelease => return Ok(RunOutcome::NoRelease),
        ReleaseDecision::NewVersion(next) => next,
    };

    ui::display_proposed_release(&prior, &next);

    let notes = notes::compose(&commits)?;
    let tag = next.to_string();

    if options.dry_run {
        ui::display_status(&format!("Dry run: would publish release {}", tag));
        return Ok(RunOutcome::Released(next));
    }

    host.publish_release(&tag, &options.target_commit, &notes.to_string())?;

    Ok(RunOutcome::Released(next))
}
