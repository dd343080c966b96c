//! Console display helpers.
//!
//! Plain formatting functions with no return values; all decision logic
//! lives in the domain modules.

use crate::domain::{Commit, Version};

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// List the commit batch under consideration, up to 10 entries.
pub fn display_commit_batch(commits: &[Commit]) {
    println!("\n\x1b[1mNew commits since last release: {}\x1b[0m", commits.len());

    for commit in commits.iter().take(10) {
        let short_sha = if commit.sha.len() > 7 {
            &commit.sha[..7]
        } else {
            commit.sha.as_str()
        };
        println!("  {} {}", short_sha, commit.summary_line());
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Show the version transition a qualifying batch produced.
pub fn display_proposed_release(prior: &Version, next: &Version) {
    println!("\n\x1b[1mProposed Release:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", prior);
    println!("  To:   \x1b[32m{}\x1b[0m", next);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_commit_batch_short_sha() {
        let commits = vec![Commit::new("abc", "fix(core): bug")];
        display_commit_batch(&commits);
    }

    #[test]
    fn test_display_proposed_release() {
        display_proposed_release(&Version::new(1, 2, 3), &Version::new(1, 3, 0));
    }
}
