use crate::error::{AutoreleaseError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// A commit as obtained from the repository API.
///
/// Only the first line of the message takes part in classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub message: String,
}

impl Commit {
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Commit {
            sha: sha.into(),
            message: message.into(),
        }
    }

    /// First line of the commit message
    pub fn summary_line(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Commit category under the release convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Breaking,
    Feature,
    Fix,
    Performance,
    Refactor,
    Unclassified,
}

/// Classification ladder: category keywords in precedence order.
///
/// Every pattern has the shape `^tag(scope):` where the scope is one or
/// more characters excluding ')'. Only the breaking keyword accepts an
/// uppercase spelling. The order here is the evaluation order and must
/// not be rearranged.
const LADDER: [(Category, &str); 5] = [
    (Category::Breaking, r"^(?:breaking|BREAKING)\([^)]+\):"),
    (Category::Feature, r"^feat\([^)]+\):"),
    (Category::Fix, r"^fix\([^)]+\):"),
    (Category::Performance, r"^perf\([^)]+\):"),
    (Category::Refactor, r"^refactor\([^)]+\):"),
];

fn ladder() -> &'static Vec<(Category, Regex)> {
    static COMPILED: OnceLock<Vec<(Category, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        LADDER
            .iter()
            .map(|(category, pattern)| {
                // Patterns are fixed literals, so compilation cannot fail
                (*category, Regex::new(pattern).unwrap())
            })
            .collect()
    })
}

/// Classify a commit message against the ladder.
///
/// The first matching category wins; a message matching no pattern is
/// `Unclassified`. This never fails.
pub fn classify(message: &str) -> Category {
    let first_line = message.lines().next().unwrap_or("");
    for (category, pattern) in ladder() {
        if pattern.is_match(first_line) {
            return *category;
        }
    }
    Category::Unclassified
}

/// Pull the scope and body out of a classified commit message.
///
/// Expects the `tag(scope): body` shape on the first line and trims
/// exactly one leading space from the body. A message that does not have
/// that shape fails with a commit error; callers that already ran
/// [classify] should treat that as a contract violation.
pub fn extract_summary(message: &str) -> Result<(String, String)> {
    static SUMMARY: OnceLock<Regex> = OnceLock::new();
    let re = SUMMARY.get_or_init(|| Regex::new(r"^[A-Za-z]+\(([^)]+)\):(.*)").unwrap());

    let first_line = message.lines().next().unwrap_or("");
    let captures = re
        .captures(first_line)
        .ok_or_else(|| AutoreleaseError::commit(format!("'{}'", first_line)))?;

    let scope = captures[1].to_string();
    let raw_body = &captures[2];
    let body = raw_body.strip_prefix(' ').unwrap_or(raw_body).to_string();

    Ok((scope, body))
}
