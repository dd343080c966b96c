use crate::domain::commit::{classify, extract_summary, Category, Commit};
use crate::error::Result;
use std::fmt;

/// Section order and headings for the rendered notes document.
/// Mirrors the classification precedence; an absent category renders
/// no section at all.
const SECTION_ORDER: [(Category, &str); 5] = [
    (Category::Breaking, "Breaking Changes"),
    (Category::Feature, "Features"),
    (Category::Fix, "Bug Fixes"),
    (Category::Performance, "Performance Improvements"),
    (Category::Refactor, "Refactoring"),
];

/// One heading plus its rendered entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub entries: Vec<String>,
}

/// Release notes document, sections in fixed category order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub sections: Vec<Section>,
}

impl ReleaseNotes {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for ReleaseNotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "#### {}", section.label)?;
            for entry in &section.entries {
                write!(f, "\n* {}", entry)?;
            }
        }
        Ok(())
    }
}

/// Group classified commits into a notes document.
///
/// Unclassified commits are skipped. A commit that classified cleanly but
/// fails summary extraction aborts the whole composition; dropping it
/// silently would desynchronize the notes from the commit history.
pub fn compose(commits: &[Commit]) -> Result<ReleaseNotes> {
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); SECTION_ORDER.len()];

    for commit in commits {
        let category = classify(&commit.message);
        if category == Category::Unclassified {
            continue;
        }

        let (scope, body) = extract_summary(&commit.message)?;
        let entry = format!("**{}**, {}", scope, body);

        if let Some(index) = SECTION_ORDER.iter().position(|(c, _)| *c == category) {
            buckets[index].push(entry);
        }
    }

    let sections = SECTION_ORDER
        .iter()
        .zip(buckets)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|((_, label), entries)| Section { label, entries })
        .collect();

    Ok(ReleaseNotes { sections })
}
