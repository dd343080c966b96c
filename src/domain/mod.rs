//! Domain logic - pure release rules independent of the repository API

pub mod calculator;
pub mod commit;
pub mod notes;
pub mod version;

pub use calculator::{decide, ReleaseDecision};
pub use commit::{classify, extract_summary, Category, Commit};
pub use notes::{compose, ReleaseNotes, Section};
pub use version::{Version, VersionBump};
