pub mod actions;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod ui;

pub use error::{AutoreleaseError, Result};
