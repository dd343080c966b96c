//! Output variables for the invoking CI environment.
//!
//! GitHub Actions reads step outputs from the file named by the
//! `GITHUB_OUTPUT` environment variable, one `name=value` line each.
//! Outside of Actions the variable is unset and writes are a no-op, so
//! local and dry runs work unchanged.

use crate::error::Result;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;

/// Append an output variable for the surrounding workflow step
pub fn set_output(name: &str, value: &str) -> Result<()> {
    let path = match env::var("GITHUB_OUTPUT") {
        Ok(path) => path,
        Err(_) => return Ok(()),
    };

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_output_without_env_is_noop() {
        // GITHUB_OUTPUT is not set in the test environment
        if env::var("GITHUB_OUTPUT").is_err() {
            set_output("new-release-created", "false").unwrap();
        }
    }
}
