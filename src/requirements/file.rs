//! Requirements file loading.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{PipsyncError, Result};

use super::bare_name;

/// Parse requirements file contents into a set of bare package names.
///
/// Per line: trim surrounding whitespace, skip empty lines and comment
/// lines starting with `#`, then keep everything before the first `==`.
pub fn parse_requirements(contents: &str) -> BTreeSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| bare_name(line).to_string())
        .collect()
}

/// Load the required-package set from a requirements file.
///
/// A missing file is a fatal setup error and carries the path; so is any
/// other read failure. There is no retry.
pub fn load_required(path: &Path) -> Result<BTreeSet<String>> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            PipsyncError::RequirementsNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PipsyncError::RequirementsRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let required = parse_requirements(&contents);
    tracing::debug!(
        "Loaded {} requirement(s) from {}",
        required.len(),
        path.display()
    );
    Ok(required)
}
