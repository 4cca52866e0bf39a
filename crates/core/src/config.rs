//! Join configuration.
//!
//! A [`JoinConfig`] is resolved once at process startup and then passed into
//! [`crate::join`]. Defaults come from [`crate::constants`] and are only applied here, so the
//! joiner itself never consults process-wide state.

use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE, PART_PATTERN_SUFFIX};
use crate::{JoinError, JoinResult};
use std::path::{Path, PathBuf};

/// Parameters for a single join run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinConfig {
    input_dir: PathBuf,
    output_path: PathBuf,
    pattern: String,
}

impl JoinConfig {
    /// Create a new `JoinConfig`.
    ///
    /// When `pattern` is `None` the pattern defaults to `<output file name>.part*`.
    ///
    /// # Errors
    ///
    /// Returns `JoinError` if:
    /// - `output_path` has no file name component (`InvalidOutputPath`)
    /// - the pattern is blank or is not valid glob syntax (`InvalidPattern`)
    pub fn new(
        input_dir: PathBuf,
        output_path: PathBuf,
        pattern: Option<String>,
    ) -> JoinResult<Self> {
        let Some(output_name) = output_path.file_name() else {
            return Err(JoinError::InvalidOutputPath(format!(
                "Path has no file name: {}",
                output_path.display()
            )));
        };

        let pattern = match pattern {
            Some(pattern) => pattern,
            None => default_pattern(&output_name.to_string_lossy()),
        };

        if pattern.trim().is_empty() {
            return Err(JoinError::InvalidPattern("pattern cannot be empty".into()));
        }

        glob::Pattern::new(&pattern)
            .map_err(|e| JoinError::InvalidPattern(format!("'{}': {}", pattern, e)))?;

        Ok(Self {
            input_dir,
            output_path,
            pattern,
        })
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern resolved against the input directory, as shown to the user.
    pub fn search_pattern(&self) -> String {
        self.input_dir.join(&self.pattern).display().to_string()
    }
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            pattern: default_pattern(DEFAULT_OUTPUT_FILE),
        }
    }
}

fn default_pattern(output_name: &str) -> String {
    format!("{}{}", output_name, PART_PATTERN_SUFFIX)
}
