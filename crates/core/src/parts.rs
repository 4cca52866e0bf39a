//! Part file discovery
//!
//! Resolves a [`JoinConfig`]'s pattern against its input directory and returns the matching
//! regular files in join order. Join order is the byte-wise order of the full path strings,
//! so parts must be named such that this coincides with reassembly order (zero-padded
//! numeric suffixes, for example).

use crate::{JoinConfig, JoinError, JoinResult};
use glob::{MatchOptions, Pattern};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// One fragment of a split file, as found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartFile {
    path: PathBuf,
    size_bytes: u64,
}

impl PartFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the part, e.g. `Bistro.zip.part003`
    pub fn name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
    }

    /// Size observed when the part was discovered
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Finds the part files for `config`, sorted into join order
///
/// The input directory is matched literally (glob metacharacters in it are escaped); only
/// the pattern is interpreted. A missing input directory yields an empty list.
///
/// # Errors
///
/// Returns `JoinError` if:
/// - the pattern is not valid glob syntax, or the input directory is not valid UTF-8 and so
///   cannot be expressed as a glob (`InvalidPattern`)
/// - a directory cannot be read while matching, or a match cannot be inspected (`Io`)
pub fn discover_parts(config: &JoinConfig) -> JoinResult<Vec<PartFile>> {
    let Some(input_dir) = config.input_dir().to_str() else {
        return Err(JoinError::InvalidPattern(format!(
            "input directory is not valid UTF-8: {}",
            config.input_dir().display()
        )));
    };

    let escaped_dir = Pattern::escape(input_dir);
    let search = Path::new(&escaped_dir).join(config.pattern());
    let search = search.to_string_lossy();

    tracing::debug!("searching for parts with {}", search);

    let entries = glob::glob_with(&search, MATCH_OPTIONS)
        .map_err(|e| JoinError::InvalidPattern(format!("'{}': {}", config.pattern(), e)))?;

    let mut parts = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let cause = std::io::Error::new(e.error().kind(), e.error().to_string());
            JoinError::io_at("read directory", e.path(), cause)
        })?;

        let metadata =
            fs::metadata(&path).map_err(|e| JoinError::io_at("inspect part file", &path, e))?;

        if !metadata.is_file() {
            tracing::debug!("skipping non-file match {}", path.display());
            continue;
        }

        parts.push(PartFile {
            path,
            size_bytes: metadata.len(),
        });
    }

    parts.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

    Ok(parts)
}
