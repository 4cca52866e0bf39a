//! Part joining
//!
//! [`join`] discovers the parts for a [`JoinConfig`] and streams them, in order, into the
//! output file. The copy is a single sequential pass:
//!
//! - nothing is created or truncated when no parts match
//! - the output is truncated and then appended to one part at a time
//! - the first I/O failure aborts the run and the partial output stays on disk
//!
//! Each part is opened, streamed and closed before the next one is touched. The output file
//! is owned by a `BufWriter` for the whole pass, so it is closed on every exit path.

use crate::parts::{discover_parts, PartFile};
use crate::{JoinConfig, JoinError, JoinResult};
use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Observer for join progress
///
/// Both hooks default to doing nothing. `appending` is called before each part is opened.
pub trait JoinProgress {
    fn parts_found(&mut self, _parts: &[PartFile]) {}

    fn appending(&mut self, _part: &PartFile) {}
}

/// Progress observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl JoinProgress for NoProgress {}

/// Outcome of a successful join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinReport {
    output_path: PathBuf,
    parts: Vec<PartFile>,
    bytes_written: u64,
}

impl JoinReport {
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Parts in the order they were appended
    pub fn parts(&self) -> &[PartFile] {
        &self.parts
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// Joins the parts matched by `config` into its output file
///
/// # Errors
///
/// Returns `JoinError` if:
/// - no files match the pattern (`NoPartsFound`); the output is left untouched
/// - the output path is one of the matched parts (`OutputIsPart`); nothing is written
/// - any open, read, write or flush fails (`Io`); output written so far is kept
pub fn join(config: &JoinConfig, progress: &mut impl JoinProgress) -> JoinResult<JoinReport> {
    let parts = discover_parts(config)?;

    if parts.is_empty() {
        return Err(JoinError::NoPartsFound {
            search_pattern: config.search_pattern(),
        });
    }

    progress.parts_found(&parts);
    ensure_output_is_not_a_part(config.output_path(), &parts)?;

    tracing::info!(
        "joining {} parts into {}",
        parts.len(),
        config.output_path().display()
    );

    let output = config.output_path();
    let file = fs::File::create(output)
        .map_err(|e| JoinError::io_at("create output file", output, e))?;
    let mut writer = BufWriter::new(file);

    let bytes_written = append_parts(&parts, &mut writer, progress)?;

    writer
        .flush()
        .map_err(|e| JoinError::io_at("write output file", output, e))?;

    tracing::info!("wrote {} bytes to {}", bytes_written, output.display());

    Ok(JoinReport {
        output_path: output.to_path_buf(),
        parts,
        bytes_written,
    })
}

/// Streams each part, in order, into `writer`
///
/// Returns the number of bytes copied. Stops at the first failure; bytes already handed to
/// `writer` are not retracted.
pub fn append_parts<W: Write>(
    parts: &[PartFile],
    writer: &mut W,
    progress: &mut impl JoinProgress,
) -> JoinResult<u64> {
    let mut total = 0u64;

    for part in parts {
        progress.appending(part);
        tracing::debug!("appending {}", part.path().display());

        let file = fs::File::open(part.path())
            .map_err(|e| JoinError::io_at("open part file", part.path(), e))?;
        let mut reader = BufReader::new(file);

        let copied = io::copy(&mut reader, writer)
            .map_err(|e| JoinError::io_at("append part file", part.path(), e))?;

        if copied != part.size_bytes() {
            tracing::warn!(
                "{} changed size since discovery ({} bytes, now {})",
                part.path().display(),
                part.size_bytes(),
                copied
            );
        }

        total += copied;
    }

    Ok(total)
}

fn ensure_output_is_not_a_part(output: &Path, parts: &[PartFile]) -> JoinResult<()> {
    // An output that does not exist yet cannot be one of the parts.
    let Ok(output) = fs::canonicalize(output) else {
        return Ok(());
    };

    for part in parts {
        if fs::canonicalize(part.path()).is_ok_and(|p| p == output) {
            return Err(JoinError::OutputIsPart(part.path().to_path_buf()));
        }
    }

    Ok(())
}
