//! # partjoin core
//!
//! Reassembles a file that was split into sequentially numbered parts.
//!
//! The parts are found with a glob pattern resolved against an input directory, sorted by
//! their full path (byte order), and streamed one after another into a single output file:
//!
//! ```text
//! d/
//! ├── Bistro.zip.part001  ─┐
//! ├── Bistro.zip.part002   ├──▶ Bistro.zip
//! └── Bistro.zip.part003  ─┘
//! ```
//!
//! Part names must sort lexically into reassembly order, so numeric suffixes should be
//! zero-padded.
//!
//! **No console concerns**: printing progress and choosing exit codes belong in `partjoin-cli`.
//!
//! ## Example Usage
//!
//! ```no_run
//! use partjoin_core::{join, JoinConfig, NoProgress};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JoinConfig::new(PathBuf::from("downloads"), PathBuf::from("Bistro.zip"), None)?;
//! let report = join(&config, &mut NoProgress)?;
//! println!("{} bytes written", report.bytes_written());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
mod error;
pub mod joiner;
pub mod parts;

pub use config::JoinConfig;
pub use error::{JoinError, JoinResult};
pub use joiner::{append_parts, join, JoinProgress, JoinReport, NoProgress};
pub use parts::{discover_parts, PartFile};
