//! Constants used throughout the partjoin core crate.
//!
//! These are the defaults a [`crate::JoinConfig`] falls back to. They are only read when a
//! configuration is built; nothing else in the crate consults them.

/// Default directory searched for part files.
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Default name of the reassembled output file.
pub const DEFAULT_OUTPUT_FILE: &str = "Bistro.zip";

/// Suffix appended to the output file name to form the default part pattern.
pub const PART_PATTERN_SUFFIX: &str = ".part*";
