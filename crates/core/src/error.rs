use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum JoinError {
    #[error("No files found matching the pattern '{search_pattern}'")]
    NoPartsFound { search_pattern: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid part pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid output path: {0}")]
    InvalidOutputPath(String),
    #[error(
        "output file {} matches the part pattern and would overwrite an input",
        .0.display()
    )]
    OutputIsPart(PathBuf),
}

impl JoinError {
    /// Wraps an I/O error with the action and path that caused it, keeping its kind.
    pub(crate) fn io_at(action: &str, path: &std::path::Path, e: std::io::Error) -> Self {
        JoinError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to {} {}: {}", action, path.display(), e),
        ))
    }

    /// True when the join found nothing to do rather than failing part-way.
    pub fn is_no_parts(&self) -> bool {
        matches!(self, JoinError::NoPartsFound { .. })
    }
}

pub type JoinResult<T> = std::result::Result<T, JoinError>;
