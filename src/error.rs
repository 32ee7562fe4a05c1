use thiserror::Error;

/// Validation errors owned by this crate.
///
/// Filesystem failures are not translated; they propagate as-is through
/// `anyhow::Result` from whichever operation hit them.
#[derive(Debug, Error)]
pub enum ArchDocError {
    /// Two entries in the section list normalize to the same directory.
    #[error("duplicate section name: {0}")]
    DuplicateSection(String),
}
