//! Pipeline-level error types.
//!
//! Only file-system and serialization failures are fatal. Data-level
//! anomalies (a bad hex literal, an alias with no target) are recorded in
//! the output and surfaced as counts in the run summaries instead of
//! aborting the run — see [`crate::palette`] and [`crate::theme`].

use std::path::PathBuf;

use thiserror::Error;

/// Error type for a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required input document is absent. Aborts the run before any
    /// output file is touched, so no partial JSON is ever written.
    #[error("required input document not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Underlying I/O failure (unreadable input, unwritable output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display_names_the_path() {
        let err = PipelineError::MissingInput {
            path: PathBuf::from("src/data/# Theme.md"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("# Theme.md"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PipelineError = io_err.into();
        assert!(matches!(err, PipelineError::Io(_)));
    }
}
