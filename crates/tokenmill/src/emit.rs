//! Document reading and JSON emission.
//!
//! Outputs are written whole-file as 2-space-indented JSON with a final
//! newline, so reruns on unchanged input are byte-identical and diffs
//! stay readable. Inputs are read whole-file; a missing document becomes
//! [`PipelineError::MissingInput`] *before* any output is touched, so an
//! aborted run never leaves partial JSON behind.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::error::PipelineError;

/// Reads a required input document.
pub fn read_input(path: &Path) -> Result<String, PipelineError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(PipelineError::MissingInput {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(err.into()),
    }
}

/// Serializes `value` as the canonical JSON shape and overwrites `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
