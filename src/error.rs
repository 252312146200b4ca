//! Error types for report generation and conversion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for planejamento-pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the report PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A layout snapshot could not be parsed.
    #[error("Layout JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The PDF backend failed to produce a document.
    #[error("Rendering error: {0}")]
    Render(String),

    /// An external program could not be started at all.
    #[error("failed to run `{}`: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external converter ran but exited unsuccessfully. `status` is the
    /// platform description of the exit status.
    #[error("conversion failed ({status}): {stderr}")]
    Conversion { status: String, stderr: String },
}

impl Error {
    /// Text to show the user when a conversion fails: the converter's own
    /// error stream when there is one, otherwise the error itself.
    pub fn stderr_text(&self) -> String {
        match self {
            Error::Conversion { stderr, .. } => stderr.clone(),
            other => other.to_string(),
        }
    }
}
