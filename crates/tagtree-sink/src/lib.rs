//! Output sink for serialized documents.
//!
//! A [`Sink`] is the single place where I/O happens: it receives a finished
//! document string and either writes it to a file path (replacing any
//! existing content) or emits it on the standard output stream. Everything
//! upstream is pure string building.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Error from dispatching a document to its sink.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SinkError {
    /// Writing the output file failed (permissions, missing directory, disk full).
    #[error("failed to write {path}")]
    File {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing to standard output failed.
    #[error("failed to write to stdout")]
    Stdout(#[from] io::Error),
}

/// Destination for a finished document.
///
/// # Example
///
/// ```
/// use tagtree_sink::Sink;
///
/// let sink = Sink::default();
/// assert!(matches!(sink, Sink::Stdout));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Sink {
    /// Emit to the standard output stream (with a trailing newline).
    #[default]
    Stdout,
    /// Write the full serialized document as the entire file content,
    /// overwriting any existing file.
    File(PathBuf),
}

impl Sink {
    /// Create a file sink for the given path.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Dispatch a finished document to this sink.
    ///
    /// The whole string is written in one operation; there is no streaming
    /// and no append mode. Failures propagate as-is, there is no retry.
    pub fn write(&self, contents: &str) -> Result<(), SinkError> {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(contents.as_bytes())?;
                handle.write_all(b"\n")?;
                handle.flush()?;
                tracing::debug!(bytes = contents.len(), "wrote document to stdout");
                Ok(())
            }
            Self::File(path) => {
                fs::write(path, contents).map_err(|source| SinkError::File {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote document");
                Ok(())
            }
        }
    }
}
