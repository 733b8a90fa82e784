//! minic-error - Boundary errors and source positions for the Minic tokenizer
//!
//! Malformed lexemes never surface here: the scanner embeds them in the token
//! stream as `Error` tokens and keeps going. This crate covers only the
//! program boundary (paths that cannot be opened) and the [`Position`] type
//! stamped on every token.

pub mod span;

pub use span::Position;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened for reading.
    #[error("failed to open {} for reading: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be opened for writing.
    #[error("failed to open {} for writing: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Default Result type for operations that may fail at the program boundary
pub type Result<T> = std::result::Result<T, Error>;
