//! Error types for the word cloud pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a single pipeline invocation. Nothing is retried.
#[derive(Error, Debug)]
pub enum WordCloudError {
    /// The corpus could not be opened for read/write.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The size of the corpus could not be determined.
    #[error("cannot determine size of {}: {source}", path.display())]
    Size {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The private mapping of the corpus could not be established.
    #[error("mmap failed for {}: {source}", path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the corpus failed midway (streaming strategy only).
    #[error("read failed for {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No qualifying words were found, or zero words were requested.
    #[error("no words to render")]
    EmptySelection,

    /// The smallest font size is larger than the biggest one.
    #[error("invalid font range: min {min}px > max {max}px")]
    InvalidFontRange { min: u32, max: u32 },
}

/// Result type alias using [`WordCloudError`].
pub type Result<T> = std::result::Result<T, WordCloudError>;
