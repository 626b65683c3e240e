use std::io;
use std::path::Path;
use thiserror::Error;

pub mod segment;
pub mod theme;
pub use segment::{ColorPair, Segment, SegmentSink};
pub use theme::Theme;

/// kube-ps specific error types
#[derive(Error, Debug)]
pub enum KpsError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot resolve path {path:?}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl KpsError {
    /// Classify a read failure, keeping "missing" apart from other I/O errors.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            KpsError::NotFound { path }
        } else {
            KpsError::Io { path, source }
        }
    }

    pub fn parse(path: &Path, source: serde_yaml::Error) -> Self {
        KpsError::Parse {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type KpsResult<T> = std::result::Result<T, KpsError>;
