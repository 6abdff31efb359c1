use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// Errors from the durable token store.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session Read Error: {path}: {source} {location}")]
    Read {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session Parse Error: {path}: {reason} {location}")]
    Parse {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Session Write Error: {path}: {source} {location}")]
    Write {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session Path Detection Error: {message} {location}")]
    PathDetection {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionStoreError {
    #[track_caller]
    pub fn path_detection(message: impl Into<String>) -> Self {
        SessionStoreError::PathDetection {
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}
