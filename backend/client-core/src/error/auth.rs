use crate::error::session::SessionStoreError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Errors that can occur during login.
#[derive(Debug, ThisError)]
pub enum AuthError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The server rejected the credentials (non-2xx status).
    ///
    /// No session state was written; there is nothing to roll back.
    #[error("Login Rejected: HTTP {status_code} - {message} {location}")]
    Rejected {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

impl AuthError {
    #[track_caller]
    pub fn rejected(status_code: u16, message: impl Into<String>) -> Self {
        AuthError::Rejected {
            status_code: HttpStatusCode(status_code),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of the rejection, if this was a rejection.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<url::ParseError> for AuthError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        AuthError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        AuthError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        AuthError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
