use crate::error::session::SessionStoreError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Errors that can occur during mentor discovery and request submission.
#[derive(Debug, ThisError)]
pub enum MentorshipError {
    /// No access token in the session store.
    ///
    /// Checked before any request is sent; we never send a malformed
    /// `Authorization` header and rely on the server to reject it.
    #[error("Not Authenticated: {message} {location}")]
    NotAuthenticated {
        message: String,
        location: ErrorLocation,
    },

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

    #[error("Server Error: HTTP {status_code} - {message} {location}")]
    Server {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

impl MentorshipError {
    #[track_caller]
    pub fn not_authenticated(message: impl Into<String>) -> Self {
        MentorshipError::NotAuthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(status_code: u16, message: impl Into<String>) -> Self {
        MentorshipError::Server {
            status_code: HttpStatusCode(status_code),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether this failure means the stored session is unusable and the
    /// caller should go back through login.
    pub fn needs_login(&self) -> bool {
        match self {
            MentorshipError::NotAuthenticated { .. } => true,
            MentorshipError::Server { status_code, .. } => status_code.is_auth_rejection(),
            _ => false,
        }
    }
}

impl From<url::ParseError> for MentorshipError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        MentorshipError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for MentorshipError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        MentorshipError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for MentorshipError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        MentorshipError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
