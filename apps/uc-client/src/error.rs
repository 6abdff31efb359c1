use client_core::error::CoreError;

use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the application layer.
///
/// Rendered to strings at the process boundary, but structured with
/// location tracking internally.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum UcClientError {
    /// Error from this app (logging, paths, usage).
    #[error("Client Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error from a client-core operation (login, discovery, storage).
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// An operation needed a session and none is stored (or the stored one
    /// was rejected).
    #[error("Not Authenticated: {message} {location}")]
    NotAuthenticated {
        message: String,
        location: ErrorLocation,
    },
}

impl UcClientError {
    #[track_caller]
    pub fn app(message: impl Into<String>) -> Self {
        UcClientError::App {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn core(error: impl Into<CoreError>) -> Self {
        UcClientError::Core {
            message: error.into().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated(message: impl Into<String>) -> Self {
        UcClientError::NotAuthenticated {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
