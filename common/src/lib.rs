//! Shared primitives for the Unity Circles client.
//!
//! This crate contains the small building blocks used by every layer:
//! error locations, HTTP status categorization, and secret handling.
//! Nothing here knows about mentorship, sessions, or the UI.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **client-core**: Domain logic operating on them
//! - **uc-client**: Application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
