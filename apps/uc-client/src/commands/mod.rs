//! The application's operation layer.
//!
//! Each function here is the analog of one of the original page's event
//! handlers: it wires a client-core operation to app state and logging, and
//! returns what the caller needs to update the screen.

pub mod auth;
pub mod mentors;
