pub mod auth;
pub mod config;
pub mod mentorship;
pub mod session;

pub use auth::AuthError;
pub use config::ConfigError;
pub use mentorship::MentorshipError;
pub use session::SessionStoreError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Auth(#[from] auth::AuthError),

    #[error(transparent)]
    Mentorship(#[from] mentorship::MentorshipError),

    #[error(transparent)]
    Session(#[from] session::SessionStoreError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
