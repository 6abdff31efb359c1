pub mod auth;
pub mod config;
pub mod effects;
pub mod error;
pub mod mentorship;
pub mod session;
pub mod view;

#[cfg(test)]
mod tests;

pub const API_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const API_SERVER_PORT: u16 = 8000;
pub const API_SERVER_BASE_URL: &str =
    const_format::concatcp!("http://", API_SERVER_HOSTNAME, ":", API_SERVER_PORT);
