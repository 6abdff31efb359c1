//! Login against the platform auth endpoint.

use crate::API_SERVER_BASE_URL;
use crate::effects::transition::{self, Transition};
use crate::error::auth::AuthError;
use crate::session::{SessionTokens, TokenStore};

use common::RedactedSecret;

use std::fmt;
use std::time::Duration;

use log::{error, info};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const AUTH_LOGIN_ENDPOINT: &str = "api/auth/login/";

/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Login form input. Consumed once per attempt.
pub struct Credentials {
    pub username: String,
    pub password: RedactedSecret,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<RedactedSecret>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password)
            .finish()
    }
}

/// Success body: `{"tokens": {"access": ..., "refresh": ...}}`.
#[derive(Deserialize)]
struct LoginResponse {
    tokens: TokenPair,
}

#[derive(Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

/// Failure body: `{"error": ...}`.
#[derive(Deserialize)]
struct LoginFailure {
    error: String,
}

/// What the caller does after a successful login: fade the page out, wait
/// for the transition to finish, then navigate.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub navigate_to: String,
    pub transition: Transition,
}

impl LoginOutcome {
    /// How long to hold before navigating; matches the fade duration.
    pub fn navigation_delay(&self) -> Duration {
        self.transition.duration
    }
}

#[derive(Clone)]
pub struct AuthClient {
    base_url: Url,
    client: Client,
}

impl AuthClient {
    pub fn new(base_url_str: &str) -> Result<Self, AuthError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Client against the fixed local API server.
    pub fn local() -> Result<Self, AuthError> {
        Self::new(API_SERVER_BASE_URL)
    }

    /// Submit credentials and persist the returned token pair.
    ///
    /// Exactly one attempt; no retry and no refresh logic. On success the
    /// tokens are saved to `store` and the returned [`LoginOutcome`] tells
    /// the caller where to navigate after the page fade. On rejection
    /// nothing is written.
    pub async fn login(
        &self,
        credentials: &Credentials,
        store: &dyn TokenStore,
    ) -> Result<LoginOutcome, AuthError> {
        let url = self.base_url.join(AUTH_LOGIN_ENDPOINT)?;

        let body = serde_json::json!({
            "username": credentials.username,
            "password": credentials.password.expose(),
        });

        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<LoginFailure>(&raw)
                .map(|failure| failure.error)
                .unwrap_or(raw);

            error!("Login failed for '{}': HTTP {status} - {message}", credentials.username);
            return Err(AuthError::rejected(status.as_u16(), message));
        }

        let parsed: LoginResponse = response.json().await?;
        let tokens = SessionTokens::new(parsed.tokens.access, parsed.tokens.refresh);
        store.save(&tokens)?;

        info!("Login successful for '{}'", credentials.username);

        Ok(LoginOutcome {
            navigate_to: DASHBOARD_PATH.to_string(),
            transition: transition::PAGE_FADE,
        })
    }
}
