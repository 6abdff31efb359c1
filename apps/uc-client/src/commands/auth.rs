use crate::error::UcClientError;
use crate::state::{AppState, StateCommand};

use client_core::auth::{AuthClient, Credentials, LoginOutcome};
use client_core::session::TokenStore;

use log::{debug, error, info};

/// Log in and establish the session.
///
/// Submits the credentials, persists the returned tokens through `store`,
/// and mirrors them into app state. The returned [`LoginOutcome`] carries
/// the page-fade transition and the dashboard path; the caller holds for
/// `navigation_delay()` before moving on, matching the fade.
///
/// # Returns
///
/// * `Ok(LoginOutcome)` - Session established
/// * `Err(UcClientError)` - Rejected credentials or transport failure; no
///   session state was written
pub async fn login(
    state: &AppState,
    client: &AuthClient,
    store: &dyn TokenStore,
    username: &str,
    password: &str,
) -> Result<LoginOutcome, UcClientError> {
    debug!("Starting login for '{username}'");

    let credentials = Credentials::new(username, password);

    let outcome = client.login(&credentials, store).await.map_err(|e| {
        error!("Login failed: {}", e);
        UcClientError::core(e)
    })?;

    // Mirror the persisted session into app state.
    let tokens = store
        .load()
        .map_err(|e| {
            error!("Failed to read back session after login: {}", e);
            UcClientError::core(e)
        })?
        .ok_or_else(|| UcClientError::app("login succeeded but no session was stored"))?;

    state
        .update(StateCommand::SetSession(tokens))
        .await
        .map_err(|e| {
            error!("Failed to update state after login: {}", e);
            UcClientError::app(e)
        })?;

    info!(
        "Login complete; navigating to {} after {:?}",
        outcome.navigate_to,
        outcome.navigation_delay()
    );

    Ok(outcome)
}

/// Drop the session: clear durable storage and app state.
pub async fn logout(
    state: &AppState,
    store: &dyn TokenStore,
) -> Result<(), UcClientError> {
    debug!("Logging out");

    store.clear().map_err(|e| {
        error!("Failed to clear stored session: {}", e);
        UcClientError::core(e)
    })?;

    state.update(StateCommand::ClearSession).await.map_err(|e| {
        error!("Failed to clear session state: {}", e);
        UcClientError::app(e)
    })?;

    info!("Logged out");
    Ok(())
}
