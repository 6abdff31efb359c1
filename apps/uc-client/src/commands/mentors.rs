use crate::error::UcClientError;
use crate::state::{AppState, StateCommand};

use client_core::config::ClientConfig;
use client_core::effects::{reveal_schedule, reveal_schedule_reduced};
use client_core::error::MentorshipError;
use client_core::mentorship::MentorClient;
use client_core::session::TokenStore;
use client_core::view::MentorListView;

use log::{debug, error, info, warn};

/// Fetch mentor recommendations and render the `#mentor-list` contents.
///
/// Requires an established session in app state. Each card carries its slot
/// in the staggered reveal unless the user asked for reduced motion. A
/// rejected token clears the session state so the next operation goes back
/// through login.
///
/// # Returns
///
/// * `Ok(String)` - Rendered card fragments, in recommendation order
/// * `Err(UcClientError)` - Not authenticated, or the fetch failed
pub async fn find_mentors(
    state: &AppState,
    client: &MentorClient,
    store: &dyn TokenStore,
    config: &ClientConfig,
) -> Result<String, UcClientError> {
    debug!("Finding mentors");
    require_session(state).await?;

    let mentors = match client.find_mentors(store).await {
        Ok(mentors) => mentors,
        Err(e) => {
            error!("Mentor discovery failed: {}", e);
            return Err(map_mentorship_error(state, e).await);
        }
    };

    info!("Rendering {} mentor cards", mentors.len());

    let schedule = if config.ui.reduce_motion {
        reveal_schedule_reduced(mentors.len())
    } else {
        reveal_schedule(mentors.len())
    };

    let mut view = MentorListView::new();
    view.display_with_reveal(&mentors, &schedule);

    Ok(view.to_html())
}

/// Send a mentorship request to one mentor.
pub async fn send_request(
    state: &AppState,
    client: &MentorClient,
    store: &dyn TokenStore,
    mentor_id: u64,
) -> Result<(), UcClientError> {
    debug!("Sending mentorship request to mentor {mentor_id}");
    require_session(state).await?;

    if let Err(e) = client.send_request(store, mentor_id).await {
        error!("Mentorship request failed: {}", e);
        return Err(map_mentorship_error(state, e).await);
    }

    info!("Mentorship request to mentor {mentor_id} accepted");
    Ok(())
}

/// Pre-flight: refuse mentor operations when no session is established.
async fn require_session(state: &AppState) -> Result<(), UcClientError> {
    if state.is_authenticated().await {
        return Ok(());
    }

    warn!("No session established; refusing mentor operation");
    Err(UcClientError::not_authenticated(
        "no session - run `uc-client login` first",
    ))
}

/// Translate a mentorship failure into an app error, clearing the in-memory
/// session before returning when the token is unusable.
async fn map_mentorship_error(state: &AppState, error: MentorshipError) -> UcClientError {
    if error.needs_login() {
        warn!("Session unusable; clearing state");
        if let Err(e) = state.update(StateCommand::ClearSession).await {
            error!("Failed to clear session state: {e}");
        }
        return UcClientError::not_authenticated(error.to_string());
    }

    UcClientError::core(error)
}
