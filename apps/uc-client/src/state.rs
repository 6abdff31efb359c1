use client_core::session::SessionTokens;

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{Mutex, RwLock, mpsc, oneshot};

/// Commands that mutate application state.
///
/// All state mutations go through the state actor via these commands, so
/// they are processed in order even when several flows finish at once.
#[derive(Debug, Clone)]
pub enum StateCommand {
    /// Set the current session (after a successful login)
    SetSession(SessionTokens),

    /// Clear the current session (logout, or a rejected token)
    ClearSession,
}

/// A command plus the completion signal for its sender.
struct StateRequest {
    command: StateCommand,
    done: oneshot::Sender<()>,
}

/// Application state manager.
///
/// Uses an actor pattern to serialize all session mutations. Reads go
/// through an `Arc<RwLock<T>>` and never block on mutations in flight.
/// `update` resolves only once the actor has applied the command, so a
/// read issued after an awaited update sees its effect.
#[derive(Clone)]
pub struct AppState {
    /// Channel to send state mutation commands to the actor
    command_tx: Arc<Mutex<Option<mpsc::Sender<StateRequest>>>>,

    /// Shared read-only access to the current session
    session: Arc<RwLock<Option<SessionTokens>>>,

    /// Track if actor has been initialized
    actor_init: Arc<Mutex<bool>>,
}

impl AppState {
    /// Create a new state manager.
    ///
    /// The actor is lazily spawned on first use within an async context.
    pub fn new() -> Self {
        Self {
            command_tx: Arc::new(Mutex::new(None)),
            session: Arc::new(RwLock::new(None)),
            actor_init: Arc::new(Mutex::new(false)),
        }
    }

    /// Send a state update command and wait until it has been applied.
    ///
    /// Returns an error if the state actor has died (should never happen).
    pub async fn update(&self, cmd: StateCommand) -> Result<(), String> {
        self.ensure_actor().await;

        let (done_tx, done_rx) = oneshot::channel();
        let request = StateRequest {
            command: cmd,
            done: done_tx,
        };

        {
            let tx_guard = self.command_tx.lock().await;
            let tx = tx_guard.as_ref().ok_or("Actor not initialized")?;
            tx.send(request)
                .await
                .map_err(|e| format!("State actor died: {}", e))?;
        }

        done_rx
            .await
            .map_err(|e| format!("State actor dropped the command: {}", e))
    }

    /// Get the current session, if one is established.
    pub async fn get_session(&self) -> Option<SessionTokens> {
        self.session.read().await.clone()
    }

    /// Whether a session is currently established.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Ensure actor is spawned (called lazily from async context)
    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(100);
            let session_clone = Arc::clone(&self.session);

            // Store tx BEFORE spawning to avoid race
            let mut tx_guard = self.command_tx.lock().await;
            *tx_guard = Some(tx);
            drop(tx_guard);

            tokio::spawn(state_actor(rx, session_clone));
            *init_guard = true;
            info!("State actor spawned");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// The state actor task.
///
/// Owns the mutable session slot and processes commands sequentially,
/// acknowledging each one after it has been applied. Token values never
/// reach the log; only their lengths do.
async fn state_actor(
    mut command_rx: mpsc::Receiver<StateRequest>,
    session: Arc<RwLock<Option<SessionTokens>>>,
) {
    info!("State actor started");

    while let Some(request) = command_rx.recv().await {
        match request.command {
            StateCommand::SetSession(new_session) => {
                let mut session_write = session.write().await;

                if session_write.is_some() {
                    warn!("Replacing existing session with a new login");
                } else {
                    info!(
                        "Setting session state (access token: {} chars)",
                        new_session.access.len()
                    );
                }

                *session_write = Some(new_session);
            }
            StateCommand::ClearSession => {
                let mut session_write = session.write().await;

                if session_write.is_some() {
                    info!("Clearing session state");
                } else {
                    warn!("Clear session requested but no session was set");
                }

                *session_write = None;
            }
        }

        // The sender may have gone away; applying the command still counts.
        let _ = request.done.send(());
    }

    warn!("State actor stopped - this should not happen during normal operation");
}
