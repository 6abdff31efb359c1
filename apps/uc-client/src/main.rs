use uc_client::commands;
use uc_client::error::UcClientError;
use uc_client::logger::initialize as LoggerInitialize;
use uc_client::state::{AppState, StateCommand};

use client_core::auth::AuthClient;
use client_core::config::ClientConfig;
use client_core::mentorship::MentorClient;
use client_core::session::{FileTokenStore, TokenStore, detect_client_paths};

use std::env;
use std::fs::create_dir_all;

use log::info;
use tokio::time::sleep;

const USERNAME_ENV_VAR: &str = "UC_USERNAME";
const PASSWORD_ENV_VAR: &str = "UC_PASSWORD";

const USAGE: &str = "\
Unity Circles client

Usage:
  uc-client login            Log in with UC_USERNAME / UC_PASSWORD
  uc-client logout           Clear the stored session
  uc-client mentors          Fetch and render mentor recommendations
  uc-client request <id>     Send a mentorship request to mentor <id>
";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), UcClientError> {
    // Development credentials may live in a local .env; missing is fine.
    dotenvy::dotenv().ok();

    let paths = detect_client_paths().map_err(UcClientError::core)?;

    let log_dir = paths.log_dir();
    create_dir_all(&log_dir)
        .map_err(|e| UcClientError::app(format!("Failed to create log directory: {e}")))?;

    LoggerInitialize(&log_dir)?;

    info!("Unity Circles client starting");
    info!("Data directory: {} ({})", paths.data_dir.display(), paths.source);

    let config = ClientConfig::load(&paths.data_dir).map_err(UcClientError::core)?;

    let store = FileTokenStore::at(paths.session_file.clone());
    let auth_client = AuthClient::new(&config.server.api_base_url).map_err(UcClientError::core)?;
    let mentor_client =
        MentorClient::new(&config.server.api_base_url).map_err(UcClientError::core)?;

    let state = AppState::default();

    // Mirror a previously stored session into app state; the commands
    // consult it before touching the network.
    if let Some(tokens) = store.load().map_err(UcClientError::core)? {
        info!("Found stored session");
        state
            .update(StateCommand::SetSession(tokens))
            .await
            .map_err(UcClientError::app)?;
    }

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("login") => {
            let username = env::var(USERNAME_ENV_VAR).map_err(|_| {
                UcClientError::app(format!("{USERNAME_ENV_VAR} not set (see .env)"))
            })?;
            let password = env::var(PASSWORD_ENV_VAR).map_err(|_| {
                UcClientError::app(format!("{PASSWORD_ENV_VAR} not set (see .env)"))
            })?;

            let outcome =
                commands::auth::login(&state, &auth_client, &store, &username, &password).await?;

            // Hold for the page fade before "navigating".
            sleep(outcome.navigation_delay()).await;
            info!("Navigating to {}", outcome.navigate_to);
            println!("Logged in. -> {}", outcome.navigate_to);
        }
        Some("logout") => {
            commands::auth::logout(&state, &store).await?;
            println!("Logged out.");
        }
        Some("mentors") => {
            let html =
                commands::mentors::find_mentors(&state, &mentor_client, &store, &config).await?;
            println!("{html}");
        }
        Some("request") => {
            let mentor_id = args
                .get(2)
                .and_then(|raw| raw.parse::<u64>().ok())
                .ok_or_else(|| UcClientError::app("usage: uc-client request <mentor-id>"))?;

            commands::mentors::send_request(&state, &mentor_client, &store, mentor_id).await?;
            println!("Request sent to mentor {mentor_id}.");
        }
        _ => {
            print!("{USAGE}");
        }
    }

    Ok(())
}
