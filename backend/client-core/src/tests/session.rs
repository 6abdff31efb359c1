// Unit tests for the token store and data-path detection

use crate::session::paths::{DATA_DIR_ENV_VAR, PathSource, detect_client_paths};
use crate::session::{FileTokenStore, MemoryTokenStore, SessionTokens, TokenStore};

use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: Verifies a saved session round-trips through the file store
/// under the storage keys the rest of the platform expects.
///
/// **WHY THIS MATTERS**: The session file replaces the browser's
/// localStorage; `access_token` / `refresh_token` are its contract with the
/// other platform clients.
///
/// **BUG THIS CATCHES**: Renamed JSON fields, or a save path that writes the
/// temp file but never renames it into place.
#[test]
fn given_saved_tokens_when_loaded_then_round_trips_under_storage_keys() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::at(dir.path().join("session.json"));

    store
        .save(&SessionTokens::new("A", "R"))
        .expect("save succeeds");

    let raw = std::fs::read_to_string(store.session_file()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["access_token"], "A");
    assert_eq!(json["refresh_token"], "R");

    let loaded = store.load().expect("load succeeds").expect("session exists");
    assert_eq!(loaded.access.expose(), "A");
    assert_eq!(loaded.refresh.expose(), "R");
}

/// **VALUE**: Verifies loading with no session file is `Ok(None)`, not an
/// error.
///
/// **WHY THIS MATTERS**: "Not logged in yet" is a normal state. The mentor
/// client turns `None` into its own NotAuthenticated error; the store must
/// not pre-empt that with an I/O error.
#[test]
fn given_no_session_file_when_loaded_then_returns_none() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::at(dir.path().join("session.json"));

    assert!(store.load().expect("load succeeds").is_none());
}

/// **VALUE**: Verifies clear removes the session and is safe to repeat.
#[test]
fn given_saved_session_when_cleared_then_file_removed_and_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::at(dir.path().join("session.json"));
    store.save(&SessionTokens::new("A", "R")).unwrap();

    store.clear().expect("clear succeeds");
    assert!(store.load().unwrap().is_none());

    store.clear().expect("second clear also succeeds");
}

/// **VALUE**: Verifies a corrupt session file is a typed parse error rather
/// than a panic or a silently empty session.
#[test]
fn given_corrupt_session_file_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();
    let store = FileTokenStore::at(&path);

    assert!(store.load().is_err());
}

/// **VALUE**: Verifies the session file is written owner-only on Unix.
///
/// **WHY THIS MATTERS**: The file holds live bearer tokens.
#[cfg(unix)]
#[test]
fn given_saved_session_then_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::at(dir.path().join("session.json"));
    store.save(&SessionTokens::new("A", "R")).unwrap();

    let mode = std::fs::metadata(store.session_file())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

/// **VALUE**: Verifies the in-memory store honors the same save/load/clear
/// contract as the file store.
#[test]
fn given_memory_store_when_saved_and_cleared_then_contract_holds() {
    let store = MemoryTokenStore::new();
    assert!(store.load().unwrap().is_none());

    store.save(&SessionTokens::new("A", "R")).unwrap();
    assert_eq!(store.load().unwrap().unwrap().access.expose(), "A");

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

/// **VALUE**: Verifies the environment override wins path detection.
///
/// **WHY THIS MATTERS**: Tests and packaged installs point the client at an
/// explicit data directory; detection must honor it before any platform
/// default.
#[test]
#[serial]
fn given_env_override_when_paths_detected_then_env_var_wins() {
    let dir = TempDir::new().unwrap();

    // SAFETY: no other thread touches the environment (serialized test).
    unsafe { std::env::set_var(DATA_DIR_ENV_VAR, dir.path()) };
    let paths = detect_client_paths().expect("detection succeeds");
    unsafe { std::env::remove_var(DATA_DIR_ENV_VAR) };

    assert_eq!(paths.source, PathSource::EnvVar);
    assert_eq!(paths.data_dir, dir.path());
    assert_eq!(paths.session_file, dir.path().join("session.json"));
}
