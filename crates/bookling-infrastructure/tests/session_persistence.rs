//! Session context over the file-backed durable store.

use std::fs;
use std::sync::Arc;

use bookling_core::session::{
    DurableStore, PersistentSessionStore, SESSION_KEY, SessionContext, SessionState, SessionStore,
};
use bookling_core::user::{ProfilePatch, User};
use bookling_infrastructure::{BooklingPaths, FileDurableStore};
use tempfile::TempDir;

fn open_context(paths: &BooklingPaths) -> SessionContext {
    let storage = Arc::new(FileDurableStore::from_paths(paths).unwrap());
    SessionContext::new(Arc::new(PersistentSessionStore::new(storage)))
}

fn paths_in(dir: &TempDir) -> BooklingPaths {
    BooklingPaths::new(Some(dir.path().to_path_buf()))
}

#[test]
fn test_login_survives_restart() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    let user = User::new(1, "ann").with_field("email", "ann@example.com");

    open_context(&paths).login(user.clone()).unwrap();

    // A new process sees the same user.
    let restarted = open_context(&paths);
    assert_eq!(restarted.state(), SessionState::Authenticated(user));
}

#[test]
fn test_logout_survives_restart() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);

    let ctx = open_context(&paths);
    ctx.login(User::new(1, "ann")).unwrap();
    ctx.logout().unwrap();

    assert!(!open_context(&paths).is_authenticated());
}

#[test]
fn test_partial_update_is_lost_on_restart() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);

    let ctx = open_context(&paths);
    ctx.login(User::new(1, "ann")).unwrap();
    ctx.update_user(&ProfilePatch::username("anna")).unwrap();
    assert_eq!(ctx.current_user().unwrap().username, "anna");

    let restarted = open_context(&paths);
    assert_eq!(restarted.current_user(), Some(User::new(1, "ann")));
}

#[test]
fn test_corrupted_record_is_purged_from_file() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    let storage = FileDurableStore::from_paths(&paths).unwrap();
    storage.set_item(SESSION_KEY, "{{{").unwrap();
    storage.set_item("theme", "dark").unwrap();

    assert!(!open_context(&paths).is_authenticated());
    assert_eq!(storage.get_item(SESSION_KEY).unwrap(), None);
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));

    let store = PersistentSessionStore::new(Arc::new(storage));
    assert!(store.load().is_none());
}

#[test]
fn test_record_is_json_under_user_key() {
    let dir = TempDir::new().unwrap();
    let paths = paths_in(&dir);
    open_context(&paths).login(User::new(5, "eve")).unwrap();

    let raw = fs::read_to_string(paths.storage_file().unwrap()).unwrap();
    let table: toml::Table = toml::from_str(&raw).unwrap();
    let record = table["user"].as_str().unwrap();
    let value: serde_json::Value = serde_json::from_str(record).unwrap();
    assert_eq!(value, serde_json::json!({"id": 5, "username": "eve"}));
}
