//! Integration tests for the startup sequence and the single-instance guard.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

use std::fs;

use ringclock::{
    RingclockError,
    instance::{InstanceError, InstanceGuard},
    startup::Startup,
};
use tempfile::TempDir;

#[test]
fn prepares_with_settings_and_port() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(&path, r#"{"port": 0, "isRainbow": true}"#).unwrap();

    let startup = Startup::prepare_at(&path).unwrap();

    assert!(startup.settings.is_rainbow);
    assert_eq!(startup.settings_path, path);
    assert!(startup.instance.local_addr().unwrap().ip().is_loopback());
}

#[test]
fn second_instance_is_refused() {
    let running = InstanceGuard::acquire(0).unwrap();
    let port = running.local_addr().unwrap().port();

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(&path, format!(r#"{{"port": {port}}}"#)).unwrap();

    let result = Startup::prepare_at(&path);

    match result {
        Err(RingclockError::Instance(InstanceError::AlreadyRunning { port: refused, .. })) => {
            assert_eq!(refused, port);
        }
        other => panic!("expected AlreadyRunning, got {other:?}"),
    }
}

#[test]
fn malformed_settings_abort_startup() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(&path, "[[[").unwrap();

    assert!(matches!(
        Startup::prepare_at(&path),
        Err(RingclockError::Settings(_))
    ));
}
