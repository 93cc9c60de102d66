//! Integration tests for credential bootstrap and verification

use common::auth::{AuthError, AuthGate};
use common::document::Snippet;
use common::store::DocumentStore;

fn gate_in(dir: &tempfile::TempDir) -> AuthGate {
    AuthGate::new(DocumentStore::new(dir.path().join("data.json")))
}

#[test]
fn bootstrap_then_verify() {
    let dir = tempfile::tempdir().unwrap();
    let gate = gate_in(&dir);

    gate.bootstrap("correct horse").unwrap();
    gate.verify("correct horse").unwrap();
    assert!(matches!(
        gate.verify("battery staple"),
        Err(AuthError::Mismatch)
    ));
}

#[test]
fn verify_before_bootstrap_reports_no_credential() {
    let dir = tempfile::tempdir().unwrap();
    let gate = gate_in(&dir);
    assert!(matches!(gate.verify("anything"), Err(AuthError::NoCredential)));
}

#[test]
fn bootstrap_is_single_use() {
    let dir = tempfile::tempdir().unwrap();
    let gate = gate_in(&dir);

    gate.bootstrap("first").unwrap();
    assert!(matches!(
        gate.bootstrap("first"),
        Err(AuthError::AlreadyBootstrapped)
    ));
    assert!(matches!(
        gate.bootstrap("second"),
        Err(AuthError::AlreadyBootstrapped)
    ));
    // The original credential still verifies.
    gate.verify("first").unwrap();
}

#[test]
fn empty_password_rejected_before_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let gate = gate_in(&dir);
    assert!(matches!(gate.bootstrap(""), Err(AuthError::EmptyCredential)));
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn bootstrap_preserves_existing_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"));

    let mut document = store.load();
    document.scripts.push(Snippet::new("pre-existing", "ls"));
    store.save(&document).unwrap();

    let gate = AuthGate::new(store.clone());
    gate.bootstrap("pw").unwrap();

    let after = store.load();
    assert_eq!(after.scripts.len(), 1);
    assert_eq!(after.scripts[0].title, "pre-existing");
    assert!(!AuthGate::needs_setup(&after));
}

#[test]
fn needs_setup_tracks_credential_presence() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"));
    let gate = AuthGate::new(store.clone());

    assert!(AuthGate::needs_setup(&store.load()));
    gate.bootstrap("pw").unwrap();
    assert!(!AuthGate::needs_setup(&store.load()));
}

#[test]
fn empty_string_hash_counts_as_needing_setup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"meta": {"passwordHash": ""}, "scripts": []}"#).unwrap();

    let store = DocumentStore::new(&path);
    assert!(AuthGate::needs_setup(&store.load()));
    // And bootstrap is still permitted over it.
    AuthGate::new(store).bootstrap("pw").unwrap();
}
