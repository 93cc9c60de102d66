//! Integration tests for document persistence and shape recovery

use common::document::{Document, Snippet};
use common::store::{DocumentStore, GUARD_FILE_NAME};

fn snippet(id: &str, title: &str) -> Snippet {
    let mut s = Snippet::new(title, "echo hi");
    s.id = id.to_string();
    s
}

fn sample_document() -> Document {
    let mut document = Document::default();
    document.meta.password_hash = Some("v1$00ff$aabb".to_string());
    document.scripts = vec![snippet("a", "first"), snippet("b", "second")];
    document
}

#[test]
fn save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"));

    let document = sample_document();
    store.save(&document).unwrap();
    assert_eq!(store.load(), document);
}

#[test]
fn load_missing_file_yields_canonical_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"));
    assert_eq!(store.load(), Document::default());
}

#[test]
fn load_bare_list_salvages_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"[{"id": "a", "title": "first", "command": "ls"}, 42]"#,
    )
    .unwrap();

    let document = DocumentStore::new(&path).load();
    assert_eq!(document.meta.password_hash, None);
    assert_eq!(document.scripts.len(), 1);
    assert_eq!(document.scripts[0].id, "a");
}

#[test]
fn load_empty_payload_yields_canonical_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "").unwrap();
    assert_eq!(DocumentStore::new(&path).load(), Document::default());
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a/b/c/data.json");
    let store = DocumentStore::new(&path);

    store.save(&sample_document()).unwrap();
    assert!(path.exists());
    assert_eq!(store.load(), sample_document());
}

#[test]
fn later_save_fully_replaces_earlier_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"));

    let mut first = Document::default();
    first.scripts = vec![snippet("a", "first"), snippet("added", "later lost")];
    store.save(&first).unwrap();

    // The second payload omits "added"; it is gone afterwards, by design.
    let mut second = Document::default();
    second.scripts = vec![snippet("a", "first"), snippet("b", "second")];
    store.save(&second).unwrap();

    let loaded = store.load();
    let ids: Vec<&str> = loaded.scripts.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn access_guard_written_once_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json")).with_access_guard(true);

    store.ensure_access_guard();
    let guard_path = dir.path().join(GUARD_FILE_NAME);
    let contents = std::fs::read_to_string(&guard_path).unwrap();
    assert!(contents.contains("data.json"));
    assert!(contents.contains("Deny from all"));

    // An existing guard file is left alone.
    std::fs::write(&guard_path, "edited by operator").unwrap();
    store.ensure_access_guard();
    assert_eq!(
        std::fs::read_to_string(&guard_path).unwrap(),
        "edited by operator"
    );
}

#[test]
fn access_guard_skipped_when_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::new(dir.path().join("data.json"));
    store.ensure_access_guard();
    assert!(!dir.path().join(GUARD_FILE_NAME).exists());
}

#[test]
fn legacy_snake_case_credential_key_survives_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"{"meta": {"password_hash": "v1$aa$bb"}, "scripts": []}"#,
    )
    .unwrap();

    let document = DocumentStore::new(&path).load();
    assert_eq!(document.meta.password_hash.as_deref(), Some("v1$aa$bb"));
}
