//! Integration tests for the SettingsStore:
//! - defaults for keys the delta file doesn't mention
//! - only changed (delta) fields are persisted
//! - reloading after an external edit

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use settings::{Settings, SettingsError, SettingsStore};
use tempfile::TempDir;

fn settings_path(dir: &TempDir) -> PathBuf {
    dir.path().join("settings").join("settings.ron")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Smoothing {
    enabled: bool,
    lag: f32,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            enabled: true,
            lag: 1.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Scroll {
    pages: f32,
    line_height: f32,
    smoothing: Smoothing,
}

impl Default for Scroll {
    fn default() -> Self {
        Self {
            pages: 7.0,
            line_height: 40.0,
            smoothing: Smoothing::default(),
        }
    }
}

impl Settings for Scroll {
    const SECTION: &'static str = "scroll";
}

fn keys(map: &ron::Map) -> HashSet<String> {
    map.iter()
        .filter_map(|(key, _)| match key {
            ron::Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

fn section_delta(path: &PathBuf, section: &str) -> ron::Map {
    let content = fs::read_to_string(path).expect("read delta file");
    let root: HashMap<String, ron::Value> = ron::from_str(&content).expect("parse delta");
    match root.get(section) {
        Some(ron::Value::Map(map)) => map.clone(),
        other => panic!("expected a map for {section}, got {other:?}"),
    }
}

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(&dir);

    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .expect("build store");
    store.register::<Scroll>().expect("register");

    assert_eq!(*store.get::<Scroll>().unwrap(), Scroll::default());
    assert!(!path.exists(), "registering must not write the file");
}

#[test]
fn partial_delta_keeps_defaults_for_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(&dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{ "scroll": { "pages": 9.0, "smoothing": { "lag": 0.5 }, "unknown": true } }"#,
    )
    .unwrap();

    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();
    store.register::<Scroll>().unwrap();

    let scroll = store.get::<Scroll>().unwrap();
    assert_eq!(scroll.pages, 9.0);
    assert_eq!(scroll.line_height, 40.0);
    assert_eq!(scroll.smoothing.lag, 0.5);
    assert!(scroll.smoothing.enabled);
}

#[test]
fn wrongly_typed_delta_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(&dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{ "scroll": { "pages": "lots" } }"#).unwrap();

    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();
    store.register::<Scroll>().unwrap();

    assert_eq!(*store.get::<Scroll>().unwrap(), Scroll::default());
}

#[test]
fn update_persists_only_changed_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(&dir);
    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();
    store.register::<Scroll>().unwrap();

    store
        .update::<Scroll, _>(|s| s.smoothing.enabled = false)
        .expect("update");

    let delta = section_delta(&path, "scroll");
    assert_eq!(keys(&delta), HashSet::from(["smoothing".to_string()]));
    let nested = delta
        .iter()
        .find(|(k, _)| matches!(k, ron::Value::String(s) if s == "smoothing"))
        .map(|(_, v)| v.clone());
    let Some(ron::Value::Map(nested)) = nested else {
        panic!("smoothing delta should be a map");
    };
    assert_eq!(keys(&nested), HashSet::from(["enabled".to_string()]));

    // reverting to the default removes the section from the file
    store
        .update::<Scroll, _>(|s| s.smoothing.enabled = true)
        .unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let root: HashMap<String, ron::Value> = ron::from_str(&content).unwrap();
    assert!(root.is_empty(), "{content}");
}

#[test]
fn reload_applies_external_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(&dir);
    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();
    store.register::<Scroll>().unwrap();
    store.update::<Scroll, _>(|s| s.pages = 3.0).unwrap();

    fs::write(&path, r#"{ "scroll": { "line_height": 20.0 } }"#).unwrap();
    store.reload().expect("reload");

    let scroll = store.get::<Scroll>().unwrap();
    assert_eq!(scroll.pages, 7.0, "pages is no longer in the delta");
    assert_eq!(scroll.line_height, 20.0);
}

#[test]
fn reload_keeps_values_when_file_is_broken() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(&dir);
    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();
    store.register::<Scroll>().unwrap();
    store.update::<Scroll, _>(|s| s.pages = 3.0).unwrap();

    fs::write(&path, "{ this is not ron").unwrap();
    assert!(matches!(store.reload(), Err(SettingsError::Parse { .. })));
    assert_eq!(store.get::<Scroll>().unwrap().pages, 3.0);
}

#[test]
fn reload_with_wrongly_typed_delta_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_path(&dir);
    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();
    store.register::<Scroll>().unwrap();
    store.update::<Scroll, _>(|s| s.pages = 3.0).unwrap();

    fs::write(&path, r#"{ "scroll": { "pages": "lots" } }"#).unwrap();
    store.reload().expect("reload");

    assert_eq!(*store.get::<Scroll>().unwrap(), Scroll::default());

    // the section stays writable
    store.update::<Scroll, _>(|s| s.line_height = 20.0).unwrap();
    assert_eq!(store.get::<Scroll>().unwrap().line_height, 20.0);
    assert_eq!(keys(&section_delta(&path, "scroll")), HashSet::from(["line_height".to_string()]));
}

#[test]
fn registry_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::builder()
        .with_settings_file(settings_path(&dir))
        .build()
        .unwrap();

    assert!(matches!(
        store.get::<Scroll>(),
        Err(SettingsError::NotRegistered("scroll"))
    ));
    assert!(store.try_get::<Scroll>().unwrap().is_none());

    store.register::<Scroll>().unwrap();
    assert!(matches!(
        store.register::<Scroll>(),
        Err(SettingsError::AlreadyRegistered("scroll"))
    ));
    assert!(matches!(
        SettingsStore::builder().build(),
        Err(SettingsError::MissingFile)
    ));
}
