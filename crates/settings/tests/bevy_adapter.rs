#![cfg(feature = "bevy")]

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use settings::{AppSettingsExt, Settings, SettingsArc, SettingsStore, reload_settings, update_settings};
use std::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct Debugging {
    overlay: bool,
}

impl Settings for Debugging {
    const SECTION: &'static str = "debug";
}

#[test]
fn sections_become_resources_and_follow_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();

    let mut app = App::new();
    app.insert_settings_store(store)
        .register_settings_section::<Debugging>();
    assert!(!app.world().resource::<SettingsArc<Debugging>>().overlay);

    fs::write(&path, r#"{ "debug": { "overlay": true } }"#).unwrap();
    reload_settings(app.world_mut());
    assert!(app.world().resource::<SettingsArc<Debugging>>().overlay);

    update_settings::<Debugging, _>(app.world_mut(), |d| d.overlay = false);
    assert!(!app.world().resource::<SettingsArc<Debugging>>().overlay);
    assert!(fs::read_to_string(&path).unwrap().contains('{'));
}

#[test]
fn missing_store_seeds_defaults() {
    let mut app = App::new();
    app.register_settings_section::<Debugging>();
    assert_eq!(
        *app.world().resource::<SettingsArc<Debugging>>().0,
        Debugging::default()
    );
}
