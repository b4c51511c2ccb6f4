mod common;

use bevy::prelude::*;
use common::{enter, exploring_app, go_to};
use portfolio::{
    ExperienceState,
    input::toggle_scroll_debug,
    scenes::{SceneRoot, SceneVisibilityPlugin},
    scroll::{ScrollState, ViewportFlags},
    settings::{DebugSettings, register_sections},
};
use pretty_assertions::assert_eq;
use settings::{AppSettingsExt, SettingsArc, SettingsStore};
use std::{fs, sync::Arc};
use timeline::{SceneKind, Section};

#[test]
fn leaving_exploring_tears_everything_down() {
    let mut app = common::scroll_app();
    app.add_plugins(SceneVisibilityPlugin);
    enter(&mut app, ExperienceState::Exploring);

    let root = app
        .world_mut()
        .spawn((SceneRoot(SceneKind::Hero), Transform::default(), Visibility::Visible))
        .id();
    let child = app.world_mut().spawn(ChildOf(root)).id();
    go_to(&mut app, Section::About);

    enter(&mut app, ExperienceState::Loading);

    assert!(!app.world().contains_resource::<ScrollState>());
    assert!(!app.world().contains_resource::<ViewportFlags>());
    assert!(app.world().get_entity(root).is_err());
    assert!(app.world().get_entity(child).is_err());
}

#[test]
fn exploring_again_starts_from_the_top() {
    let mut app = exploring_app();
    go_to(&mut app, Section::Education);

    enter(&mut app, ExperienceState::Loading);
    enter(&mut app, ExperienceState::Exploring);

    let state = app.world().resource::<ScrollState>();
    assert_eq!(state.progress(), 0.0);
    assert_eq!(state.section(), Section::Hero);
}

#[test]
fn scroll_debug_toggles_without_a_store() {
    let mut world = World::new();
    world.insert_resource(SettingsArc(Arc::new(DebugSettings {
        scroll_overlay: false,
    })));

    toggle_scroll_debug(&mut world);
    assert!(world.resource::<SettingsArc<DebugSettings>>().scroll_overlay);

    toggle_scroll_debug(&mut world);
    assert!(!world.resource::<SettingsArc<DebugSettings>>().scroll_overlay);
}

#[test]
fn scroll_debug_toggle_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    let store = SettingsStore::builder()
        .with_settings_file(&path)
        .build()
        .unwrap();

    let mut app = App::new();
    app.insert_settings_store(store);
    register_sections(&mut app);
    let before = app
        .world()
        .resource::<SettingsArc<DebugSettings>>()
        .scroll_overlay;

    toggle_scroll_debug(app.world_mut());

    assert_eq!(
        app.world()
            .resource::<SettingsArc<DebugSettings>>()
            .scroll_overlay,
        !before
    );
    assert!(fs::read_to_string(&path).unwrap().contains("scroll_overlay"));
}
