mod common;

use common::{SeenSectionChanges, exploring_app, go_to, resize, wheel_lines};
use portfolio::scroll::{DEFAULT_VIEWPORT, ScrollRequest, ScrollState, ViewportFlags};
use portfolio::settings::ScrollSettings;
use pretty_assertions::assert_eq;
use settings::SettingsArc;
use std::sync::Arc;
use timeline::Section;

#[test]
fn wheel_moves_down_the_page() {
    let mut app = exploring_app();
    assert_eq!(app.world().resource::<ScrollState>().progress(), 0.0);

    // Wheel towards the visitor scrolls down.
    wheel_lines(&mut app, -3.0);

    let state = app.world().resource::<ScrollState>();
    assert!((state.tracker().offset_px() - 120.0).abs() < 1e-3);
    assert!(state.progress() > 0.0);
    assert_eq!(state.section(), Section::Hero);
}

#[test]
fn wheel_up_stops_at_the_top() {
    let mut app = exploring_app();
    wheel_lines(&mut app, 10.0);

    assert_eq!(app.world().resource::<ScrollState>().progress(), 0.0);
}

#[test]
fn jumping_reports_the_section_change_once() {
    let mut app = exploring_app();
    go_to(&mut app, Section::Projects);
    app.update();

    assert_eq!(
        app.world().resource::<SeenSectionChanges>().0,
        vec![(Section::Hero, Section::Projects)]
    );
    assert_eq!(
        app.world().resource::<ScrollState>().section(),
        Section::Projects
    );
}

#[test]
fn resizing_keeps_progress_and_section() {
    let mut app = exploring_app();
    go_to(&mut app, Section::Skills);
    let before = app.world().resource::<ScrollState>().progress();

    resize(&mut app, 1920.0, 1080.0);
    resize(&mut app, 1024.0, 600.0);

    let state = app.world().resource::<ScrollState>();
    assert!((state.progress() - before).abs() < 1e-5);
    assert_eq!(state.section(), Section::Skills);
    assert_eq!(app.world().resource::<SeenSectionChanges>().0.len(), 1);
}

#[test]
fn rotate_hint_locks_scrolling() {
    let mut app = exploring_app();
    resize(&mut app, 400.0, 800.0);
    assert!(app.world().resource::<ViewportFlags>().rotate_hint);

    wheel_lines(&mut app, -5.0);
    go_to(&mut app, Section::Contact);
    assert_eq!(app.world().resource::<ScrollState>().progress(), 0.0);

    resize(&mut app, 800.0, 400.0);
    assert!(!app.world().resource::<ViewportFlags>().rotate_hint);

    go_to(&mut app, Section::Contact);
    assert_eq!(
        app.world().resource::<ScrollState>().section(),
        Section::Contact
    );
}

#[test]
fn reloaded_page_length_applies_while_exploring() {
    let mut app = exploring_app();
    go_to(&mut app, Section::Skills);
    let before = app.world().resource::<ScrollState>().progress();

    app.world_mut().insert_resource(SettingsArc(Arc::new(ScrollSettings {
        scroll_pages: 14.0,
        ..ScrollSettings::default()
    })));
    app.update();

    let state = app.world().resource::<ScrollState>();
    assert_eq!(state.progress(), before);
    assert_eq!(state.tracker().scroll_pages(), 14.0);

    // Seven viewports is now half the page.
    app.world_mut()
        .write_message(ScrollRequest::ToProgress(0.0));
    app.update();
    app.world_mut()
        .write_message(ScrollRequest::Pixels(7.0 * DEFAULT_VIEWPORT.y));
    app.update();
    let progress = app.world().resource::<ScrollState>().progress();
    assert!((progress - 0.5).abs() < 1e-5, "progress was {progress}");
}
