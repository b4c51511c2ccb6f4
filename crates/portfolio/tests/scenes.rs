mod common;

use bevy::prelude::*;
use common::{enter, go_to, scroll_app};
use portfolio::ExperienceState;
use portfolio::scenes::{SceneRoot, SceneVisibilityPlugin, Spin};
use pretty_assertions::assert_eq;
use timeline::{SceneKind, Section};

fn spawn_roots(app: &mut App) {
    for kind in SceneKind::iter() {
        app.world_mut()
            .spawn((SceneRoot(kind), Transform::default(), Visibility::Hidden));
    }
}

fn visible_scenes(app: &mut App) -> Vec<SceneKind> {
    let mut roots = app.world_mut().query::<(&SceneRoot, &Visibility)>();
    roots
        .iter(app.world())
        .filter(|(_, visibility)| **visibility == Visibility::Visible)
        .map(|(root, _)| root.0)
        .collect()
}

#[test]
fn exactly_one_scene_per_section() {
    let mut app = scroll_app();
    app.add_plugins(SceneVisibilityPlugin);
    enter(&mut app, ExperienceState::Exploring);
    spawn_roots(&mut app);
    app.update();

    assert_eq!(visible_scenes(&mut app), vec![SceneKind::Hero]);

    for section in Section::iter() {
        go_to(&mut app, section);
        assert_eq!(
            visible_scenes(&mut app),
            vec![section.scene()],
            "while in {section}"
        );
    }
}

#[test]
fn hidden_scenes_stay_still() {
    let mut app = scroll_app();
    app.add_plugins(SceneVisibilityPlugin);
    enter(&mut app, ExperienceState::Exploring);

    let hero = app
        .world_mut()
        .spawn((SceneRoot(SceneKind::Hero), Transform::default(), Visibility::Hidden))
        .id();
    let hero_child = app
        .world_mut()
        .spawn((Transform::default(), Spin::y(1.0), ChildOf(hero)))
        .id();
    let contact = app
        .world_mut()
        .spawn((SceneRoot(SceneKind::Contact), Transform::default(), Visibility::Hidden))
        .id();
    let contact_child = app
        .world_mut()
        .spawn((Transform::default(), Spin::y(1.0), ChildOf(contact)))
        .id();

    for _ in 0..5 {
        std::thread::sleep(std::time::Duration::from_millis(2));
        app.update();
    }

    let rotation = |app: &App, entity: Entity| app.world().get::<Transform>(entity).unwrap().rotation;
    assert_ne!(rotation(&app, hero_child), Quat::IDENTITY);
    assert_eq!(rotation(&app, contact_child), Quat::IDENTITY);
}
