use super::components::{CYAN, label, set_shown};
use crate::scroll::ViewportFlags;
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_UI;
use bevy::prelude::*;

pub(super) struct RotateHintPlugin;

impl Plugin for RotateHintPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_rotate_hint)
            .add_systems(
                Update,
                show_rotate_hint
                    .run_if(resource_exists_and_changed::<ViewportFlags>)
                    .in_set(ExperienceSet::Present),
            )
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<RotateHint>);
    }
}

/// Full-screen "rotate your device" cover for narrow portrait windows.
#[derive(Component)]
pub struct RotateHint;

fn spawn_rotate_hint(mut commands: Commands) {
    commands
        .spawn((
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.92)),
            GlobalZIndex(10),
            RotateHint,
            Name::new("Rotate Hint"),
        ))
        .with_children(|parent| {
            parent.spawn(label("⟳", 48.0, CYAN));
            parent.spawn(label("Please rotate your device", 20.0, Color::WHITE));
            parent.spawn(label("This experience works best in landscape.", 13.0, CYAN));
        });
}

fn show_rotate_hint(flags: Res<ViewportFlags>, mut hints: Query<&mut Node, With<RotateHint>>) {
    for mut node in &mut hints {
        if set_shown(&mut node, flags.rotate_hint) {
            info!(target: LOG_UI, shown = flags.rotate_hint, "rotate hint");
        }
    }
}
