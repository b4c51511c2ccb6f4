//! Scroll readout for tuning the page length and scrub.

use super::components::{PANEL_BACKGROUND, set_shown, set_text};
use crate::scroll::ScrollState;
use crate::settings::{DebugSettings, init_settings};
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use bevy::prelude::*;
use settings::SettingsArc;

pub(super) struct DebugOverlayPlugin;

impl Plugin for DebugOverlayPlugin {
    fn build(&self, app: &mut App) {
        init_settings::<DebugSettings>(app);

        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_debug_overlay)
            .add_systems(Update, update_debug_overlay.in_set(ExperienceSet::Present))
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<DebugOverlay>);
    }
}

#[derive(Component)]
pub struct DebugOverlay;

pub fn debug_readout(state: &ScrollState) -> String {
    let tracker = state.tracker();
    format!(
        "scrollY: {:.0}px\nviewport: {:.0}px\ndocument: {:.0}px\nprogress: {:.3}\ndisplay: {:.3}\nsection: {}",
        tracker.offset_px(),
        tracker.viewport_height_px(),
        tracker.document_height_px(),
        state.progress(),
        state.display_progress(),
        state.section(),
    )
}

fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.0, 1.0, 0.0)),
        Node {
            display: Display::None,
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            right: Val::Px(10.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(PANEL_BACKGROUND),
        DebugOverlay,
        Name::new("Scroll Debug"),
    ));
}

fn update_debug_overlay(
    state: Res<ScrollState>,
    debug: Res<SettingsArc<DebugSettings>>,
    mut overlays: Query<(&mut Node, &mut Text), With<DebugOverlay>>,
) {
    for (mut node, mut text) in &mut overlays {
        set_shown(&mut node, debug.scroll_overlay);
        if debug.scroll_overlay {
            set_text(&mut text, &debug_readout(&state));
        }
    }
}
