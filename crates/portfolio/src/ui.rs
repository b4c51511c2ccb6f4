//! 2D overlays drawn over the tour camera.

mod components;
mod contact_cards;
mod debug_overlay;
mod hud;
mod mission_control;
mod project_cards;
mod quick_links;
mod rotate_hint;

use crate::ExperienceSet;
use bevy::prelude::*;

pub use components::ButtonPalette;
pub use contact_cards::{ContactCards, ContactCardsPlugin};
pub use debug_overlay::{DebugOverlay, debug_readout};
pub use hud::{DotState, Hud, NavDot, percent_label, section_counter};
pub use mission_control::{MissionControl, mission_count, mission_status};
pub use project_cards::{ProjectCards, ProjectCardsPlugin};
pub use quick_links::{QuickLinks, QuickLinksState, QuickLinksToggle};
pub use rotate_hint::RotateHint;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            hud::HudPlugin,
            mission_control::MissionControlPlugin,
            quick_links::QuickLinksPlugin,
            contact_cards::ContactCardsPlugin,
            project_cards::ProjectCardsPlugin,
            debug_overlay::DebugOverlayPlugin,
            rotate_hint::RotateHintPlugin,
        ))
        .add_systems(
            Update,
            components::style_buttons.in_set(ExperienceSet::Input),
        );
    }
}
