//! Scroll-driven 3D portfolio.
//!
//! The visitor scrolls a virtual page; the scroll fraction picks the active
//! section, drives the camera along a keyframed path and toggles which scene
//! and overlays are shown. See the `timeline` crate for the math.

pub mod cameras;
pub mod content;
pub mod input;
pub mod links;
pub mod loading;
pub mod rendering;
pub mod scenes;
pub mod scroll;
pub mod settings;
pub mod ui;
pub mod utils;

use bevy::prelude::*;

/// Where we are in the application flow.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExperienceState {
    #[default]
    Loading,
    Exploring,
}

/// Frame order while exploring: read input, move the scroll position, then
/// update camera, lights, scenes and overlays.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExperienceSet {
    Input,
    Scroll,
    Present,
}

/// State and system ordering shared by every feature plugin.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ExperienceState>().configure_sets(
            Update,
            (
                ExperienceSet::Input,
                ExperienceSet::Scroll,
                ExperienceSet::Present,
            )
                .chain()
                .run_if(in_state(ExperienceState::Exploring)),
        );
    }
}

/// Everything except the window and engine plugins.
pub struct PortfolioPlugin;

impl Plugin for PortfolioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CorePlugin,
            loading::LoadingPlugin,
            input::InputPlugin,
            scroll::ScrollPlugin,
            links::LinksPlugin,
            cameras::CameraPlugin,
            rendering::RenderingPlugin,
            scenes::ScenePlugin,
            ui::UIPlugin,
        ));
    }
}
