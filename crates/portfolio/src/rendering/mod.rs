mod lighting;

use bevy::prelude::*;

pub use lighting::{LightLevels, LightingPlugin};

/// Deep-space backdrop behind every scene.
pub const SPACE_COLOR: Color = Color::srgb(0.01, 0.01, 0.04);

/// Main rendering plugin that coordinates all rendering aspects
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SPACE_COLOR))
            .add_plugins(LightingPlugin);
    }
}
