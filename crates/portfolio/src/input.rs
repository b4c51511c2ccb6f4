//! Keyboard input while exploring.
//!
//! Bindings live in one `bevy_enhanced_input` context that exists only in
//! [`ExperienceState::Exploring`]; the wheel is read directly in
//! [`crate::scroll`].

use crate::scroll::ScrollRequest;
use crate::settings::DebugSettings;
use crate::utils::cleanup;
use crate::ExperienceState;
use app::LOG_MAIN;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
use settings::{SettingsArc, SettingsStoreRef, reload_settings, update_settings};
use std::sync::Arc;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_input_context::<ExploreInput>()
            .add_systems(OnEnter(ExperienceState::Exploring), spawn_explore_input)
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<ExploreInput>)
            .add_observer(handle_line_down)
            .add_observer(handle_line_up)
            .add_observer(handle_page_down)
            .add_observer(handle_page_up)
            .add_observer(handle_jump_start)
            .add_observer(handle_jump_end)
            .add_observer(handle_toggle_scroll_debug)
            .add_observer(handle_reload_settings);
    }
}

#[derive(Component)]
struct ExploreInput;

#[derive(Debug, InputAction)]
#[action_output(bool)]
struct LineDown;

#[derive(Debug, InputAction)]
#[action_output(bool)]
struct LineUp;

#[derive(Debug, InputAction)]
#[action_output(bool)]
struct PageDown;

#[derive(Debug, InputAction)]
#[action_output(bool)]
struct PageUp;

#[derive(Debug, InputAction)]
#[action_output(bool)]
struct JumpStart;

#[derive(Debug, InputAction)]
#[action_output(bool)]
struct JumpEnd;

/// Show or hide the scroll debug readout; persisted.
#[derive(Debug, InputAction)]
#[action_output(bool)]
struct ToggleScrollDebug;

/// Re-read the settings file.
#[derive(Debug, InputAction)]
#[action_output(bool)]
struct ReloadSettings;

fn spawn_explore_input(mut commands: Commands) {
    commands.spawn((
        ExploreInput,
        Name::new("Explore Input"),
        actions!(ExploreInput[
            (Action::<LineDown>::new(), bindings![KeyCode::ArrowDown, KeyCode::KeyS]),
            (Action::<LineUp>::new(), bindings![KeyCode::ArrowUp, KeyCode::KeyW]),
            (Action::<PageDown>::new(), bindings![KeyCode::PageDown, KeyCode::Space]),
            (Action::<PageUp>::new(), bindings![KeyCode::PageUp]),
            (Action::<JumpStart>::new(), bindings![KeyCode::Home]),
            (Action::<JumpEnd>::new(), bindings![KeyCode::End]),
            (Action::<ToggleScrollDebug>::new(), bindings![KeyCode::F3]),
            (Action::<ReloadSettings>::new(), bindings![KeyCode::F5]),
        ]),
    ));
}

fn handle_line_down(_trigger: On<Start<LineDown>>, mut requests: MessageWriter<ScrollRequest>) {
    requests.write(ScrollRequest::Lines(1.0));
}

fn handle_line_up(_trigger: On<Start<LineUp>>, mut requests: MessageWriter<ScrollRequest>) {
    requests.write(ScrollRequest::Lines(-1.0));
}

fn handle_page_down(_trigger: On<Start<PageDown>>, mut requests: MessageWriter<ScrollRequest>) {
    requests.write(ScrollRequest::Pages(1.0));
}

fn handle_page_up(_trigger: On<Start<PageUp>>, mut requests: MessageWriter<ScrollRequest>) {
    requests.write(ScrollRequest::Pages(-1.0));
}

fn handle_jump_start(_trigger: On<Start<JumpStart>>, mut requests: MessageWriter<ScrollRequest>) {
    requests.write(ScrollRequest::ToProgress(0.0));
}

fn handle_jump_end(_trigger: On<Start<JumpEnd>>, mut requests: MessageWriter<ScrollRequest>) {
    requests.write(ScrollRequest::ToProgress(1.0));
}

fn handle_toggle_scroll_debug(_trigger: On<Start<ToggleScrollDebug>>, mut commands: Commands) {
    commands.queue(toggle_scroll_debug);
}

fn handle_reload_settings(_trigger: On<Start<ReloadSettings>>, mut commands: Commands) {
    info!(target: LOG_MAIN, "reloading settings");
    commands.queue(reload_settings);
}

/// Flips the overlay flag, through the store when there is one.
pub fn toggle_scroll_debug(world: &mut World) {
    if world.contains_resource::<SettingsStoreRef>() {
        update_settings::<DebugSettings, _>(world, |debug| {
            debug.scroll_overlay = !debug.scroll_overlay
        });
        return;
    }

    let current = world
        .get_resource::<SettingsArc<DebugSettings>>()
        .map(|debug| debug.scroll_overlay)
        .unwrap_or_default();
    world.insert_resource(SettingsArc(Arc::new(DebugSettings {
        scroll_overlay: !current,
    })));
}
