#![allow(dead_code)]

use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
    state::app::StatesPlugin,
    window::WindowResized,
};
use portfolio::{
    CorePlugin, ExperienceState,
    links::{ActiveLinkOpener, LinkOpener, LinksPlugin},
    scroll::ScrollPlugin,
};
use std::{
    io,
    sync::{Arc, Mutex},
};
use timeline::Section;

/// Headless app with the scroll page, still in `Loading`.
pub fn scroll_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_message::<MouseWheel>()
        .add_message::<WindowResized>()
        .add_plugins((CorePlugin, ScrollPlugin))
        .init_resource::<SeenSectionChanges>()
        .add_systems(Last, record_section_changes);
    app
}

pub fn exploring_app() -> App {
    let mut app = scroll_app();
    enter(&mut app, ExperienceState::Exploring);
    app
}

pub fn enter(app: &mut App, state: ExperienceState) {
    app.world_mut()
        .resource_mut::<NextState<ExperienceState>>()
        .set(state);
    app.update();
}

pub fn wheel_lines(app: &mut App, lines: f32) {
    app.world_mut().write_message(MouseWheel {
        unit: MouseScrollUnit::Line,
        x: 0.0,
        y: lines,
        window: Entity::PLACEHOLDER,
    });
    app.update();
}

pub fn resize(app: &mut App, width: f32, height: f32) {
    app.world_mut().write_message(WindowResized {
        window: Entity::PLACEHOLDER,
        width,
        height,
    });
    app.update();
}

pub fn go_to(app: &mut App, section: Section) {
    app.world_mut()
        .write_message(portfolio::scroll::ScrollRequest::ToSection(section));
    app.update();
}

/// Every `SectionChanged` seen so far, as `(from, to)`.
#[derive(Resource, Default)]
pub struct SeenSectionChanges(pub Vec<(Section, Section)>);

fn record_section_changes(
    mut changes: MessageReader<portfolio::scroll::SectionChanged>,
    mut seen: ResMut<SeenSectionChanges>,
) {
    seen.0
        .extend(changes.read().map(|change| (change.from, change.to)));
}

/// Remembers every URL instead of opening it.
#[derive(Clone, Default)]
pub struct RecordingOpener(Arc<Mutex<Vec<String>>>);

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        self.0.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Installs `LinksPlugin` with a [`RecordingOpener`].
pub fn record_links(app: &mut App) -> RecordingOpener {
    let opener = RecordingOpener::default();
    app.insert_resource(ActiveLinkOpener::new(opener.clone()))
        .add_plugins(LinksPlugin);
    opener
}

/// The entity carrying `LinkButton` for `url`.
pub fn link_button(app: &mut App, url: &str) -> Entity {
    let mut buttons = app
        .world_mut()
        .query::<(Entity, &portfolio::links::LinkButton)>();
    let found: Vec<Entity> = buttons
        .iter(app.world())
        .filter(|(_, button)| button.url == url)
        .map(|(entity, _)| entity)
        .collect();
    assert_eq!(found.len(), 1, "expected one button for {url}");
    found[0]
}
