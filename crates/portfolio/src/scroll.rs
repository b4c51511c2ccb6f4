//! Virtual page scrolling.
//!
//! The page is `scroll_pages` viewports long. Wheel, keyboard and navigation
//! clicks become [`ScrollRequest`]s; [`ScrollState`] turns them into a scroll
//! fraction, the active [`Section`] and the smoothed progress the camera
//! follows.

use crate::settings::{ScrollSettings, ViewportSettings, init_settings};
use crate::utils::remove;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_SCROLL;
use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
    window::{PrimaryWindow, WindowResized},
};
use settings::SettingsArc;
use timeline::{ScrollTracker, ScrubSmoother, Section};

/// Used until a window reports its size.
pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

pub struct ScrollPlugin;

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        init_settings::<ScrollSettings>(app);
        init_settings::<ViewportSettings>(app);

        app.add_message::<ScrollRequest>()
            .add_message::<SectionChanged>()
            .add_systems(OnEnter(ExperienceState::Exploring), setup_scroll)
            .add_systems(
                Update,
                (read_mouse_wheel, track_viewport).in_set(ExperienceSet::Input),
            )
            .add_systems(
                Update,
                (
                    apply_scroll_settings
                        .run_if(resource_changed::<SettingsArc<ScrollSettings>>),
                    apply_scroll_requests,
                    smooth_display_progress,
                )
                    .chain()
                    .in_set(ExperienceSet::Scroll),
            )
            .add_systems(
                OnExit(ExperienceState::Exploring),
                (remove::<ScrollState>, remove::<ViewportFlags>),
            );
    }
}

/// A request to move the virtual scroll position.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    /// Positive scrolls down the page.
    Pixels(f32),
    Lines(f32),
    Pages(f32),
    ToProgress(f32),
    ToSection(Section),
}

/// Written whenever the active section index changes.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChanged {
    pub from: Section,
    pub to: Section,
}

#[derive(Resource, Debug, Clone)]
pub struct ScrollState {
    tracker: ScrollTracker,
    section: Section,
    display_progress: f32,
    smoother: ScrubSmoother,
}

impl ScrollState {
    pub fn new(viewport_height_px: f32, settings: &ScrollSettings) -> Self {
        let tracker = ScrollTracker::new(viewport_height_px, settings.scroll_pages);
        Self {
            section: tracker.section(),
            display_progress: tracker.progress(),
            tracker,
            smoother: ScrubSmoother::new(settings.scrub_seconds),
        }
    }

    pub fn progress(&self) -> f32 {
        self.tracker.progress()
    }

    /// Progress after scrub smoothing; what the camera shows.
    pub fn display_progress(&self) -> f32 {
        self.display_progress
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    /// Applies one request and reports a section change, if any.
    pub fn apply(
        &mut self,
        request: ScrollRequest,
        settings: &ScrollSettings,
    ) -> Option<SectionChanged> {
        match request {
            ScrollRequest::Pixels(px) => self.tracker.scroll_by_px(px),
            ScrollRequest::Lines(lines) => {
                self.tracker.scroll_by_px(lines * settings.line_height_px)
            }
            ScrollRequest::Pages(pages) => self.tracker.scroll_by_px(
                pages * settings.page_fraction * self.tracker.viewport_height_px(),
            ),
            ScrollRequest::ToProgress(progress) => self.tracker.scroll_to_progress(progress),
            ScrollRequest::ToSection(section) => self.tracker.scroll_to_section(section),
        }

        let section = self.tracker.section();
        if section == self.section {
            return None;
        }
        let change = SectionChanged {
            from: self.section,
            to: section,
        };
        self.section = section;
        Some(change)
    }

    /// Rescales the pixel offset; never changes progress or section.
    pub fn resize(&mut self, viewport_height_px: f32) {
        self.tracker.set_viewport_height(viewport_height_px);
    }

    pub fn advance(&mut self, dt_secs: f32) {
        self.display_progress =
            self.smoother
                .step(self.display_progress, self.tracker.progress(), dt_secs);
    }

    /// Re-applies the settings that shape the page; position is kept.
    pub fn apply_settings(&mut self, settings: &ScrollSettings) {
        self.tracker.set_scroll_pages(settings.scroll_pages);
        self.smoother = ScrubSmoother::new(settings.scrub_seconds);
    }
}

/// Window shape, recomputed on resize.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportFlags {
    pub portrait: bool,
    pub mobile: bool,
    /// Portrait phone-sized window: ask the visitor to rotate and lock scrolling.
    pub rotate_hint: bool,
}

impl ViewportFlags {
    pub fn from_size(size: Vec2, mobile_max_width: f32) -> Self {
        let portrait = size.y >= size.x;
        let mobile = size.x <= mobile_max_width;
        Self {
            portrait,
            mobile,
            rotate_hint: portrait && mobile,
        }
    }
}

fn setup_scroll(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    scroll: Res<SettingsArc<ScrollSettings>>,
    viewport: Res<SettingsArc<ViewportSettings>>,
) {
    let size = windows
        .single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(DEFAULT_VIEWPORT);

    let state = ScrollState::new(size.y, &scroll);
    info!(
        target: LOG_SCROLL,
        viewport = ?size,
        document_px = state.tracker().document_height_px(),
        "scroll page ready"
    );
    commands.insert_resource(state);
    commands.insert_resource(ViewportFlags::from_size(size, viewport.mobile_max_width));
}

/// Wheel up (positive y) moves back up the page.
fn read_mouse_wheel(
    mut wheel: MessageReader<MouseWheel>,
    mut requests: MessageWriter<ScrollRequest>,
) {
    for event in wheel.read() {
        let request = match event.unit {
            MouseScrollUnit::Line => ScrollRequest::Lines(-event.y),
            MouseScrollUnit::Pixel => ScrollRequest::Pixels(-event.y),
        };
        requests.write(request);
    }
}

fn track_viewport(
    mut resized: MessageReader<WindowResized>,
    mut state: ResMut<ScrollState>,
    mut flags: ResMut<ViewportFlags>,
    viewport: Res<SettingsArc<ViewportSettings>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    let size = Vec2::new(last.width, last.height);
    state.resize(size.y);

    let new_flags = ViewportFlags::from_size(size, viewport.mobile_max_width);
    if flags.set_if_neq(new_flags) {
        info!(target: LOG_SCROLL, ?size, flags = ?new_flags, "viewport changed");
    }
}

fn apply_scroll_settings(settings: Res<SettingsArc<ScrollSettings>>, mut state: ResMut<ScrollState>) {
    state.apply_settings(&settings);
    debug!(target: LOG_SCROLL, pages = settings.scroll_pages, scrub = settings.scrub_seconds, "scroll settings applied");
}

fn apply_scroll_requests(
    mut requests: MessageReader<ScrollRequest>,
    mut state: ResMut<ScrollState>,
    flags: Res<ViewportFlags>,
    settings: Res<SettingsArc<ScrollSettings>>,
    mut changes: MessageWriter<SectionChanged>,
) {
    if flags.rotate_hint {
        let dropped = requests.read().count();
        if dropped > 0 {
            debug!(target: LOG_SCROLL, dropped, "scrolling locked until rotated");
        }
        return;
    }

    for request in requests.read() {
        if let Some(change) = state.apply(*request, &settings) {
            info!(
                target: LOG_SCROLL,
                from = %change.from,
                to = %change.to,
                progress = state.progress(),
                "section changed"
            );
            changes.write(change);
        }
    }
}

fn smooth_display_progress(time: Res<Time>, mut state: ResMut<ScrollState>) {
    state.advance(time.delta_secs());
}
