//! Loading screen and content loading.
//!
//! `bevy_asset_loader` fetches the content file while the loading screen is
//! up. The screen stays for at least [`LoadingSettings::min_display_secs`];
//! Space, Enter or Escape cut that short once the content is in.

use crate::content::{Brand, Content, PortfolioContent};
use crate::settings::{LoadingSettings, init_settings};
use crate::utils::{cleanup, remove};
use crate::ExperienceState;
use app::LOG_MAIN;
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use bevy_common_assets::ron::RonAssetPlugin;
use bevy_enhanced_input::prelude::*;
use settings::SettingsArc;

pub const STATUS_LINES: [&str; 5] = [
    "Initializing 3D Environment...",
    "Loading Assets...",
    "Calibrating Camera Systems...",
    "Establishing Neural Networks...",
    "Ready for Launch...",
];

/// Shown on the bar until the content is actually there.
const WAITING_CAP: f32 = 0.99;

const BACKGROUND: Color = Color::srgb(0.06, 0.05, 0.16);
const ACCENT: Color = Color::srgb(0.13, 0.83, 0.93);

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        init_settings::<LoadingSettings>(app);

        app.add_plugins(RonAssetPlugin::<PortfolioContent>::new(&["content.ron"]))
            .add_loading_state(
                LoadingState::new(ExperienceState::Loading)
                    .on_failure_continue_to_state(ExperienceState::Exploring)
                    .load_collection::<ContentAssets>(),
            )
            .add_input_context::<LoadingInput>()
            .add_observer(request_skip)
            .add_systems(
                OnEnter(ExperienceState::Loading),
                (start_clock, spawn_loading_screen),
            )
            .add_systems(
                Update,
                (tick_clock, update_loading_screen, finish_loading)
                    .chain()
                    .run_if(in_state(ExperienceState::Loading)),
            )
            .add_systems(
                OnExit(ExperienceState::Loading),
                (
                    install_content,
                    cleanup::<LoadingScreen>,
                    remove::<LoadingClock>,
                ),
            );
    }
}

#[derive(AssetCollection, Resource)]
pub struct ContentAssets {
    #[asset(path = "portfolio.content.ron")]
    pub content: Handle<PortfolioContent>,
}

/// Minimum-display timer for the loading screen.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LoadingClock {
    elapsed: f32,
    min_secs: f32,
    skip_requested: bool,
}

impl LoadingClock {
    pub fn new(min_secs: f32) -> Self {
        Self {
            elapsed: 0.0,
            min_secs: min_secs.max(0.0),
            skip_requested: false,
        }
    }

    pub fn tick(&mut self, dt_secs: f32) {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.elapsed += dt_secs;
        }
    }

    pub fn request_skip(&mut self) {
        self.skip_requested = true;
    }

    /// Bar fill in `[0, 1]`; held just below full until content is ready.
    pub fn fraction(&self, content_ready: bool) -> f32 {
        let timed = if self.min_secs <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.min_secs).clamp(0.0, 1.0)
        };
        if content_ready {
            timed
        } else {
            timed.min(WAITING_CAP)
        }
    }

    pub fn should_finish(&self, content_ready: bool) -> bool {
        content_ready && (self.skip_requested || self.elapsed >= self.min_secs)
    }
}

/// Status text for a bar fill.
pub fn status_line(fraction: f32) -> &'static str {
    let last = STATUS_LINES.len() - 1;
    let index = (fraction.clamp(0.0, 1.0) * STATUS_LINES.len() as f32).floor() as usize;
    STATUS_LINES[index.min(last)]
}

#[derive(Component)]
struct LoadingScreen;

#[derive(Component)]
struct LoadingStatusText;

#[derive(Component)]
struct LoadingPercentText;

#[derive(Component)]
struct LoadingBarFill;

#[derive(Component)]
struct LoadingInput;

#[derive(Debug, InputAction)]
#[action_output(bool)]
struct SkipLoading;

fn start_clock(mut commands: Commands, settings: Res<SettingsArc<LoadingSettings>>) {
    commands.insert_resource(LoadingClock::new(settings.min_display_secs));
}

fn spawn_loading_screen(mut commands: Commands) {
    let brand = Brand::default();

    commands.spawn((Camera2d, LoadingScreen, Name::new("Loading Camera")));
    commands.spawn((
        LoadingInput,
        LoadingScreen,
        actions!(LoadingInput[(
            Action::<SkipLoading>::new(),
            bindings![KeyCode::Space, KeyCode::Enter, KeyCode::Escape],
        )]),
    ));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(BACKGROUND),
            LoadingScreen,
            Name::new("Loading Screen"),
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    width: Val::Px(320.0),
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new(status_line(0.0)),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(ACCENT),
                        LoadingStatusText,
                    ));
                    row.spawn((
                        Text::new("0%"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(ACCENT),
                        LoadingPercentText,
                    ));
                });

            parent
                .spawn((
                    Node {
                        width: Val::Px(320.0),
                        height: Val::Px(8.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.12, 0.16, 0.23)),
                    BorderRadius::all(Val::Px(4.0)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(ACCENT),
                        BorderRadius::all(Val::Px(4.0)),
                        LoadingBarFill,
                    ));
                });

            parent.spawn((
                Text::new(brand.title),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(brand.tagline),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(ACCENT.with_alpha(0.8)),
            ));
        });
}

fn request_skip(_trigger: On<Start<SkipLoading>>, clock: Option<ResMut<LoadingClock>>) {
    if let Some(mut clock) = clock {
        clock.request_skip();
        debug!(target: LOG_MAIN, "loading screen skip requested");
    }
}

fn tick_clock(time: Res<Time>, mut clock: ResMut<LoadingClock>) {
    clock.tick(time.delta_secs());
}

fn update_loading_screen(
    clock: Res<LoadingClock>,
    content: Option<Res<ContentAssets>>,
    mut status: Query<&mut Text, (With<LoadingStatusText>, Without<LoadingPercentText>)>,
    mut percent: Query<&mut Text, (With<LoadingPercentText>, Without<LoadingStatusText>)>,
    mut fill: Query<&mut Node, With<LoadingBarFill>>,
) {
    let fraction = clock.fraction(content.is_some());

    for mut text in &mut status {
        text.0 = status_line(fraction).to_string();
    }
    for mut text in &mut percent {
        text.0 = format!("{:.0}%", fraction * 100.0);
    }
    for mut node in &mut fill {
        node.width = Val::Percent(fraction * 100.0);
    }
}

fn finish_loading(
    clock: Res<LoadingClock>,
    content: Option<Res<ContentAssets>>,
    mut next_state: ResMut<NextState<ExperienceState>>,
) {
    if clock.should_finish(content.is_some()) {
        info!(target: LOG_MAIN, elapsed = clock.elapsed, "loading finished");
        next_state.set(ExperienceState::Exploring);
    }
}

/// Publishes [`Content`] for everything spawned on entering `Exploring`.
fn install_content(
    mut commands: Commands,
    existing: Option<Res<Content>>,
    collection: Option<Res<ContentAssets>>,
    assets: Option<Res<Assets<PortfolioContent>>>,
) {
    if existing.is_some() {
        return;
    }

    let loaded = collection
        .zip(assets)
        .and_then(|(collection, assets)| assets.get(&collection.content).cloned());

    let content = match loaded {
        Some(content) => Content::new(content),
        None => {
            error!(target: LOG_MAIN, "content file unavailable; continuing with section labels only");
            Content::fallback()
        }
    };
    commands.insert_resource(content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn holds_for_minimum_time() {
        let mut clock = LoadingClock::new(3.0);
        clock.tick(1.0);
        assert!(!clock.should_finish(true));
        clock.tick(2.0);
        assert!(clock.should_finish(true));
    }

    #[test]
    fn waits_for_content_even_after_skip() {
        let mut clock = LoadingClock::new(3.0);
        clock.request_skip();
        assert!(!clock.should_finish(false));
        assert!(clock.should_finish(true));

        clock.tick(10.0);
        assert_eq!(clock.fraction(false), WAITING_CAP);
        assert_eq!(clock.fraction(true), 1.0);
    }

    #[test]
    fn status_lines_follow_progress() {
        assert_eq!(status_line(0.0), STATUS_LINES[0]);
        assert_eq!(status_line(0.25), STATUS_LINES[1]);
        assert_eq!(status_line(0.99), STATUS_LINES[4]);
        assert_eq!(status_line(1.0), STATUS_LINES[4]);
        assert_eq!(status_line(f32::NAN), STATUS_LINES[0]);
    }
}
