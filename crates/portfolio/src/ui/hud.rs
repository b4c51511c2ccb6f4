//! Heads-up display: brand, current section, mission progress and the
//! section navigation dots.

use super::components::{CYAN, MUTED_TEXT, ONLINE_GREEN, PANEL_BORDER, label, panel, panel_node, set_text};
use crate::content::Content;
use crate::scroll::{ScrollRequest, ScrollState};
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_UI;
use bevy::prelude::*;
use timeline::{SECTION_COUNT, Section};

pub(super) struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_hud)
            .add_systems(Update, nav_dot_clicks.in_set(ExperienceSet::Input))
            .add_systems(
                Update,
                (update_hud_text, update_progress_bar, update_nav_dots)
                    .in_set(ExperienceSet::Present),
            )
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<Hud>);
    }
}

/// Marker component for HUD entities
#[derive(Component)]
pub struct Hud;

/// Which HUD readout a text entity shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum HudText {
    SectionName,
    SectionStatus,
    Percent,
    Counter,
    Phase,
}

#[derive(Component)]
struct StatusDot;

#[derive(Component)]
struct ProgressFill;

/// Side navigation dot; clicking it scrolls to the start of its section.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavDot(pub Section);

/// How a navigation dot is drawn relative to the current section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Past,
    Current,
    Future,
}

impl DotState {
    pub fn of(dot: Section, current: Section) -> Self {
        match dot.cmp(&current) {
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Future,
        }
    }

    /// Fill and border for a dot whose section accent is `accent`.
    pub fn colors(self, accent: Color) -> (Color, Color) {
        match self {
            Self::Current => (accent, accent),
            Self::Past => (accent.with_alpha(0.5), accent),
            Self::Future => (Color::NONE, PANEL_BORDER),
        }
    }
}

/// Whole percent of the scroll progress.
pub fn percent_label(progress: f32) -> String {
    format!("{}%", (progress.clamp(0.0, 1.0) * 100.0).round() as u32)
}

/// `SECTION k/9`, one-based.
pub fn section_counter(section: Section) -> String {
    format!("SECTION {}/{}", section.index() + 1, SECTION_COUNT)
}

fn spawn_hud(mut commands: Commands, content: Res<Content>) {
    let first = content.section(Section::FIRST);

    // Brand panel
    commands
        .spawn((
            panel(Node {
                position_type: PositionType::Absolute,
                top: Val::Px(32.0),
                left: Val::Px(32.0),
                ..panel_node()
            }),
            Hud,
            Name::new("HUD Brand"),
        ))
        .with_children(|panel| {
            panel.spawn(label("● SYSTEM ONLINE", 12.0, ONLINE_GREEN));
            panel.spawn(label(content.brand.title.clone(), 18.0, CYAN));
            panel.spawn(label(content.brand.build.clone(), 11.0, CYAN.with_alpha(0.6)));
        });

    // Current section panel
    commands
        .spawn((
            panel(Node {
                position_type: PositionType::Absolute,
                top: Val::Px(32.0),
                right: Val::Px(32.0),
                align_items: AlignItems::FlexEnd,
                ..panel_node()
            }),
            Hud,
            Name::new("HUD Section"),
        ))
        .with_children(|panel| {
            panel.spawn(label("CURRENT SECTION", 12.0, CYAN));
            panel.spawn((label(first.name.clone(), 18.0, Color::WHITE), HudText::SectionName));
            panel
                .spawn(Node {
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Node {
                            width: Val::Px(8.0),
                            height: Val::Px(8.0),
                            ..default()
                        },
                        BackgroundColor(first.accent()),
                        BorderRadius::MAX,
                        StatusDot,
                    ));
                    row.spawn((
                        label(first.status.clone(), 11.0, first.accent()),
                        HudText::SectionStatus,
                    ));
                });
        });

    // Mission progress panel
    commands
        .spawn((
            panel(Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(32.0),
                left: Val::Percent(35.0),
                width: Val::Percent(30.0),
                ..panel_node()
            }),
            Hud,
            Name::new("HUD Progress"),
        ))
        .with_children(|panel| {
            panel
                .spawn(Node {
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn(label("MISSION PROGRESS", 12.0, CYAN));
                    row.spawn((label(percent_label(0.0), 12.0, Color::WHITE), HudText::Percent));
                });
            panel
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(6.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                    BorderRadius::all(Val::Px(3.0)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(CYAN),
                        BorderRadius::all(Val::Px(3.0)),
                        ProgressFill,
                    ));
                });
            panel
                .spawn(Node {
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        label(section_counter(Section::FIRST), 11.0, MUTED_TEXT),
                        HudText::Counter,
                    ));
                    row.spawn((
                        label(Section::FIRST.phase(), 11.0, MUTED_TEXT),
                        HudText::Phase,
                    ));
                });
        });

    // Side navigation
    commands
        .spawn((
            panel(Node {
                position_type: PositionType::Absolute,
                right: Val::Px(32.0),
                top: Val::Percent(35.0),
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(12.0),
                ..panel_node()
            }),
            Hud,
            Name::new("HUD Navigation"),
        ))
        .with_children(|nav| {
            for section in Section::iter() {
                let (fill, border) =
                    DotState::of(section, Section::FIRST).colors(content.section(section).accent());
                nav.spawn((
                    Button,
                    Node {
                        width: Val::Px(16.0),
                        height: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(fill),
                    BorderColor::all(border),
                    BorderRadius::MAX,
                    NavDot(section),
                    Name::new(format!("Nav {}", content.section(section).name)),
                ));
            }
        });
}

fn nav_dot_clicks(
    dots: Query<(&Interaction, &NavDot), Changed<Interaction>>,
    mut requests: MessageWriter<ScrollRequest>,
) {
    for (interaction, dot) in &dots {
        if *interaction == Interaction::Pressed {
            info!(target: LOG_UI, section = %dot.0, "navigation dot pressed");
            requests.write(ScrollRequest::ToSection(dot.0));
        }
    }
}

fn update_hud_text(
    state: Res<ScrollState>,
    content: Res<Content>,
    mut texts: Query<(&HudText, &mut Text, &mut TextColor)>,
    mut dots: Query<&mut BackgroundColor, With<StatusDot>>,
) {
    let section = state.section();
    let copy = content.section(section);
    let accent = copy.accent();

    for (kind, mut text, mut color) in &mut texts {
        match kind {
            HudText::SectionName => set_text(&mut text, &copy.name),
            HudText::SectionStatus => {
                set_text(&mut text, &copy.status);
                color.set_if_neq(TextColor(accent));
            }
            HudText::Percent => set_text(&mut text, &percent_label(state.progress())),
            HudText::Counter => set_text(&mut text, &section_counter(section)),
            HudText::Phase => set_text(&mut text, section.phase()),
        }
    }
    for mut dot in &mut dots {
        dot.set_if_neq(BackgroundColor(accent));
    }
}

fn update_progress_bar(state: Res<ScrollState>, mut fills: Query<&mut Node, With<ProgressFill>>) {
    let width = Val::Percent(state.progress() * 100.0);
    for mut node in &mut fills {
        if node.width != width {
            node.width = width;
        }
    }
}

fn update_nav_dots(
    state: Res<ScrollState>,
    content: Res<Content>,
    mut dots: Query<(&NavDot, &mut BackgroundColor, &mut BorderColor)>,
) {
    let current = state.section();
    for (dot, mut background, mut border) in &mut dots {
        let (fill, edge) = DotState::of(dot.0, current).colors(content.section(dot.0).accent());
        background.set_if_neq(BackgroundColor(fill));
        border.set_if_neq(BorderColor::all(edge));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn readouts() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(0.456), "46%");
        assert_eq!(percent_label(1.2), "100%");
        assert_eq!(section_counter(Section::Hero), "SECTION 1/9");
        assert_eq!(section_counter(Section::Contact), "SECTION 9/9");
    }

    #[test]
    fn dots_split_around_current() {
        assert_eq!(DotState::of(Section::Hero, Section::About), DotState::Past);
        assert_eq!(DotState::of(Section::About, Section::About), DotState::Current);
        assert_eq!(DotState::of(Section::Contact, Section::About), DotState::Future);

        let accent = Color::srgb(1.0, 0.0, 0.0);
        assert_eq!(DotState::Future.colors(accent), (Color::NONE, PANEL_BORDER));
        assert_eq!(DotState::Past.colors(accent).0, accent.with_alpha(0.5));
    }
}
