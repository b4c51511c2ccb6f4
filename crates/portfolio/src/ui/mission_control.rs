use super::components::{MUTED_TEXT, ONLINE_GREEN, WARNING_YELLOW, label, panel, panel_node, set_text};
use crate::content::Content;
use crate::scroll::ScrollState;
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use bevy::prelude::*;
use timeline::{SECTION_COUNT, Section};

pub(super) struct MissionControlPlugin;

impl Plugin for MissionControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_mission_control)
            .add_systems(Update, update_mission_control.in_set(ExperienceSet::Present))
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<MissionControl>);
    }
}

#[derive(Component)]
pub struct MissionControl;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum MissionText {
    Title,
    Objective,
    Status,
    Count,
}

#[derive(Component)]
struct MissionFill;

/// `MISSION_COMPLETE` once the last section is reached.
pub fn mission_status(section: Section) -> &'static str {
    if section.is_last() {
        "MISSION_COMPLETE"
    } else {
        "IN_PROGRESS"
    }
}

/// Sections reached so far as `(k+1)/9`, plus the matching bar fraction.
pub fn mission_count(section: Section) -> (String, f32) {
    let reached = section.index() + 1;
    (
        format!("{reached}/{SECTION_COUNT}"),
        reached as f32 / SECTION_COUNT as f32,
    )
}

fn spawn_mission_control(mut commands: Commands, content: Res<Content>) {
    let mission = content.mission(Section::FIRST);
    let (count, fraction) = mission_count(Section::FIRST);

    commands
        .spawn((
            panel(Node {
                position_type: PositionType::Absolute,
                top: Val::Px(180.0),
                left: Val::Px(32.0),
                max_width: Val::Px(320.0),
                ..panel_node()
            }),
            MissionControl,
            Name::new("Mission Control"),
        ))
        .insert(BorderColor::all(ONLINE_GREEN.with_alpha(0.3)))
        .with_children(|panel| {
            panel.spawn(label("● MISSION CONTROL", 12.0, ONLINE_GREEN));
            panel.spawn((label(mission.title.clone(), 13.0, Color::WHITE), MissionText::Title));
            panel.spawn((
                label(mission.objective.clone(), 11.0, MUTED_TEXT),
                MissionText::Objective,
            ));
            panel.spawn((
                label(mission_status(Section::FIRST), 11.0, WARNING_YELLOW),
                MissionText::Status,
            ));

            panel
                .spawn(Node {
                    justify_content: JustifyContent::SpaceBetween,
                    margin: UiRect::top(Val::Px(6.0)),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn(label("PROGRESS", 11.0, MUTED_TEXT));
                    row.spawn((label(count, 11.0, MUTED_TEXT), MissionText::Count));
                });
            panel
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(3.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(fraction * 100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(ONLINE_GREEN),
                        MissionFill,
                    ));
                });
        });
}

fn update_mission_control(
    state: Res<ScrollState>,
    content: Res<Content>,
    mut texts: Query<(&MissionText, &mut Text)>,
    mut fills: Query<&mut Node, With<MissionFill>>,
) {
    let section = state.section();
    let mission = content.mission(section);
    let (count, fraction) = mission_count(section);

    for (kind, mut text) in &mut texts {
        match kind {
            MissionText::Title => set_text(&mut text, &mission.title),
            MissionText::Objective => set_text(&mut text, &mission.objective),
            MissionText::Status => set_text(&mut text, mission_status(section)),
            MissionText::Count => set_text(&mut text, &count),
        }
    }

    let width = Val::Percent(fraction * 100.0);
    for mut node in &mut fills {
        if node.width != width {
            node.width = width;
        }
    }
}
