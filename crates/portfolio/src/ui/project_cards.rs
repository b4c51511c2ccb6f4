//! Project cards with their outbound links, over the projects matrix.

use super::components::{ButtonPalette, MUTED_TEXT, NORMAL_BUTTON, label, panel, panel_node, set_shown};
use crate::content::{Content, color_from_hex};
use crate::links::LinkButton;
use crate::scroll::ScrollState;
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_UI;
use bevy::prelude::*;
use timeline::SceneKind;

pub struct ProjectCardsPlugin;

impl Plugin for ProjectCardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_project_cards)
            .add_systems(Update, show_project_cards.in_set(ExperienceSet::Present))
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<ProjectCards>);
    }
}

/// Root of the project card row; shown together with the projects scene.
#[derive(Component)]
pub struct ProjectCards;

fn spawn_project_cards(mut commands: Commands, content: Res<Content>) {
    commands
        .spawn((
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                left: Val::Percent(8.0),
                right: Val::Percent(8.0),
                bottom: Val::Px(140.0),
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(12.0),
                row_gap: Val::Px(12.0),
                ..default()
            },
            ProjectCards,
            Name::new("Project Cards"),
        ))
        .with_children(|row| {
            for project in &content.projects {
                let accent = color_from_hex(&project.color);
                row.spawn((
                    panel(Node {
                        width: Val::Px(240.0),
                        padding: UiRect::all(Val::Px(12.0)),
                        ..panel_node()
                    }),
                    Name::new(format!("Project {}", project.title)),
                ))
                .insert(BorderColor::all(accent))
                .with_children(|card| {
                    card.spawn(label(project.title.clone(), 13.0, accent));
                    card.spawn(label(project.tech.join(" · "), 10.0, MUTED_TEXT));
                    card.spawn(Node {
                        column_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|links| {
                        for link in &project.links {
                            links
                                .spawn((
                                    Button,
                                    Node {
                                        flex_grow: 1.0,
                                        padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                                        border: UiRect::all(Val::Px(1.0)),
                                        justify_content: JustifyContent::Center,
                                        ..default()
                                    },
                                    BackgroundColor(NORMAL_BUTTON),
                                    BorderColor::all(accent),
                                    BorderRadius::all(Val::Px(4.0)),
                                    ButtonPalette::with_border(accent),
                                    LinkButton::new(link.url.clone()),
                                ))
                                .with_children(|button| {
                                    button.spawn(label(format!("{} →", link.name), 11.0, accent));
                                });
                        }
                    });
                });
            }
        });
}

fn show_project_cards(state: Res<ScrollState>, mut rows: Query<&mut Node, With<ProjectCards>>) {
    let shown = SceneKind::Projects.visible_in(state.section());
    for mut node in &mut rows {
        if set_shown(&mut node, shown) {
            debug!(target: LOG_UI, shown, "project cards");
        }
    }
}
