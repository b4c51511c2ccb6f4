//! Collapsible list of outbound links under the brand panel.

use super::components::{ButtonPalette, CYAN, NORMAL_BUTTON, PANEL_BORDER, label, set_shown, set_text};
use crate::content::Content;
use crate::links::LinkButton;
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_UI;
use bevy::prelude::*;

pub(super) struct QuickLinksPlugin;

impl Plugin for QuickLinksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuickLinksState>()
            .add_systems(
                OnEnter(ExperienceState::Exploring),
                (reset_quick_links, spawn_quick_links),
            )
            .add_systems(Update, toggle_quick_links.in_set(ExperienceSet::Input))
            .add_systems(
                Update,
                apply_quick_links
                    .run_if(resource_changed::<QuickLinksState>)
                    .in_set(ExperienceSet::Present),
            )
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<QuickLinks>);
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuickLinksState {
    pub expanded: bool,
}

impl QuickLinksState {
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "QUICK LINKS ▼"
        } else {
            "QUICK LINKS ▶"
        }
    }
}

#[derive(Component)]
pub struct QuickLinks;

#[derive(Component)]
pub struct QuickLinksToggle;

#[derive(Component)]
struct QuickLinksToggleText;

#[derive(Component)]
struct QuickLinksList;

fn reset_quick_links(mut state: ResMut<QuickLinksState>) {
    *state = QuickLinksState::default();
}

fn spawn_quick_links(mut commands: Commands, content: Res<Content>) {
    let state = QuickLinksState::default();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(420.0),
                left: Val::Px(32.0),
                width: Val::Px(220.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            QuickLinks,
            Name::new("Quick Links"),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::all(Val::Px(10.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(NORMAL_BUTTON),
                    BorderColor::all(PANEL_BORDER),
                    BorderRadius::all(Val::Px(8.0)),
                    ButtonPalette::default(),
                    QuickLinksToggle,
                ))
                .with_children(|button| {
                    button.spawn((label(state.toggle_label(), 13.0, CYAN), QuickLinksToggleText));
                });

            parent
                .spawn((
                    Node {
                        display: Display::None,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(4.0),
                        ..default()
                    },
                    QuickLinksList,
                ))
                .with_children(|list| {
                    for link in &content.quick_links {
                        list.spawn((
                            Button,
                            Node {
                                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                            BackgroundColor(NORMAL_BUTTON),
                            BorderColor::all(PANEL_BORDER),
                            BorderRadius::all(Val::Px(4.0)),
                            ButtonPalette::default(),
                            LinkButton::new(link.url.clone()),
                        ))
                        .with_children(|button| {
                            button.spawn(label(link.name.clone(), 11.0, CYAN.with_alpha(0.8)));
                        });
                    }
                });
        });
}

fn toggle_quick_links(
    toggles: Query<&Interaction, (Changed<Interaction>, With<QuickLinksToggle>)>,
    mut state: ResMut<QuickLinksState>,
) {
    for interaction in &toggles {
        if *interaction == Interaction::Pressed {
            state.expanded = !state.expanded;
            debug!(target: LOG_UI, expanded = state.expanded, "quick links toggled");
        }
    }
}

fn apply_quick_links(
    state: Res<QuickLinksState>,
    mut lists: Query<&mut Node, With<QuickLinksList>>,
    mut labels: Query<&mut Text, With<QuickLinksToggleText>>,
) {
    for mut node in &mut lists {
        set_shown(&mut node, state.expanded);
    }
    for mut text in &mut labels {
        set_text(&mut text, state.toggle_label());
    }
}
