//! Clickable contact cards over the contact terminal.

use super::components::{ButtonPalette, MUTED_TEXT, NORMAL_BUTTON, label, set_shown};
use crate::content::{Content, color_from_hex};
use crate::links::LinkButton;
use crate::scroll::ScrollState;
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_UI;
use bevy::prelude::*;
use timeline::SceneKind;

pub struct ContactCardsPlugin;

impl Plugin for ContactCardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_contact_cards)
            .add_systems(Update, show_contact_cards.in_set(ExperienceSet::Present))
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<ContactCards>);
    }
}

/// Root of the card grid; shown together with the contact scene.
#[derive(Component)]
pub struct ContactCards;

fn spawn_contact_cards(mut commands: Commands, content: Res<Content>) {
    commands
        .spawn((
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                left: Val::Percent(20.0),
                right: Val::Percent(20.0),
                bottom: Val::Percent(18.0),
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(12.0),
                row_gap: Val::Px(12.0),
                ..default()
            },
            ContactCards,
            Name::new("Contact Cards"),
        ))
        .with_children(|grid| {
            for contact in &content.contacts {
                let accent = color_from_hex(&contact.color);
                grid.spawn((
                    Button,
                    Node {
                        width: Val::Px(220.0),
                        padding: UiRect::all(Val::Px(12.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(4.0),
                        ..default()
                    },
                    BackgroundColor(NORMAL_BUTTON),
                    BorderColor::all(accent),
                    BorderRadius::all(Val::Px(8.0)),
                    ButtonPalette::with_border(accent),
                    LinkButton::new(contact.url.clone()),
                    Name::new(format!("Contact {}", contact.name)),
                ))
                .with_children(|card| {
                    card.spawn(label(contact.name.clone(), 14.0, accent));
                    card.spawn(label(contact.value.clone(), 11.0, MUTED_TEXT));
                });
            }
        });
}

fn show_contact_cards(state: Res<ScrollState>, mut grids: Query<&mut Node, With<ContactCards>>) {
    let shown = SceneKind::Contact.visible_in(state.section());
    for mut node in &mut grids {
        if set_shown(&mut node, shown) {
            debug!(target: LOG_UI, shown, "contact cards");
        }
    }
}
