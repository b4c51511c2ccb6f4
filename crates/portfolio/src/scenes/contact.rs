use super::{ContentMarker, FloatMotion, Palette, spawn_root};
use crate::ExperienceState;
use crate::content::{Content, color_from_hex};
use bevy::prelude::*;
use timeline::SceneKind;

const COLUMNS: usize = 3;

pub(super) struct ContactScenePlugin;

impl Plugin for ContactScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_contact);
    }
}

fn spawn_contact(
    mut commands: Commands,
    content: Res<Content>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::Contact);
    let tile = palette.mesh(Cuboid::new(4.0, 2.2, 0.2));

    commands.entity(root).with_children(|scene| {
        // Terminal housing and screen; the contact cards overlay sits on top.
        scene.spawn((
            palette.mesh(Cuboid::new(16.0, 10.0, 1.0)),
            palette.matte(Color::srgb(0.08, 0.09, 0.12)),
            Transform::default(),
            Name::new("Contact Terminal"),
        ));
        scene.spawn((
            palette.mesh(Cuboid::new(15.0, 9.0, 0.3)),
            palette.glass(Color::srgb(0.0, 1.0, 0.53), 0.15),
            Transform::from_xyz(0.0, 0.0, 0.7),
        ));
        scene.spawn((
            palette.mesh(Cuboid::new(8.0, 1.0, 0.2)),
            palette.glow(Color::srgb(0.0, 1.0, 1.0), 2.0),
            Transform::from_xyz(0.0, 14.0, 0.0),
            FloatMotion::new(14.0, 0.3, 0.6, 0.0),
        ));

        for (index, contact) in content.contacts.iter().enumerate() {
            let column = (index % COLUMNS) as f32 - 1.0;
            let row = (index / COLUMNS) as f32;
            scene.spawn((
                tile.clone(),
                palette.glass(color_from_hex(&contact.color), 0.5),
                Transform::from_xyz(column * 4.6, 2.0 - row * 2.8, 1.0),
                ContentMarker::new(contact.name.clone()),
            ));
        }
    });
}
