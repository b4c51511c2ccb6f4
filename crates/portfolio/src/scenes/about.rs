use super::{ContentMarker, FloatMotion, Palette, Spin, spawn_root};
use crate::ExperienceState;
use crate::content::Content;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;
use timeline::SceneKind;

const HOLOGRAM: Color = Color::srgb(0.0, 1.0, 1.0);

pub(super) struct AboutScenePlugin;

impl Plugin for AboutScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_about);
    }
}

fn spawn_about(
    mut commands: Commands,
    content: Res<Content>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::About);

    commands.entity(root).with_children(|scene| {
        scene
            .spawn((
                Transform::from_xyz(-2.0, 0.0, -5.0),
                Visibility::default(),
                FloatMotion::new(0.0, 0.1, 0.6, 0.0),
                Name::new("Hologram"),
            ))
            .with_children(|hologram| {
                hologram.spawn((
                    palette.mesh(Cylinder::new(1.25, 0.1)),
                    palette.glow(HOLOGRAM, 1.5),
                    Transform::from_xyz(-3.5, 1.0, 0.0)
                        .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                    ContentMarker::new(content.brand.title.clone()),
                ));
                hologram.spawn((
                    palette.mesh(Cuboid::new(6.0, 4.0, 0.1)),
                    palette.glass(HOLOGRAM, 0.2),
                    Transform::from_xyz(1.5, 0.5, 0.0),
                    ContentMarker::new(content.brand.tagline.clone()),
                ));
                hologram.spawn((
                    palette.mesh(Torus::new(1.5, 1.6)),
                    palette.glow(HOLOGRAM, 2.0),
                    Transform::from_xyz(-3.5, 1.0, 0.0)
                        .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                    Spin::y(0.8),
                ));
            });
    });
}
