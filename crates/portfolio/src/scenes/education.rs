use super::{ContentMarker, FloatMotion, Palette, Spin, ring_point, spawn_root, vec3};
use crate::ExperienceState;
use crate::content::{Content, color_from_hex};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;
use timeline::SceneKind;

const CERTIFICATE_RING: Vec3 = Vec3::new(2.0, -6.0, 0.0);

pub(super) struct EducationScenePlugin;

impl Plugin for EducationScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_education);
    }
}

fn spawn_education(
    mut commands: Commands,
    content: Res<Content>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::Education);
    let card = palette.mesh(Cuboid::new(3.8, 2.8, 0.2));
    let badge = palette.mesh(Cylinder::new(0.8, 0.1));

    commands.entity(root).with_children(|scene| {
        scene.spawn((
            palette.mesh(Cuboid::new(20.0, 0.1, 0.1)),
            palette.glow(Color::srgb(0.0, 1.0, 1.0), 2.0),
            Transform::from_xyz(0.0, 1.8, 0.0),
            Name::new("Timeline"),
        ));

        for (index, entry) in content.education.iter().enumerate() {
            let position = vec3(entry.position);
            scene.spawn((
                card.clone(),
                palette.glass(color_from_hex(&entry.color), 0.35),
                Transform::from_translation(position),
                FloatMotion::new(position.y, 0.1, 0.5, index as f32),
                ContentMarker::new(entry.title.clone()),
            ));
        }

        let certificates = content.certificates.len();
        scene
            .spawn((
                Transform::from_translation(CERTIFICATE_RING),
                Visibility::default(),
                Spin::y(0.1),
                Name::new("Certificates"),
            ))
            .with_children(|ring| {
                for (index, certificate) in content.certificates.iter().enumerate() {
                    ring.spawn((
                        badge.clone(),
                        palette.glow(color_from_hex(&certificate.color), 1.5),
                        Transform::from_translation(ring_point(index, certificates, 6.0, 0.4, 1.0))
                            .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                        ContentMarker::new(certificate.name.clone()),
                    ));
                }
            });
    });
}
