use super::{ContentMarker, FloatMotion, Palette, Spin, spawn_root, vec3};
use crate::ExperienceState;
use crate::content::{Content, color_from_hex};
use bevy::prelude::*;
use timeline::SceneKind;

pub(super) struct InterestsScenePlugin;

impl Plugin for InterestsScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_interests);
    }
}

fn spawn_interests(
    mut commands: Commands,
    content: Res<Content>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::Interests);
    let planet = palette.mesh(Sphere::new(1.0));
    let ring = palette.mesh(Torus::new(1.3, 1.4));

    commands
        .entity(root)
        .insert(Spin::y(0.02))
        .with_children(|scene| {
            scene.spawn((
                palette.mesh(Sphere::new(1.8)),
                palette.glow(Color::srgb(1.0, 0.85, 0.24), 4.0),
                Transform::default(),
                Name::new("Galaxy Core"),
            ));

            for (index, interest) in content.interests.iter().enumerate() {
                let color = color_from_hex(&interest.color);
                let position = vec3(interest.position);
                scene
                    .spawn((
                        planet.clone(),
                        palette.glow(color, 1.2),
                        Transform::from_translation(position),
                        Spin::y(0.3 + index as f32 * 0.05),
                        FloatMotion::new(position.y, 0.2, 0.8, index as f32),
                        ContentMarker::new(interest.name.clone()),
                    ))
                    .with_children(|planet| {
                        planet.spawn((ring.clone(), palette.glass(color, 0.4), Transform::default()));
                    });
            }
        });
}
