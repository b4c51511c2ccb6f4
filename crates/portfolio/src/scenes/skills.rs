use super::{ContentMarker, FloatMotion, Palette, Spin, spawn_root, vec3};
use crate::ExperienceState;
use crate::content::{Content, color_from_hex};
use bevy::prelude::*;
use timeline::SceneKind;

const NEURAL_CORE: Vec3 = Vec3::new(8.0, 8.5, 0.0);

pub(super) struct SkillsScenePlugin;

impl Plugin for SkillsScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_skills);
    }
}

fn spawn_skills(
    mut commands: Commands,
    content: Res<Content>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::Skills);
    let node = palette.mesh(Sphere::new(0.5));

    commands.entity(root).with_children(|scene| {
        scene
            .spawn((
                Transform::from_translation(NEURAL_CORE),
                Visibility::default(),
                Spin::y(0.1),
                Name::new("Neural Network"),
            ))
            .with_children(|network| {
                network.spawn((
                    palette.mesh(Sphere::new(1.0)),
                    palette.glow(Color::srgb(0.0, 1.0, 1.0), 3.0),
                    Transform::default(),
                ));

                for (index, skill) in content.skills.iter().enumerate() {
                    let position = vec3(skill.position);
                    network.spawn((
                        node.clone(),
                        palette.glow(color_from_hex(&skill.color), 1.5),
                        Transform::from_translation(position),
                        FloatMotion::new(position.y, 0.1, 1.2, index as f32 * 0.4),
                        ContentMarker::new(skill.name.clone()),
                    ));
                }
            });
    });
}
