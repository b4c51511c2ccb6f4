use super::{ContentMarker, FloatMotion, Palette, Spin, spawn_root, vec3};
use crate::ExperienceState;
use crate::content::{Content, color_from_hex};
use bevy::prelude::*;
use timeline::SceneKind;

pub(super) struct ProjectsScenePlugin;

impl Plugin for ProjectsScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_projects);
    }
}

fn spawn_projects(
    mut commands: Commands,
    content: Res<Content>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::Projects);
    let card = palette.mesh(Cuboid::new(3.8, 3.3, 0.15));
    let chip = palette.mesh(Sphere::new(0.12));

    commands.entity(root).with_children(|scene| {
        for (index, project) in content.projects.iter().enumerate() {
            let color = color_from_hex(&project.color);
            let position = vec3(project.position);

            scene
                .spawn((
                    card.clone(),
                    palette.glass(color, 0.3),
                    Transform::from_translation(position),
                    FloatMotion::new(position.y, 0.15, 0.7, index as f32),
                    ContentMarker::new(project.title.clone()),
                ))
                .with_children(|card| {
                    // One chip per technology along the bottom edge.
                    let count = project.tech.len().max(1) as f32;
                    for (slot, _tech) in project.tech.iter().enumerate() {
                        let x = (slot as f32 + 0.5) / count * 3.0 - 1.5;
                        card.spawn((
                            chip.clone(),
                            palette.glow(color, 2.0),
                            Transform::from_xyz(x, -1.3, 0.2),
                        ));
                    }
                });
        }

        scene.spawn((
            palette.mesh(Torus::new(0.8, 1.0)),
            palette.glow(Color::srgb(0.55, 0.36, 0.96), 2.0),
            Transform::from_xyz(0.0, 8.0, 0.0),
            Spin::y(0.5),
        ));
    });
}
