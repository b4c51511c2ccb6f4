use super::{ContentMarker, FloatMotion, Palette, Spin, ring_point, spawn_root};
use crate::ExperienceState;
use crate::content::Content;
use bevy::prelude::*;
use timeline::SceneKind;

const CYAN: Color = Color::srgb(0.0, 1.0, 1.0);
const CORAL: Color = Color::srgb(1.0, 0.42, 0.42);
const ORBITERS: usize = 8;

pub(super) struct HeroScenePlugin;

impl Plugin for HeroScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_hero);
    }
}

fn spawn_hero(
    mut commands: Commands,
    content: Res<Content>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::Hero);

    commands
        .entity(root)
        .insert(Spin::y(0.01))
        .with_children(|scene| {
            // Name plate: two bars for the name, thinner ones for subtitle and tagline.
            scene.spawn((
                palette.mesh(Cuboid::new(10.0, 1.2, 0.2)),
                palette.glow(CYAN, 2.0),
                Transform::from_xyz(0.0, 2.0, 0.0),
                FloatMotion::new(2.0, 0.3, 0.8, 0.0),
                ContentMarker::new(content.brand.title.clone()),
            ));
            scene.spawn((
                palette.mesh(Cuboid::new(8.0, 1.2, 0.2)),
                palette.glow(CORAL, 2.0),
                Transform::default(),
                FloatMotion::new(0.0, 0.3, 0.8, 0.6),
            ));
            scene.spawn((
                palette.mesh(Cuboid::new(7.0, 0.3, 0.1)),
                palette.glow(Color::WHITE, 1.0),
                Transform::from_xyz(0.0, -1.5, 0.0),
            ));
            scene.spawn((
                palette.mesh(Cuboid::new(9.0, 0.15, 0.05)),
                palette.matte(Color::srgb(0.63, 0.63, 0.63)),
                Transform::from_xyz(0.0, -2.2, 0.0),
                ContentMarker::new(content.brand.tagline.clone()),
            ));

            let orb = palette.mesh(Sphere::new(0.3));
            for index in 0..ORBITERS {
                let position = ring_point(index, ORBITERS, 6.0, 0.3, 2.0);
                let color = if index % 2 == 0 { CYAN } else { CORAL };
                scene.spawn((
                    orb.clone(),
                    palette.glow(color, 3.0),
                    Transform::from_translation(position),
                    FloatMotion::new(position.y, 0.2, 1.5, index as f32),
                ));
            }

            scene.spawn((
                palette.mesh(Torus::new(7.8, 8.0)),
                palette.glow(CYAN.with_alpha(0.5), 1.0),
                Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                Spin::z(0.2),
            ));
        });
}
