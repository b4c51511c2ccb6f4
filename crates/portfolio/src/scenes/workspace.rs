use super::{FloatMotion, Palette, spawn_root};
use crate::ExperienceState;
use bevy::prelude::*;
use timeline::SceneKind;

const SCREEN_BLUE: Color = Color::srgb(0.0, 0.53, 1.0);
const DESK: Color = Color::srgb(0.18, 0.2, 0.25);

pub(super) struct WorkspaceScenePlugin;

impl Plugin for WorkspaceScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ExperienceState::Exploring), spawn_workspace);
    }
}

fn spawn_workspace(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut palette = Palette::new(&mut meshes, &mut materials);
    let root = spawn_root(&mut commands, SceneKind::Workspace);

    commands.entity(root).with_children(|scene| {
        scene.spawn((
            palette.mesh(Cuboid::new(12.0, 0.4, 6.0)),
            palette.matte(DESK),
            Transform::from_xyz(0.0, -1.5, 0.0),
            Name::new("Desk"),
        ));

        // Monitor on its stand, set back from the desk edge.
        scene
            .spawn((Transform::from_xyz(0.0, 0.0, -2.0), Visibility::default()))
            .with_children(|monitor| {
                monitor.spawn((
                    palette.mesh(Cuboid::new(0.6, 2.0, 0.6)),
                    palette.matte(DESK),
                    Transform::from_xyz(0.0, -0.5, -1.0),
                ));
                monitor.spawn((
                    palette.mesh(Cuboid::new(2.0, 0.1, 1.0)),
                    palette.matte(DESK),
                    Transform::from_xyz(0.0, -1.3, -0.2),
                ));
                monitor.spawn((
                    palette.mesh(Cuboid::new(8.0, 5.0, 0.2)),
                    palette.matte(Color::srgb(0.1, 0.1, 0.12)),
                    Transform::from_xyz(0.0, 1.5, 0.0),
                ));
                monitor.spawn((
                    palette.mesh(Cuboid::new(7.6, 4.6, 0.02)),
                    palette.glow(SCREEN_BLUE, 1.5),
                    Transform::from_xyz(0.0, 1.5, 0.12),
                    Name::new("Screen"),
                ));
            });

        scene.spawn((
            palette.mesh(Cuboid::new(4.0, 0.15, 1.4)),
            palette.matte(Color::srgb(0.25, 0.25, 0.3)),
            Transform::from_xyz(0.0, -1.2, 1.5),
            Name::new("Keyboard"),
        ));

        // Floating code panels around the monitor.
        let panel = palette.mesh(Cuboid::new(2.2, 1.4, 0.05));
        for (index, position) in [
            Vec3::new(-6.0, 2.5, -1.0),
            Vec3::new(6.0, 2.0, -1.5),
            Vec3::new(0.0, 5.5, -3.0),
        ]
        .into_iter()
        .enumerate()
        {
            scene.spawn((
                panel.clone(),
                palette.glass(Color::srgb(0.0, 1.0, 0.53), 0.35),
                Transform::from_translation(position),
                FloatMotion::new(position.y, 0.25, 1.0, index as f32 * 1.3),
            ));
        }
    });
}
