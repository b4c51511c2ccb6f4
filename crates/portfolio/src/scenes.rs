//! Decorative 3D scenes, one subtree per [`SceneKind`].
//!
//! Every scene spawns a [`SceneRoot`] at its world offset when exploring
//! starts. Only the roots whose kind is visible in the current section are
//! shown, and only those are animated.

mod about;
mod animators;
mod contact;
mod education;
mod hero;
mod interests;
mod projects;
mod skills;
mod workspace;

use crate::scroll::ScrollState;
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_UI;
use bevy::prelude::*;
use timeline::{SceneKind, Section};

pub use animators::{FloatMotion, Spin};

/// Root of one scene subtree.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRoot(pub SceneKind);

/// Tags the entity standing in for one content item (a project, a skill, ..).
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ContentMarker {
    pub label: String,
}

impl ContentMarker {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// World offset of a scene root.
pub fn scene_offset(kind: SceneKind) -> Vec3 {
    match kind {
        SceneKind::Hero | SceneKind::Workspace => Vec3::ZERO,
        SceneKind::About => Vec3::new(0.0, 2.0, 5.0),
        SceneKind::Projects => Vec3::new(-2.0, 2.0, -10.0),
        SceneKind::Skills => Vec3::new(-4.0, 5.0, 20.0),
        SceneKind::Education => Vec3::new(-1.0, 0.0, 25.0),
        SceneKind::Interests => Vec3::new(0.0, 4.0, 10.0),
        SceneKind::Contact => Vec3::new(0.0, 10.0, 65.0),
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SceneVisibilityPlugin,
            hero::HeroScenePlugin,
            workspace::WorkspaceScenePlugin,
            about::AboutScenePlugin,
            projects::ProjectsScenePlugin,
            skills::SkillsScenePlugin,
            education::EducationScenePlugin,
            interests::InterestsScenePlugin,
            contact::ContactScenePlugin,
        ));
    }
}

/// Section-driven visibility and idle animation for whatever roots exist.
pub struct SceneVisibilityPlugin;

impl Plugin for SceneVisibilityPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (update_scene_visibility, animators::animate_visible_scenes)
                .chain()
                .in_set(ExperienceSet::Present),
        )
        .add_systems(OnExit(ExperienceState::Exploring), cleanup::<SceneRoot>);
    }
}

fn update_scene_visibility(
    state: Res<ScrollState>,
    mut roots: Query<(&SceneRoot, &mut Visibility)>,
) {
    let section = state.section();
    for (root, mut visibility) in &mut roots {
        let wanted = if root.0.visible_in(section) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if visibility.set_if_neq(wanted) && wanted == Visibility::Visible {
            debug!(target: LOG_UI, scene = root.0.name(), %section, "scene shown");
        }
    }
}

/// Spawns an empty scene root, shown only if it belongs to the first section.
pub(crate) fn spawn_root(commands: &mut Commands, kind: SceneKind) -> Entity {
    let visibility = if kind.visible_in(Section::FIRST) {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    commands
        .spawn((
            SceneRoot(kind),
            Transform::from_translation(scene_offset(kind)),
            visibility,
            Name::new(format!("{} Scene", kind.name())),
        ))
        .id()
}

/// Mesh and material handles for building one scene.
pub(crate) struct Palette<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
}

impl<'a> Palette<'a> {
    pub(crate) fn new(
        meshes: &'a mut Assets<Mesh>,
        materials: &'a mut Assets<StandardMaterial>,
    ) -> Self {
        Self { meshes, materials }
    }

    pub(crate) fn mesh(&mut self, mesh: impl Into<Mesh>) -> Mesh3d {
        Mesh3d(self.meshes.add(mesh))
    }

    pub(crate) fn matte(&mut self, color: Color) -> MeshMaterial3d<StandardMaterial> {
        MeshMaterial3d(self.materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.8,
            ..default()
        }))
    }

    /// Self-lit material; `strength` scales the emissive colour.
    pub(crate) fn glow(&mut self, color: Color, strength: f32) -> MeshMaterial3d<StandardMaterial> {
        MeshMaterial3d(self.materials.add(StandardMaterial {
            base_color: color,
            emissive: color.to_linear() * strength,
            ..default()
        }))
    }

    /// See-through panel.
    pub(crate) fn glass(&mut self, color: Color, alpha: f32) -> MeshMaterial3d<StandardMaterial> {
        MeshMaterial3d(self.materials.add(StandardMaterial {
            base_color: color.with_alpha(alpha),
            emissive: color.to_linear() * 0.3,
            alpha_mode: AlphaMode::Blend,
            ..default()
        }))
    }
}

/// Point on a flattened ring, as the orbiting decorations use.
pub(crate) fn ring_point(index: usize, count: usize, radius: f32, squash: f32, depth: f32) -> Vec3 {
    let angle = index as f32 / count.max(1) as f32 * std::f32::consts::TAU;
    Vec3::new(
        angle.cos() * radius,
        angle.sin() * radius * squash,
        angle.sin() * depth,
    )
}

/// `[x, y, z]` from the content file.
pub(crate) fn vec3(position: [f32; 3]) -> Vec3 {
    Vec3::from_array(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_points_are_spread_evenly() {
        let first = ring_point(0, 8, 6.0, 0.3, 2.0);
        assert!((first - Vec3::new(6.0, 0.0, 0.0)).length() < 1e-5);

        let quarter = ring_point(2, 8, 6.0, 0.3, 2.0);
        assert!((quarter - Vec3::new(0.0, 1.8, 2.0)).length() < 1e-4);
    }

    #[test]
    fn only_the_first_scene_starts_visible() {
        let visible: Vec<_> = SceneKind::iter()
            .filter(|kind| kind.visible_in(Section::FIRST))
            .collect();
        assert_eq!(visible, vec![SceneKind::Hero]);
    }
}
