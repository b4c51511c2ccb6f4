//! The tour camera.
//!
//! A rig entity carries the shake rotation; its `Camera3d` child follows the
//! keyframed [`CameraTimeline`] at the smoothed scroll progress.

mod transition;

use crate::scroll::ScrollState;
use crate::utils::cleanup;
use crate::{ExperienceSet, ExperienceState};
use app::LOG_CAMERA;
use bevy::prelude::*;
use rand::Rng;
use timeline::{CameraTimeline, LightingProfile};

pub use transition::CameraTransitionPlugin;

/// Where the camera sits before the intro transition.
pub const CANVAS_START: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const FOV_DEGREES: f32 = 60.0;

const SHAKE_STEP: f32 = 0.0005;
const SHAKE_LIMIT: f32 = 0.02;
/// Fraction of the remaining shake kept per second once it stops.
const SHAKE_SETTLE: f32 = 0.02;

/// Marker for the rig parent.
#[derive(Component)]
pub struct CameraRig;

/// Marker for the rendering camera under the rig.
#[derive(Component)]
pub struct TourCamera;

/// The keyframed path the camera follows.
#[derive(Resource, Debug, Clone, Default, Deref)]
pub struct Tour(pub CameraTimeline);

/// Tracks whether a camera transition animation is currently running.
#[derive(Resource, Default)]
pub struct CameraTransitionState {
    pub active: bool,
}

/// Accumulated rig jitter (pitch, yaw).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct RigShake {
    pub pitch: f32,
    pub yaw: f32,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraDriverPlugin, CameraTransitionPlugin))
            .add_systems(OnEnter(ExperienceState::Exploring), spawn_camera_rig)
            .add_systems(OnExit(ExperienceState::Exploring), cleanup::<CameraRig>);
    }
}

/// Moves whatever [`TourCamera`] and [`CameraRig`] exist; spawns nothing.
pub struct CameraDriverPlugin;

impl Plugin for CameraDriverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Tour>()
            .init_resource::<CameraTransitionState>()
            .add_systems(
                Update,
                (drive_camera, shake_rig).in_set(ExperienceSet::Present),
            )
            .add_systems(OnExit(ExperienceState::Exploring), reset_transition);
    }
}

fn reset_transition(mut transition: ResMut<CameraTransitionState>) {
    transition.active = false;
}

/// Start pose used before the timeline takes over.
pub fn canvas_start_transform() -> Transform {
    Transform::from_translation(CANVAS_START).looking_at(Vec3::ZERO, Vec3::Y)
}

fn spawn_camera_rig(
    mut commands: Commands,
    tour: Res<Tour>,
    mut transition_state: ResMut<CameraTransitionState>,
) {
    transition_state.active = true;
    info!(target: LOG_CAMERA, "camera intro started");

    let intro = transition::intro(canvas_start_transform(), tour.initial.to_transform());
    commands
        .spawn((
            CameraRig,
            RigShake::default(),
            Transform::default(),
            Visibility::default(),
            Name::new("Camera Rig"),
        ))
        .with_children(|rig| {
            rig.spawn((
                Camera3d::default(),
                Projection::Perspective(PerspectiveProjection {
                    fov: FOV_DEGREES.to_radians(),
                    ..default()
                }),
                canvas_start_transform(),
                TourCamera,
                intro,
                Name::new("Tour Camera"),
            ));
        });
}

fn drive_camera(
    state: Res<ScrollState>,
    tour: Res<Tour>,
    transition: Res<CameraTransitionState>,
    mut cameras: Query<&mut Transform, With<TourCamera>>,
) {
    if transition.active {
        return;
    }
    let pose = tour.pose_at(state.display_progress());
    for mut transform in &mut cameras {
        transform.translation = pose.translation;
        transform.rotation = pose.quat();
    }
}

fn shake_rig(
    time: Res<Time>,
    state: Res<ScrollState>,
    mut rigs: Query<(&mut Transform, &mut RigShake), With<CameraRig>>,
) {
    let shaking = LightingProfile::for_section(state.section()).shake;
    let mut rng = rand::rng();

    for (mut transform, mut shake) in &mut rigs {
        if shaking {
            shake.pitch = (shake.pitch + rng.random_range(-SHAKE_STEP..=SHAKE_STEP))
                .clamp(-SHAKE_LIMIT, SHAKE_LIMIT);
            shake.yaw = (shake.yaw + rng.random_range(-SHAKE_STEP..=SHAKE_STEP))
                .clamp(-SHAKE_LIMIT, SHAKE_LIMIT);
        } else {
            let keep = SHAKE_SETTLE.powf(time.delta_secs());
            shake.pitch *= keep;
            shake.yaw *= keep;
        }
        transform.rotation = Quat::from_euler(EulerRot::XYZ, shake.pitch, shake.yaw, 0.0);
    }
}
