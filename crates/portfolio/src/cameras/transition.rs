use super::{CameraTransitionState, TourCamera};
use app::LOG_CAMERA;
use bevy::{math::curve::EaseFunction, prelude::*};
use bevy_tweening::{AnimCompletedEvent, Tween, TweenAnim, lens::Lens};
use std::time::Duration;

const TRANSITION_DURATION: f32 = 0.6;

#[derive(Clone)]
struct TransformTweenLens {
    start: Transform,
    end: Transform,
}

impl Lens<Transform> for TransformTweenLens {
    fn lerp(&mut self, mut target: Mut<Transform>, ratio: f32) {
        target.translation = self.start.translation.lerp(self.end.translation, ratio);
        target.rotation = self.start.rotation.slerp(self.end.rotation, ratio);
        target.scale = self.start.scale.lerp(self.end.scale, ratio);
    }
}

/// Marks the camera entity whose tween hands over to the scroll driver.
#[derive(Component)]
struct IntroTransition;

/// Bundle that eases the camera from `start` to `end`.
pub(super) fn intro(start: Transform, end: Transform) -> impl Bundle {
    let tween = Tween::new(
        EaseFunction::QuadraticInOut,
        Duration::from_secs_f32(TRANSITION_DURATION),
        TransformTweenLens { start, end },
    );
    (IntroTransition, TweenAnim::new(tween))
}

pub struct CameraTransitionPlugin;

impl Plugin for CameraTransitionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, finish_transitions);
    }
}

fn finish_transitions(
    mut commands: Commands,
    mut completed: MessageReader<AnimCompletedEvent>,
    transitions: Query<(), (With<IntroTransition>, With<TourCamera>)>,
    mut state: ResMut<CameraTransitionState>,
) {
    for event in completed.read() {
        if transitions.get(event.anim_entity).is_err() {
            continue;
        }
        commands
            .entity(event.anim_entity)
            .remove::<(TweenAnim, IntroTransition)>();
        state.active = false;
        info!(target: LOG_CAMERA, "camera intro finished; following scroll");
    }
}
