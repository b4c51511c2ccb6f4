use super::SceneRoot;
use bevy::prelude::*;

/// Constant rotation about a local axis.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
    pub axis: Vec3,
    /// Radians per second.
    pub speed: f32,
}

impl Spin {
    pub fn y(speed: f32) -> Self {
        Self {
            axis: Vec3::Y,
            speed,
        }
    }

    pub fn z(speed: f32) -> Self {
        Self {
            axis: Vec3::Z,
            speed,
        }
    }
}

/// Bobbing around `base_y`.
#[derive(Component, Debug, Clone, Copy)]
pub struct FloatMotion {
    pub base_y: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
}

impl FloatMotion {
    pub fn new(base_y: f32, amplitude: f32, speed: f32, phase: f32) -> Self {
        Self {
            base_y,
            amplitude,
            speed,
            phase,
        }
    }

    pub fn offset_at(&self, elapsed_secs: f32) -> f32 {
        (elapsed_secs * self.speed + self.phase).sin() * self.amplitude
    }
}

type Animated<'a> = (&'a mut Transform, Option<&'a Spin>, Option<&'a FloatMotion>);

/// Hidden scenes keep their last pose.
pub(super) fn animate_visible_scenes(
    time: Res<Time>,
    roots: Query<(Entity, &Visibility), With<SceneRoot>>,
    children: Query<&Children>,
    mut animated: Query<Animated, Or<(With<Spin>, With<FloatMotion>)>>,
) {
    let dt = time.delta_secs();
    let elapsed = time.elapsed_secs();

    for (root, visibility) in &roots {
        if *visibility == Visibility::Hidden {
            continue;
        }
        for entity in std::iter::once(root).chain(children.iter_descendants(root)) {
            let Ok((mut transform, spin, float)) = animated.get_mut(entity) else {
                continue;
            };
            if let Some(spin) = spin {
                transform.rotate_local(Quat::from_axis_angle(spin.axis, spin.speed * dt));
            }
            if let Some(float) = float {
                transform.translation.y = float.base_y + float.offset_at(elapsed);
            }
        }
    }
}
