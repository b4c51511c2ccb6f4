use crate::easing::Ease;
use crate::section::Section;
use bevy::math::{EulerRot, Quat, Vec3};
use bevy::transform::components::Transform;

/// Relative distance (in timeline seconds per total second) within which a
/// sampled time counts as sitting on a keyframe.
const BOUNDARY_SNAP: f32 = 1.0e-6;

/// Displayed progress snaps to the scroll progress once this close.
const SCRUB_SNAP: f32 = 1.0e-4;

/// Camera position plus Euler XYZ rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub translation: Vec3,
    pub rotation: Vec3,
}

impl CameraPose {
    pub const fn new(translation: Vec3, rotation: Vec3) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.quat(),
            scale: Vec3::ONE,
        }
    }
}

/// End pose of one timeline segment.
///
/// Keyframe `k` is the pose reached when the visitor scrolls out of
/// section `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub section: Section,
    pub pose: CameraPose,
    /// Timeline seconds; only the ratio between segments matters.
    pub duration: f32,
    pub position_ease: Ease,
    pub rotation_ease: Ease,
}

impl Keyframe {
    fn new(
        section: Section,
        translation: [f32; 3],
        rotation: [f32; 3],
        position_ease: Ease,
        rotation_ease: Ease,
    ) -> Self {
        Self {
            section,
            pose: CameraPose::new(Vec3::from_array(translation), Vec3::from_array(rotation)),
            duration: 2.0,
            position_ease,
            rotation_ease,
        }
    }
}

/// The active piece of the timeline at some progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub from: CameraPose,
    pub to: Keyframe,
    /// Position inside the segment, `0..=1`, before easing.
    pub local_t: f32,
}

impl Segment {
    pub fn pose(&self) -> CameraPose {
        if self.local_t <= 0.0 {
            return self.from;
        }
        if self.local_t >= 1.0 {
            return self.to.pose;
        }
        let position = self.to.position_ease.sample(self.local_t);
        let rotation = self.to.rotation_ease.sample(self.local_t);
        CameraPose {
            translation: self.from.translation.lerp(self.to.pose.translation, position),
            rotation: self.from.rotation.lerp(self.to.pose.rotation, rotation),
        }
    }
}

/// Camera path laid out over the whole scroll range.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTimeline {
    pub initial: CameraPose,
    pub keyframes: Vec<Keyframe>,
}

impl Default for CameraTimeline {
    fn default() -> Self {
        Self::default_tour()
    }
}

impl CameraTimeline {
    /// The nine-segment tour from deep space to the contact station.
    pub fn default_tour() -> Self {
        use Ease::*;
        use Section::*;

        Self {
            initial: CameraPose::new(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO),
            keyframes: vec![
                // dive into the workspace
                Keyframe::new(Hero, [0.0, 2.0, 8.0], [-0.1, 0.0, 0.0], Power2InOut, Power2InOut),
                // circle around the desk
                Keyframe::new(
                    WorkspaceEntry,
                    [5.0, 2.5, 10.0],
                    [-0.2, 0.8, 0.05],
                    Power2InOut,
                    Power2InOut,
                ),
                // zoom into the hologram
                Keyframe::new(WorkspaceActive, [0.0, 0.0, 3.0], [0.0, 0.0, 0.0], Power2InOut, Power3InOut),
                // wide view over the projects matrix
                Keyframe::new(About, [-12.0, 6.0, 15.0], [5.0, -0.8, -8.0], Power2InOut, Power2InOut),
                // pull back toward the skills network
                Keyframe::new(Projects, [0.0, -5.0, 25.0], [0.3, 0.0, 0.0], Power3InOut, Power1InOut),
                Keyframe::new(Skills, [5.0, 10.0, 35.0], [-0.4, 0.6, 0.0], Power2InOut, Power2InOut),
                // education timeline
                Keyframe::new(Education, [-2.0, 7.0, 65.0], [-0.4, 2.0, 0.0], Power3InOut, Power3InOut),
                // galaxy station
                Keyframe::new(Interests, [-2.0, 10.0, 70.0], [-0.2, 0.0, 0.0], Power4InOut, Power4InOut),
                // face the contact terminal
                Keyframe::new(Contact, [0.0, 15.0, 100.0], [0.0, 0.0, 0.0], Power2InOut, Power2InOut),
            ],
        }
    }

    pub fn total_duration(&self) -> f32 {
        self.keyframes.iter().map(|k| k.duration.max(0.0)).sum()
    }

    /// Progress at which keyframe `index` is reached.
    pub fn boundary_progress(&self, index: usize) -> f32 {
        let total = self.total_duration();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed: f32 = self
            .keyframes
            .iter()
            .take(index + 1)
            .map(|k| k.duration.max(0.0))
            .sum();
        (elapsed / total).min(1.0)
    }

    /// Segment active at `progress`, or `None` for an empty timeline.
    pub fn segment_at(&self, progress: f32) -> Option<Segment> {
        let total = self.total_duration();
        if self.keyframes.is_empty() || total <= 0.0 {
            return None;
        }

        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let time = p * total;
        let snap = BOUNDARY_SNAP * total.max(1.0);
        let last = self.keyframes.len() - 1;

        let mut start_time = 0.0;
        let mut from = self.initial;
        for (index, keyframe) in self.keyframes.iter().enumerate() {
            let duration = keyframe.duration.max(0.0);
            let end_time = start_time + duration;

            if (time - end_time).abs() <= snap {
                return Some(Segment {
                    index,
                    from,
                    to: *keyframe,
                    local_t: 1.0,
                });
            }
            if time < end_time || index == last {
                let local_t = if duration > 0.0 {
                    ((time - start_time) / duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                return Some(Segment {
                    index,
                    from,
                    to: *keyframe,
                    local_t,
                });
            }

            start_time = end_time;
            from = keyframe.pose;
        }
        None
    }

    pub fn pose_at(&self, progress: f32) -> CameraPose {
        self.segment_at(progress)
            .map(|segment| segment.pose())
            .unwrap_or(self.initial)
    }
}

/// Lets the displayed progress trail the scroll progress, like a scrubbed
/// scroll animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubSmoother {
    /// Roughly how long the camera needs to catch up, in seconds.
    pub lag_secs: f32,
}

impl Default for ScrubSmoother {
    fn default() -> Self {
        Self { lag_secs: 1.2 }
    }
}

impl ScrubSmoother {
    pub fn new(lag_secs: f32) -> Self {
        Self { lag_secs }
    }

    pub fn step(&self, current: f32, target: f32, dt_secs: f32) -> f32 {
        if self.lag_secs <= 0.0 || !current.is_finite() {
            return target;
        }
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return current;
        }

        // ~95 % of the gap is closed after `lag_secs`
        let rate = 3.0 / self.lag_secs;
        let alpha = 1.0 - (-rate * dt_secs).exp();
        let next = current + (target - current) * alpha;
        if (target - next).abs() < SCRUB_SNAP {
            target
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tour_has_one_segment_per_section() {
        let tour = CameraTimeline::default_tour();
        assert_eq!(tour.keyframes.len(), crate::SECTION_COUNT);
        for (index, keyframe) in tour.keyframes.iter().enumerate() {
            assert_eq!(keyframe.section.index(), index);
        }
        assert_eq!(tour.total_duration(), 18.0);
    }

    #[test]
    fn start_and_end_poses() {
        let tour = CameraTimeline::default_tour();
        assert_eq!(tour.pose_at(0.0), tour.initial);
        assert_eq!(tour.pose_at(1.0), tour.keyframes.last().unwrap().pose);
        assert_eq!(tour.pose_at(-4.0), tour.initial);
        assert_eq!(tour.pose_at(9.0), tour.keyframes.last().unwrap().pose);
    }

    #[test]
    fn boundaries_hit_keyframes_exactly() {
        let tour = CameraTimeline::default_tour();
        for (index, keyframe) in tour.keyframes.iter().enumerate() {
            let p = tour.boundary_progress(index);
            assert_eq!(tour.pose_at(p), keyframe.pose, "keyframe {index}");
        }
    }

    #[test]
    fn segment_midpoint_is_between_endpoints() {
        let tour = CameraTimeline::default_tour();
        let mid = tour.boundary_progress(0) / 2.0;
        let pose = tour.pose_at(mid);
        // Power2 in-out is symmetric, so the midpoint is the halfway pose
        let expected = tour.initial.translation.lerp(tour.keyframes[0].pose.translation, 0.5);
        assert!((pose.translation - expected).length() < 1e-4);
    }

    #[test]
    fn empty_timeline_holds_initial_pose() {
        let timeline = CameraTimeline {
            initial: CameraPose::new(Vec3::ONE, Vec3::ZERO),
            keyframes: Vec::new(),
        };
        assert_eq!(timeline.segment_at(0.5), None);
        assert_eq!(timeline.pose_at(0.5), timeline.initial);
    }

    #[test]
    fn smoother_converges_without_overshoot() {
        let smoother = ScrubSmoother::default();
        let mut value = 0.0;
        for _ in 0..240 {
            value = smoother.step(value, 1.0, 1.0 / 60.0);
            assert!(value <= 1.0);
        }
        assert_eq!(value, 1.0);
    }

    #[test]
    fn smoother_is_frame_rate_independent() {
        let smoother = ScrubSmoother::new(1.2);
        let mut fast = 0.0;
        for _ in 0..120 {
            fast = smoother.step(fast, 1.0, 1.0 / 120.0);
        }
        let mut slow = 0.0;
        for _ in 0..30 {
            slow = smoother.step(slow, 1.0, 1.0 / 30.0);
        }
        assert!((fast - slow).abs() < 1e-3, "{fast} vs {slow}");
    }

    #[test]
    fn zero_lag_follows_immediately() {
        let smoother = ScrubSmoother::new(0.0);
        assert_eq!(smoother.step(0.1, 0.7, 1.0 / 60.0), 0.7);
    }
}
