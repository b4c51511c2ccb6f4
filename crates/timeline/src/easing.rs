use bevy::math::curve::{Curve, EaseFunction};

/// In-out easing curves used by the camera keyframes.
///
/// Named after the power ladder of the tour data: `Power1` is quadratic,
/// `Power4` quintic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power1InOut,
    #[default]
    Power2InOut,
    Power3InOut,
    Power4InOut,
}

impl Ease {
    pub fn function(self) -> EaseFunction {
        match self {
            Ease::Linear => EaseFunction::Linear,
            Ease::Power1InOut => EaseFunction::QuadraticInOut,
            Ease::Power2InOut => EaseFunction::CubicInOut,
            Ease::Power3InOut => EaseFunction::QuarticInOut,
            Ease::Power4InOut => EaseFunction::QuinticInOut,
        }
    }

    /// Eased value for `t`, with `t` clamped to `[0, 1]`.
    ///
    /// The endpoints are returned exactly.
    pub fn sample(self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        self.function().sample_clamped(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power1InOut,
        Ease::Power2InOut,
        Ease::Power3InOut,
        Ease::Power4InOut,
    ];

    #[test]
    fn exact_endpoints() {
        for ease in ALL {
            assert_eq!(ease.sample(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.sample(1.0), 1.0, "{ease:?}");
            assert_eq!(ease.sample(-1.0), 0.0, "{ease:?}");
            assert_eq!(ease.sample(2.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        for ease in ALL {
            assert!((ease.sample(0.5) - 0.5).abs() < 1e-5, "{ease:?}");
        }
    }

    #[test]
    fn higher_powers_start_slower() {
        let t = 0.25;
        let values: Vec<f32> = ALL.iter().map(|e| e.sample(t)).collect();
        for pair in values.windows(2) {
            assert!(pair[0] > pair[1], "{values:?}");
        }
    }
}
