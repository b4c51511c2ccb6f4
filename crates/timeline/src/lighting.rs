use crate::section::Section;

/// Fraction of the remaining gap closed per 60 Hz frame.
const BLEND_PER_FRAME: f32 = 0.02;
const REFERENCE_FPS: f32 = 60.0;

/// Target light levels for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingProfile {
    pub ambient: f32,
    pub key: f32,
    pub rim: f32,
    /// Camera jitter while in the education tunnel.
    pub shake: bool,
}

impl LightingProfile {
    pub fn for_section(section: Section) -> Self {
        let ambient = match section {
            Section::Hero => 0.1,
            Section::Education => 0.05,
            _ => 0.3,
        };
        let key = if section <= Section::WorkspaceActive {
            1.5
        } else {
            0.8
        };
        let rim = if section >= Section::Education { 2.0 } else { 0.5 };

        Self {
            ambient,
            key,
            rim,
            shake: section == Section::Education,
        }
    }
}

/// Moves `current` toward `target` at the fixed per-frame blend rate,
/// scaled by the real frame time.
pub fn approach(current: f32, target: f32, dt_secs: f32) -> f32 {
    if !current.is_finite() {
        return target;
    }
    if !dt_secs.is_finite() || dt_secs <= 0.0 {
        return current;
    }
    let keep = (1.0 - BLEND_PER_FRAME).powf(dt_secs * REFERENCE_FPS);
    target + (current - target) * keep
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_targets() {
        let hero = LightingProfile::for_section(Section::Hero);
        assert_eq!(hero.ambient, 0.1);
        assert_eq!(hero.key, 1.5);
        assert_eq!(hero.rim, 0.5);
        assert!(!hero.shake);

        let education = LightingProfile::for_section(Section::Education);
        assert_eq!(education.ambient, 0.05);
        assert_eq!(education.key, 0.8);
        assert_eq!(education.rim, 2.0);
        assert!(education.shake);

        let contact = LightingProfile::for_section(Section::Contact);
        assert_eq!(contact.ambient, 0.3);
        assert_eq!(contact.rim, 2.0);
        assert!(!contact.shake);
    }

    #[test]
    fn one_reference_frame_blends_two_percent() {
        let next = approach(0.0, 1.0, 1.0 / 60.0);
        assert!((next - 0.02).abs() < 1e-5, "{next}");
    }

    #[test]
    fn approach_never_overshoots() {
        let mut value = 0.1;
        for _ in 0..1000 {
            value = approach(value, 0.3, 1.0 / 144.0);
            assert!(value <= 0.3 + f32::EPSILON);
        }
        assert!((value - 0.3).abs() < 1e-2);
    }

    #[test]
    fn zero_dt_holds() {
        assert_eq!(approach(0.4, 1.0, 0.0), 0.4);
        assert_eq!(approach(f32::NAN, 1.0, 0.016), 1.0);
    }
}
