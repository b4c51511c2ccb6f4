//! Scroll timeline for the portfolio tour.
//!
//! Turns a normalized scroll fraction into:
//! - the active [`Section`] (which scene subtree is shown),
//! - an interpolated [`CameraPose`] from the keyframed [`CameraTimeline`],
//! - the [`LightingProfile`] the renderer blends toward.
//!
//! Everything here is plain data and math so it can be tested without an app.

mod camera;
mod easing;
mod lighting;
mod mapper;
mod section;

pub use camera::{CameraPose, CameraTimeline, Keyframe, ScrubSmoother, Segment};
pub use easing::Ease;
pub use lighting::{LightingProfile, approach};
pub use mapper::{ScrollTracker, section_at, section_index, section_start};
pub use section::{SECTION_COUNT, SceneKind, Section};
