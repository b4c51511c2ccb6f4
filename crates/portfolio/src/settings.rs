use bevy::prelude::*;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use settings::{AppSettingsExt, Settings, SettingsArc};
use std::sync::Arc;

/// Virtual page and wheel handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollSettings {
    /// Seconds the camera trails the scroll position.
    pub scrub_seconds: f32,
    /// Scrollable distance in viewport heights.
    pub scroll_pages: f32,
    pub line_height_px: f32,
    /// Fraction of the viewport moved by Page Up/Down.
    pub page_fraction: f32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 1.2,
            scroll_pages: 7.0,
            line_height_px: 40.0,
            page_fraction: 0.9,
        }
    }
}

impl Settings for ScrollSettings {
    const SECTION: &'static str = "scroll";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingSettings {
    pub min_display_secs: f32,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            min_display_secs: 3.0,
        }
    }
}

impl Settings for LoadingSettings {
    const SECTION: &'static str = "loading";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Portrait windows at most this wide show the rotate hint.
    pub mobile_max_width: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            mobile_max_width: 768.0,
        }
    }
}

impl Settings for ViewportSettings {
    const SECTION: &'static str = "viewport";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugSettings {
    pub scroll_overlay: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            scroll_overlay: cfg!(debug_assertions),
        }
    }
}

impl Settings for DebugSettings {
    const SECTION: &'static str = "debug";
}

/// Registers every section with the store inserted by the binary.
pub fn register_sections(app: &mut App) {
    app.register_settings_section::<ScrollSettings>()
        .register_settings_section::<LoadingSettings>()
        .register_settings_section::<ViewportSettings>()
        .register_settings_section::<DebugSettings>();
}

/// Seeds `SettingsArc<S>` with defaults unless a store already did.
pub(crate) fn init_settings<S>(app: &mut App)
where
    S: Settings + Default + Serialize + DeserializeOwned,
{
    if !app.world().contains_resource::<SettingsArc<S>>() {
        app.insert_resource(SettingsArc::<S>(Arc::new(S::default())));
    }
}
