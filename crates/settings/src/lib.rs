//! Typed settings sections backed by a single RON delta file.
//!
//! 1. `#[derive(Default, Serialize, Deserialize)] struct ScrollSettings { .. }`
//! 2. `impl Settings for ScrollSettings { const SECTION: &str = "scroll"; }`
//! 3. `store.register::<ScrollSettings>()?` then `store.get::<ScrollSettings>()?`
//!
//! Only values that differ from `Default` are ever written back.

#[cfg(feature = "bevy")]
mod bevy_adapter;

mod settings;
mod store;

#[cfg(feature = "bevy")]
pub use bevy_adapter::*;

pub use settings::{Settings, SettingsError};
pub use store::{SettingsStore, SettingsStoreBuilder};
