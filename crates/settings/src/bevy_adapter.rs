use bevy::{
    app::App,
    ecs::resource::Resource,
    prelude::{Deref, World},
};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

use crate::{Settings, SettingsStore};

const LOG_SETTINGS: &str = "settings";

#[derive(Resource, Clone)]
pub struct SettingsStoreRef(pub Arc<SettingsStore>);

/// Current value of one settings section, refreshed on reload.
#[derive(Resource, Deref, Clone)]
pub struct SettingsArc<T: Send + Sync + 'static>(pub Arc<T>);

#[derive(Resource, Default)]
struct SettingsRegistry {
    updaters: Vec<fn(&SettingsStore, &mut World)>,
}

pub trait AppSettingsExt {
    fn insert_settings_store(&mut self, store: SettingsStore) -> &mut Self;

    /// Registers `S` in the store and seeds `SettingsArc<S>`. Falls back to
    /// `S::default()` (logged) if the section can't be read.
    fn register_settings_section<S>(&mut self) -> &mut Self
    where
        S: Settings + Default + Serialize + DeserializeOwned;
}

impl AppSettingsExt for App {
    fn insert_settings_store(&mut self, store: SettingsStore) -> &mut Self {
        self.world_mut()
            .insert_resource(SettingsStoreRef(Arc::new(store)));
        self.world_mut()
            .insert_resource(SettingsRegistry::default());
        self
    }

    fn register_settings_section<S>(&mut self) -> &mut Self
    where
        S: Settings + Default + Serialize + DeserializeOwned,
    {
        let store = self
            .world()
            .get_resource::<SettingsStoreRef>()
            .map(|store| store.0.clone());

        let value = match store {
            Some(store) => store
                .register::<S>()
                .and_then(|()| store.get::<S>())
                .unwrap_or_else(|err| {
                    tracing::error!(
                        target: LOG_SETTINGS,
                        section = S::SECTION,
                        %err,
                        "falling back to default settings"
                    );
                    Arc::new(S::default())
                }),
            None => {
                tracing::warn!(
                    target: LOG_SETTINGS,
                    section = S::SECTION,
                    "no settings store inserted, using defaults"
                );
                Arc::new(S::default())
            }
        };
        self.world_mut().insert_resource(SettingsArc::<S>(value));

        fn update_one<S>(store: &SettingsStore, world: &mut World)
        where
            S: Settings + DeserializeOwned,
        {
            match store.get::<S>() {
                Ok(value) => world.insert_resource(SettingsArc::<S>(value)),
                Err(err) => tracing::warn!(
                    target: LOG_SETTINGS,
                    section = S::SECTION,
                    %err,
                    "keeping previous settings"
                ),
            }
        }

        if let Some(mut registry) = self.world_mut().get_resource_mut::<SettingsRegistry>() {
            registry.updaters.push(update_one::<S>);
        }
        self
    }
}

/// Re-reads the settings file and refreshes every registered
/// `SettingsArc<T>`. Meant to run as an exclusive system.
pub fn reload_settings(world: &mut World) {
    let Some(store) = world.get_resource::<SettingsStoreRef>().map(|s| s.0.clone()) else {
        return;
    };
    if let Err(err) = store.reload() {
        tracing::error!(target: LOG_SETTINGS, %err, "settings reload failed");
        return;
    }
    let updaters = world
        .get_resource::<SettingsRegistry>()
        .map(|registry| registry.updaters.clone())
        .unwrap_or_default();
    for update in updaters {
        update(&store, world);
    }
}

/// Applies `mutator` to section `S`, persists the delta and refreshes the
/// resource.
pub fn update_settings<S, F>(world: &mut World, mutator: F)
where
    S: Settings + Default + Serialize + DeserializeOwned,
    F: FnOnce(&mut S),
{
    let Some(store) = world.get_resource::<SettingsStoreRef>().map(|s| s.0.clone()) else {
        return;
    };
    let result = store.update::<S, _>(mutator).and_then(|()| store.get::<S>());
    match result {
        Ok(value) => world.insert_resource(SettingsArc::<S>(value)),
        Err(err) => tracing::error!(
            target: LOG_SETTINGS,
            section = S::SECTION,
            %err,
            "settings update failed"
        ),
    }
}
