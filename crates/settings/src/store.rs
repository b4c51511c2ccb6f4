use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Settings, SettingsError};

use ron::value::{Map as RonMap, Value as RonValue};
use serde::{Serialize, de::DeserializeOwned};

const LOG_SETTINGS: &str = "settings";

/// Checks that a merged section still deserializes into its type.
type Validator = fn(RonValue) -> Result<(), ron::Error>;

fn validate<T: DeserializeOwned>(value: RonValue) -> Result<(), ron::Error> {
    value.into_rust::<T>().map(|_| ())
}

/// Default overlaid with `delta`, or the plain default when the delta is not
/// a map or doesn't fit the section type.
fn merge_section(
    section: &'static str,
    default_map: &RonMap,
    delta: Option<&RonValue>,
    validator: Validator,
) -> RonValue {
    let Some(delta) = delta else {
        return RonValue::Map(default_map.clone());
    };
    let RonValue::Map(delta_map) = delta else {
        tracing::warn!(
            target: LOG_SETTINGS,
            section,
            "delta is not a map, using defaults"
        );
        return RonValue::Map(default_map.clone());
    };

    let merged = RonValue::Map(merge_maps(default_map, delta_map));
    match validator(merged.clone()) {
        Ok(()) => merged,
        Err(err) => {
            tracing::warn!(
                target: LOG_SETTINGS,
                section,
                %err,
                "invalid delta, using defaults"
            );
            RonValue::Map(default_map.clone())
        }
    }
}

fn to_ron_value<T: Serialize>(value: &T) -> Result<RonValue, SettingsError> {
    let text = ron::to_string(value)?;
    ron::from_str(&text).map_err(|source| SettingsError::Parse {
        path: PathBuf::from("<in-memory>"),
        source,
    })
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Overlay `delta` onto `default`, recursing into nested maps.
fn merge_maps(default: &RonMap, delta: &RonMap) -> RonMap {
    let mut merged = default.clone();
    for (key, delta_value) in delta.iter() {
        let value = match (merged.get(key), delta_value) {
            (Some(RonValue::Map(default_map)), RonValue::Map(delta_map)) => {
                RonValue::Map(merge_maps(default_map, delta_map))
            }
            _ => delta_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

/// Entries of `current` that differ from `default`, recursing into nested maps.
fn diff_map(current: &RonMap, default: &RonMap) -> RonMap {
    let mut out = RonMap::new();
    for (key, value) in current.iter() {
        match (default.get(key), value) {
            (Some(RonValue::Map(default_sub)), RonValue::Map(current_sub)) => {
                let sub = diff_map(current_sub, default_sub);
                if !sub.is_empty() {
                    out.insert(key.clone(), RonValue::Map(sub));
                }
            }
            (Some(default_value), _) if default_value == value => {}
            _ => {
                out.insert(key.clone(), value.clone());
            }
        }
    }
    out
}

fn read_deltas(path: &Path) -> Result<HashMap<String, RonValue>, SettingsError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }
    ron::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub struct SettingsStoreBuilder {
    settings_file: Option<PathBuf>,
}

impl SettingsStoreBuilder {
    pub fn new() -> Self {
        Self {
            settings_file: None,
        }
    }

    pub fn with_settings_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    /// Reads the delta file if it exists. A missing file means "all defaults".
    pub fn build(self) -> Result<SettingsStore, SettingsError> {
        let file_path = self.settings_file.ok_or(SettingsError::MissingFile)?;

        if let Some(dir) = file_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let deltas = read_deltas(&file_path)?;
        tracing::debug!(
            target: LOG_SETTINGS,
            path = %file_path.display(),
            sections = deltas.len(),
            "settings store opened"
        );

        Ok(SettingsStore {
            file_path,
            deltas: RwLock::new(deltas),
            defaults: RwLock::new(HashMap::new()),
            validators: RwLock::new(HashMap::new()),
            values: RwLock::new(HashMap::new()),
        })
    }
}

impl Default for SettingsStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe settings store.
///
/// Effective value of a section = its `Default` overlaid with the section's
/// entry in the delta file. Keys the struct doesn't know are ignored.
pub struct SettingsStore {
    file_path: PathBuf,
    deltas: RwLock<HashMap<String, RonValue>>,
    defaults: RwLock<HashMap<&'static str, RonMap>>,
    validators: RwLock<HashMap<&'static str, Validator>>,
    values: RwLock<HashMap<&'static str, RonValue>>,
}

impl SettingsStore {
    pub fn builder() -> SettingsStoreBuilder {
        SettingsStoreBuilder::new()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_registered<T: Settings>(&self) -> bool {
        read(&self.values).contains_key(T::name())
    }

    /// Registers a section and applies any delta already loaded for it.
    ///
    /// A delta that doesn't deserialize into `T` is logged and the defaults
    /// are used instead.
    pub fn register<T>(&self) -> Result<(), SettingsError>
    where
        T: Settings + Default + Serialize + DeserializeOwned,
    {
        let section = T::name();
        if self.is_registered::<T>() {
            return Err(SettingsError::AlreadyRegistered(section));
        }

        let RonValue::Map(default_map) = to_ron_value(&T::default())? else {
            return Err(SettingsError::NotAMap(section));
        };

        let merged = merge_section(
            section,
            &default_map,
            read(&self.deltas).get(section),
            validate::<T>,
        );
        write(&self.defaults).insert(section, default_map);
        write(&self.validators).insert(section, validate::<T>);
        write(&self.values).insert(section, merged);
        Ok(())
    }

    /// Snapshot of the effective section value.
    pub fn get<T>(&self) -> Result<Arc<T>, SettingsError>
    where
        T: Settings + DeserializeOwned,
    {
        self.try_get::<T>()?
            .ok_or(SettingsError::NotRegistered(T::name()))
    }

    /// Like [`Self::get`], but `None` for an unregistered section.
    pub fn try_get<T>(&self) -> Result<Option<Arc<T>>, SettingsError>
    where
        T: Settings + DeserializeOwned,
    {
        let value = read(&self.values).get(T::name()).cloned();
        match value {
            Some(value) => Ok(Some(Arc::new(value.into_rust::<T>()?))),
            None => Ok(None),
        }
    }

    /// Mutates a section and persists only the fields that now differ from
    /// the defaults.
    pub fn update<T, F>(&self, mutator: F) -> Result<(), SettingsError>
    where
        T: Settings + Default + Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let section = T::name();
        let value = read(&self.values)
            .get(section)
            .cloned()
            .ok_or(SettingsError::NotRegistered(section))?;
        let mut current: T = value.into_rust()?;
        mutator(&mut current);

        let RonValue::Map(new_map) = to_ron_value(&current)? else {
            return Err(SettingsError::NotAMap(section));
        };

        let diff = {
            let defaults = read(&self.defaults);
            let default_map = defaults
                .get(section)
                .ok_or(SettingsError::NotRegistered(section))?;
            diff_map(&new_map, default_map)
        };

        write(&self.values).insert(section, RonValue::Map(new_map));
        {
            let mut deltas = write(&self.deltas);
            if diff.is_empty() {
                deltas.remove(section);
            } else {
                deltas.insert(section.to_string(), RonValue::Map(diff));
            }
        }

        self.persist_deltas()
    }

    /// Re-reads the delta file and re-merges every registered section.
    ///
    /// On a parse error the previous values stay in place. A section whose
    /// new delta doesn't fit its type falls back to the defaults, the same as
    /// at registration.
    pub fn reload(&self) -> Result<(), SettingsError> {
        let new_deltas = read_deltas(&self.file_path)?;
        *write(&self.deltas) = new_deltas;

        let defaults = read(&self.defaults).clone();
        let validators = read(&self.validators).clone();
        let deltas = read(&self.deltas);
        let mut values = write(&self.values);

        for (section, default_map) in defaults {
            let Some(&validator) = validators.get(section) else {
                continue;
            };
            let merged = merge_section(section, &default_map, deltas.get(section), validator);
            values.insert(section, merged);
        }

        tracing::info!(
            target: LOG_SETTINGS,
            path = %self.file_path.display(),
            "settings reloaded"
        );
        Ok(())
    }

    fn persist_deltas(&self) -> Result<(), SettingsError> {
        let clean: HashMap<String, RonValue> = read(&self.deltas)
            .iter()
            .filter(|(_, value)| !matches!(value, RonValue::Map(map) if map.is_empty()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let pretty = ron::ser::PrettyConfig::default();
        let text = ron::ser::to_string_pretty(&clean, pretty)?;

        let tmp = self.file_path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.file_path)?;
        Ok(())
    }
}
