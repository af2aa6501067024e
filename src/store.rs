//! Persistence for [`WheelSettings`] under a single fixed key.

use crate::config::SETTINGS_KEY;
use crate::settings::WheelSettings;
use std::cell::RefCell;
use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    /// No `localStorage` (private mode, disabled storage, not in a browser).
    Unavailable,
    Serialize(serde_json::Error),
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "Settings storage is unavailable"),
            StoreError::Serialize(e) => write!(f, "Failed to serialize settings: {}", e),
            StoreError::Write(msg) => write!(f, "Failed to write settings: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialize(e)
    }
}

pub trait SettingsStore {
    /// The stored settings, or `None` when nothing has been saved yet.
    fn load(&self) -> Option<WheelSettings>;

    /// # Errors
    /// Returns a [`StoreError`] when the settings could not be persisted.
    fn save(&self, settings: &WheelSettings) -> Result<(), StoreError>;
}

/// Browser `localStorage`, keyed by [`SETTINGS_KEY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl SettingsStore for LocalStorageStore {
    fn load(&self) -> Option<WheelSettings> {
        let storage = Self::storage().ok()?;
        let json = storage.get_item(SETTINGS_KEY).ok().flatten()?;
        Some(WheelSettings::from_json_or_default(&json))
    }

    fn save(&self, settings: &WheelSettings) -> Result<(), StoreError> {
        let json = serde_json::to_string(settings)?;
        Self::storage()?
            .set_item(SETTINGS_KEY, &json)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// In-memory store holding the serialized record, for tests and non-browser use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    json: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_json(json: &str) -> Self {
        Self {
            json: RefCell::new(Some(json.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.json.borrow().clone()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Option<WheelSettings> {
        self.json
            .borrow()
            .as_deref()
            .map(WheelSettings::from_json_or_default)
    }

    fn save(&self, settings: &WheelSettings) -> Result<(), StoreError> {
        *self.json.borrow_mut() = Some(serde_json::to_string(settings)?);
        Ok(())
    }
}

/// Settings to start with: whatever was saved, else defaults.
pub fn load_or_default(store: &impl SettingsStore) -> WheelSettings {
    store.load().unwrap_or_default()
}

/// Validate `draft`, persist it, and return what was saved.
///
/// A storage failure is logged, not returned: the settings still apply for
/// this session.
///
/// # Errors
/// Returns a [`crate::SettingsError`] when the draft cannot be clamped into a
/// usable configuration. Nothing is persisted in that case.
pub fn save_settings(
    store: &impl SettingsStore,
    draft: &WheelSettings,
) -> Result<WheelSettings, crate::SettingsError> {
    let settings = draft.validated().inspect_err(|e| {
        log::warn!("Settings rejected: {}", e);
    })?;
    match store.save(&settings) {
        Ok(()) => log::info!("Settings saved"),
        Err(e) => log::warn!("{}", e),
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsError;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryStore::default();
        assert_eq!(store.load(), None);
        assert_eq!(load_or_default(&store), WheelSettings::default());
    }

    #[test]
    fn saved_settings_load_back_clamped() {
        let store = MemoryStore::default();
        let draft = WheelSettings {
            sections: 500,
            flash_count: 4,
            ..WheelSettings::default()
        };
        let saved = save_settings(&store, &draft).unwrap();
        assert_eq!(saved.sections, 100);
        assert_eq!(load_or_default(&store), saved);
    }

    #[test]
    fn rejected_draft_is_not_persisted() {
        let store = MemoryStore::with_json(r#"{"sections":7}"#);
        let draft = WheelSettings {
            deceleration: 0.0,
            ..WheelSettings::default()
        };
        assert_eq!(
            save_settings(&store, &draft),
            Err(SettingsError::NonPositiveDeceleration(0.0))
        );
        assert_eq!(store.raw().as_deref(), Some(r#"{"sections":7}"#));
        assert_eq!(load_or_default(&store).sections, 7);
    }
}
