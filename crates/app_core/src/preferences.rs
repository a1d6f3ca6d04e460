//! Persisted user preferences
//!
//! A flat string key/value store. The only key the site writes is
//! [`LANG_KEY`]; values it does not recognize are ignored on read.

use crate::i18n::Language;
use crate::AppError;
use directories::ProjectDirs;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Key of the stored language preference
pub const LANG_KEY: &str = "lang";

/// String key/value preference storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Preferences kept in a TOML file
///
/// The file is read once when the store is opened; every `set` rewrites it.
/// A missing or unreadable file starts an empty store.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at the default location
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Open the store backed by `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            return BTreeMap::new();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to read preferences {:?}: {}", path, e);
                return BTreeMap::new();
            }
        };

        match toml::from_str(&content) {
            Ok(values) => {
                tracing::info!("Preferences loaded from {:?}", path);
                values
            }
            Err(e) => {
                tracing::warn!("Ignoring corrupt preferences {:?}: {}", path, e);
                BTreeMap::new()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the preferences file path
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "PortfolioViewer", "PortfolioViewer")
            .map(|dirs| dirs.data_dir().join("preferences.toml"))
            .unwrap_or_else(|| PathBuf::from("./preferences.toml"))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string(&self.values)
            .map_err(|e| AppError::Preference(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        tracing::debug!(key, value, "Preference saved");
        Ok(())
    }
}

/// Preferences that live only as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the stored language, falling back to `default` for anything else
pub fn load_language(store: &dyn PreferenceStore, default: Language) -> Language {
    match store.get(LANG_KEY) {
        Some(code) => code.parse().unwrap_or_else(|_| {
            tracing::debug!(stored = %code, "Ignoring unrecognized language preference");
            default
        }),
        None => default,
    }
}

/// Persist the language choice
pub fn save_language(store: &mut dyn PreferenceStore, language: Language) -> Result<(), AppError> {
    store.set(LANG_KEY, language.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_language_roundtrip() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(load_language(&store, Language::En), Language::En);
        save_language(&mut store, Language::Gr).unwrap();
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("gr"));
        assert_eq!(load_language(&store, Language::En), Language::Gr);
    }

    #[test]
    fn test_unknown_value_ignored() {
        let mut store = MemoryPreferenceStore::new();
        store.set(LANG_KEY, "fr").unwrap();
        assert_eq!(load_language(&store, Language::En), Language::En);
        store.set(LANG_KEY, "GR").unwrap();
        assert_eq!(load_language(&store, Language::En), Language::En);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = FilePreferenceStore::open(&path);
        save_language(&mut store, Language::Gr).unwrap();

        // A fresh store stands in for the next launch
        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(load_language(&reopened, Language::En), Language::Gr);
    }

    #[test]
    fn test_file_store_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "lang = [not toml").unwrap();

        let mut store = FilePreferenceStore::open(&path);
        assert_eq!(load_language(&store, Language::Gr), Language::Gr);

        // Writing replaces the corrupt file
        save_language(&mut store, Language::En).unwrap();
        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get(LANG_KEY).as_deref(), Some("en"));
    }
}
