//! Durable storage for user preferences.
//!
//! The portal persists exactly one value, the selected language code, under a
//! fixed key. Storage is best-effort: if the preference file cannot be read or
//! written the session simply runs without persistence, it never fails.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key under which the selected language code is stored.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

/// Key-value preference storage. Both operations are total; implementations
/// swallow storage failures rather than surfacing them.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

fn default_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("smartfarm")
        .join("preferences.toml")
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PrefsFile {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

/// Preferences backed by a TOML file in the user's config directory.
///
/// The whole file is read once at open; `set` writes through. Any I/O or
/// parse failure is logged and the store keeps working in memory only.
pub struct FilePreferences {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the store at the default per-user location.
    pub fn open() -> Self {
        Self::open_at(default_path())
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match load_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("preferences unreadable, starting empty: {e:#}");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn write_back(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = PrefsFile {
            entries: self.entries.clone(),
        };
        let text = toml::to_string_pretty(&file).context("encoding preferences")?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let file: PrefsFile = toml::from_str(&text).context("parsing preferences")?;
    Ok(file.entries)
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_back() {
            tracing::warn!("preference not persisted: {e:#}");
        }
    }
}

/// In-memory store for tests and sessions where persistence is unavailable.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_then_get() {
        let dir = tempdir().unwrap();
        let mut store = FilePreferences::open_at(dir.path().join("prefs.toml"));
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), None);
        store.set(PREFERRED_LANGUAGE_KEY, "hi");
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), Some("hi".to_string()));
    }

    #[test]
    fn survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        {
            let mut store = FilePreferences::open_at(&path);
            store.set(PREFERRED_LANGUAGE_KEY, "ta");
        }
        let store = FilePreferences::open_at(&path);
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), Some("ta".to_string()));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.toml");
        let mut store = FilePreferences::open_at(&path);
        store.set(PREFERRED_LANGUAGE_KEY, "ml");
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();
        let mut store = FilePreferences::open_at(&path);
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), None);
        // Still usable for the rest of the session.
        store.set(PREFERRED_LANGUAGE_KEY, "kn");
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), Some("kn".to_string()));
    }

    #[test]
    fn unwritable_path_is_nonfatal() {
        let dir = tempdir().unwrap();
        // Parent "directory" is a regular file, so the write must fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = FilePreferences::open_at(blocker.join("prefs.toml"));
        store.set(PREFERRED_LANGUAGE_KEY, "bn");
        // The in-memory value survives even though the write was dropped.
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), Some("bn".to_string()));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryPreferences::new();
        store.set(PREFERRED_LANGUAGE_KEY, "mr");
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), Some("mr".to_string()));
        store.set(PREFERRED_LANGUAGE_KEY, "te");
        assert_eq!(store.get(PREFERRED_LANGUAGE_KEY), Some("te".to_string()));
    }
}
