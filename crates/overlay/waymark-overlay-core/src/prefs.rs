//! Persisted overlay preferences.
//!
//! One boolean survives restarts: whether the overlay was active. It is
//! written on every toggle and read once at process start. The storage
//! seam lets hosts own format and location; `JsonFilePrefs` is the stock
//! file store for desktop hosts.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted state, written on every toggle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub active: bool,
}

/// Storage seam for `Prefs`.
pub trait PrefsStore {
    /// Read the stored preferences; defaults when nothing is stored.
    fn load(&self) -> Prefs;
    /// Persist the preferences. Failures are the store's to report.
    fn save(&mut self, prefs: Prefs);
}

/// JSON-file preference store.
/// A missing or unreadable file yields defaults rather than an error.
#[derive(Clone, Debug)]
pub struct JsonFilePrefs {
    path: PathBuf,
}

impl JsonFilePrefs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PrefsStore for JsonFilePrefs {
    fn load(&self) -> Prefs {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                log::warn!("prefs {} unreadable: {err}", self.path.display());
                Prefs::default()
            }),
            Err(_) => Prefs::default(),
        }
    }

    fn save(&mut self, prefs: Prefs) {
        let text = match serde_json::to_string_pretty(&prefs) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("prefs serialize: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, text) {
            log::warn!("prefs write {}: {err}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("waymark-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn round_trips_active_flag() {
        let path = temp_path("roundtrip");
        let mut store = JsonFilePrefs::new(&path);
        store.save(Prefs { active: true });
        assert_eq!(store.load(), Prefs { active: true });
        store.save(Prefs { active: false });
        assert_eq!(store.load(), Prefs { active: false });
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_defaults_inactive() {
        let store = JsonFilePrefs::new(temp_path("missing"));
        assert_eq!(store.load(), Prefs::default());
    }

    #[test]
    fn corrupt_file_defaults_inactive() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = JsonFilePrefs::new(&path);
        assert_eq!(store.load(), Prefs::default());
        let _ = fs::remove_file(&path);
    }
}
