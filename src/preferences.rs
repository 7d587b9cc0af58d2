//! File-backed language preference.
//!
//! The preference file is a small JSON document (`{"language": "en"}`),
//! read once when the store is opened and rewritten on every explicit
//! language change.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::i18n::Language;
use crate::routing::{initial_locale, LocaleStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access preferences file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed preferences file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

/// A `LocaleStore` whose preference survives restarts.
#[derive(Debug)]
pub struct FileLocaleStore {
    path: PathBuf,
    active: Language,
    persisted: Option<Language>,
}

impl FileLocaleStore {
    /// Open the store, reading the stored preference.
    ///
    /// A missing file means no preference. A stored code that is no longer
    /// supported is ignored.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let persisted = read_preference(&path)?;
        let active = persisted.unwrap_or_else(Language::default_language);

        Ok(Self {
            path,
            active,
            persisted,
        })
    }

    /// Open the store for a session starting at `current_path`, letting a
    /// valid URL prefix decide the active locale.
    pub fn open_at(path: impl Into<PathBuf>, current_path: &str) -> Result<Self, StoreError> {
        let mut store = Self::open(path)?;
        store.active = initial_locale(current_path, store.persisted);
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, language: Language) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let prefs = Preferences {
            language: Some(language.code().to_string()),
        };
        let json = serde_json::to_string_pretty(&prefs).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Write then rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

fn read_preference(path: &Path) -> Result<Option<Language>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No preferences file yet");
            return Ok(None);
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let prefs: Preferences = serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(prefs.language.as_deref().and_then(|code| {
        let language = Language::from_segment(code);
        if language.is_none() {
            warn!(code = %code, "Ignoring unsupported stored language");
        }
        language
    }))
}

impl LocaleStore for FileLocaleStore {
    fn get(&self) -> Language {
        self.active
    }

    fn set(&mut self, language: Language) {
        self.active = language;
    }

    fn persist(&mut self, language: Language) {
        self.persisted = Some(language);
        if let Err(e) = self.write(language) {
            warn!(error = %e, "Failed to persist language preference");
        }
    }

    fn persisted(&self) -> Option<Language> {
        self.persisted
    }
}
