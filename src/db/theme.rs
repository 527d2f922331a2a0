use super::storage::{Storage, StorageError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Slot holding the literal `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

/// Reads the saved theme. An empty or unrecognised slot yields `None`.
pub fn load<S: Storage>(storage: &S) -> Result<Option<Theme>, StorageError> {
    let Some(raw) = storage.get(THEME_KEY)? else {
        return Ok(None);
    };

    match raw.parse() {
        Ok(theme) => Ok(Some(theme)),
        Err(error) => {
            warn!(%error, "ignoring saved theme");
            Ok(None)
        }
    }
}

/// Saved theme, or `fallback` when nothing usable is saved.
pub fn resolve<S: Storage>(storage: &S, fallback: Theme) -> Result<Theme, StorageError> {
    Ok(load(storage)?.unwrap_or(fallback))
}

pub fn save<S: Storage>(storage: &mut S, theme: Theme) -> Result<(), StorageError> {
    storage.set(THEME_KEY, theme.as_str())?;
    debug!(%theme, "theme saved");
    Ok(())
}

/// Flips the effective theme and persists the result.
pub fn toggle<S: Storage>(storage: &mut S, fallback: Theme) -> Result<Theme, StorageError> {
    let theme = resolve(storage, fallback)?.toggled();
    save(storage, theme)?;
    Ok(theme)
}
