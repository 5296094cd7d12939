use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::storage::Storage;

/// Storage key the theme string lives under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow!("Unknown theme '{}': expected light|dark", other)),
        }
    }
}

/// Process-wide theme preference: restored at startup, written back on
/// every toggle.
pub struct ThemeState {
    storage: Arc<dyn Storage>,
    current: Theme,
}

impl ThemeState {
    /// Restore the persisted theme. Absent or unrecognized values fall
    /// back to light.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let current = storage
            .get(THEME_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Ok(Self { storage, current })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip between light and dark and persist the new value.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.current = self.current.toggled();
        self.storage.set(THEME_KEY, self.current.as_str())?;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn defaults_to_light_when_nothing_is_stored() {
        let storage = Arc::new(MemoryStorage::new());
        let theme = ThemeState::load(storage).unwrap();
        assert_eq!(theme.current(), Theme::Light);
    }

    #[test]
    fn toggle_persists_the_new_value() {
        let storage = Arc::new(MemoryStorage::new());
        let mut theme = ThemeState::load(storage.clone()).unwrap();

        assert_eq!(theme.toggle().unwrap(), Theme::Dark);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(theme.toggle().unwrap(), Theme::Light);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn restores_the_persisted_theme() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(THEME_KEY, "dark").unwrap();
        let theme = ThemeState::load(storage).unwrap();
        assert_eq!(theme.current(), Theme::Dark);
    }

    #[test]
    fn unrecognized_values_fall_back_to_light() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(THEME_KEY, "solarized").unwrap();
        let theme = ThemeState::load(storage).unwrap();
        assert_eq!(theme.current(), Theme::Light);
    }
}
