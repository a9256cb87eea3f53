//! Dark/light theme preference.

pub mod store;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ClaimError, ClaimResult};

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

/// Preference key the theme is stored under.
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
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ClaimError::preference(format!("unknown theme '{}'", other))),
        }
    }
}

/// Tracks the active theme and writes changes through to a store.
pub struct ThemeManager {
    store: Arc<dyn PreferenceStore>,
    current: Theme,
}

impl ThemeManager {
    /// Load the initial theme.
    ///
    /// A valid stored value wins; otherwise an OS dark preference selects
    /// (and persists) dark; otherwise the default light theme is used without
    /// writing anything.
    pub fn initialize(
        store: Arc<dyn PreferenceStore>,
        system_prefers_dark: Option<bool>,
    ) -> ClaimResult<Self> {
        let stored = match store.get(THEME_KEY)? {
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(_) => {
                    warn!(value = %raw, "Ignoring unknown stored theme");
                    None
                }
            },
            None => None,
        };

        let mut manager = Self {
            store,
            current: Theme::default(),
        };

        if let Some(theme) = stored {
            manager.current = theme;
        } else if system_prefers_dark == Some(true) {
            manager.set(Theme::Dark)?;
        }

        Ok(manager)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) -> ClaimResult<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.current = theme;
        Ok(())
    }

    /// Switch between dark and light, returning the new theme.
    pub fn toggle(&mut self) -> ClaimResult<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}

/// Guess whether the terminal has a dark background.
///
/// Reads `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`), which many terminals
/// export. Returns `None` when the variable is absent or unparseable.
pub fn system_prefers_dark() -> Option<bool> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| prefers_dark_from_colorfgbg(&value))
}

fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // ANSI 0-6 and 8 are the dark background colors
    Some(bg <= 6 || bg == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory(entry: Option<&str>) -> Arc<MemoryPreferenceStore> {
        Arc::new(match entry {
            Some(value) => MemoryPreferenceStore::with_entry(THEME_KEY, value),
            None => MemoryPreferenceStore::new(),
        })
    }

    #[test]
    fn test_stored_value_wins() {
        let store = memory(Some("light"));
        let manager = ThemeManager::initialize(store, Some(true)).unwrap();
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn test_os_preference_is_persisted() {
        let store = memory(None);
        let manager = ThemeManager::initialize(store.clone(), Some(true)).unwrap();
        assert_eq!(manager.current(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_default_is_light_and_not_persisted() {
        let store = memory(None);
        let manager = ThemeManager::initialize(store.clone(), None).unwrap();
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);

        let manager = ThemeManager::initialize(store.clone(), Some(false)).unwrap();
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_unknown_stored_value_falls_through() {
        let store = memory(Some("sepia"));
        let manager = ThemeManager::initialize(store, Some(true)).unwrap();
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let store = memory(None);
        let mut manager = ThemeManager::initialize(store.clone(), None).unwrap();

        assert_eq!(manager.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(manager.toggle().unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(prefers_dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(prefers_dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(prefers_dark_from_colorfgbg("15;default;8"), Some(true));
        assert_eq!(prefers_dark_from_colorfgbg("garbage"), None);
    }
}
