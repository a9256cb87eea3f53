//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use claimforge_core::theme::{
    self, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme, ThemeManager,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::warn;

pub mod analyze;
pub mod theme_cmd;

/// ClaimForge - fact-check claims against the ClaimForge analysis service
#[derive(Parser)]
#[command(name = "claimforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preference file (defaults to <config dir>/claimforge/preferences.json)
    #[arg(long, global = true, env = "CLAIMFORGE_PREFS")]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a claim for analysis
    Analyze(analyze::AnalyzeArgs),

    /// Show or change the color theme
    #[command(subcommand)]
    Theme(theme_cmd::ThemeCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<ExitCode> {
        let store = preference_store(self.prefs);
        let prefers_dark = theme::system_prefers_dark();

        match self.command {
            Commands::Analyze(args) => {
                analyze::execute(args, display_theme(store, prefers_dark)).await
            }
            Commands::Theme(cmd) => {
                let themes = ThemeManager::initialize(store, prefers_dark)?;
                theme_cmd::execute(cmd, themes)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Theme for analysis output. Preference errors only cost the colors.
fn display_theme(store: Arc<dyn PreferenceStore>, prefers_dark: Option<bool>) -> Theme {
    match ThemeManager::initialize(store, prefers_dark) {
        Ok(themes) => themes.current(),
        Err(err) => {
            warn!(error = %err, "Could not load theme preference; using default");
            Theme::default()
        }
    }
}

/// Open the preference file, falling back to memory when no config dir exists.
fn preference_store(explicit: Option<PathBuf>) -> Arc<dyn PreferenceStore> {
    let path = explicit.or_else(|| {
        dirs::config_dir().map(|dir| dir.join("claimforge").join("preferences.json"))
    });

    match path {
        Some(path) => Arc::new(FilePreferenceStore::new(path)),
        None => {
            warn!("No config directory found; theme changes will not be saved");
            Arc::new(MemoryPreferenceStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimforge_core::{ClaimError, ClaimResult};

    /// Store whose writes always fail; reads fail too when `fail_get` is set.
    struct BrokenStore {
        fail_get: bool,
    }

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> ClaimResult<Option<String>> {
            if self.fail_get {
                Err(ClaimError::preference("corrupt preferences"))
            } else {
                Ok(None)
            }
        }

        fn set(&self, _key: &str, _value: &str) -> ClaimResult<()> {
            Err(ClaimError::preference("read-only config dir"))
        }
    }

    #[test]
    fn test_unreadable_preferences_fall_back_to_default() {
        let store = Arc::new(BrokenStore { fail_get: true });
        assert_eq!(display_theme(store, Some(true)), Theme::default());
    }

    #[test]
    fn test_unwritable_preferences_fall_back_to_default() {
        let store = Arc::new(BrokenStore { fail_get: false });
        assert_eq!(display_theme(store, Some(true)), Theme::default());
    }

    #[test]
    fn test_corrupt_preference_file_falls_back_to_default() {
        let dir = std::env::temp_dir().join(format!("claimforge-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, r#"{"theme": 1}"#).unwrap();

        let store = preference_store(Some(path));
        assert_eq!(display_theme(store.clone(), None), Theme::default());
        assert!(ThemeManager::initialize(store, None).is_err());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_stored_theme_is_used() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(theme::THEME_KEY, "dark").unwrap();
        assert_eq!(display_theme(store, None), Theme::Dark);
    }
}
