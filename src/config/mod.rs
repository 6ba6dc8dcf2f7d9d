//! Process configuration: where decks live and the optional `config.toml` settings.
//!
//! Built once in `main` and handed by reference to the deck store.

pub mod tutorial;

use crate::error::{CramError, Result};
use crate::models::DeckReference;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DIR_NAME: &str = ".cram";
pub const CONFIG_FILE: &str = "config.toml";
pub const DECK_EXTENSION: &str = "json";

/// User-tunable behaviour read from `config.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run the score decay pass every time a deck is opened.
    pub decay_on_load: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decay_on_load: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub deck_dir: PathBuf,
    pub settings: Settings,
}

impl Config {
    /// Config rooted at `deck_dir` with default settings. Touches nothing on disk.
    pub fn new(deck_dir: impl Into<PathBuf>) -> Self {
        Self {
            deck_dir: deck_dir.into(),
            settings: Settings::default(),
        }
    }

    /// `~/.cram`
    pub fn default_deck_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_DIR_NAME))
            .ok_or(CramError::HomeDirUnavailable)
    }

    /// Resolves the deck directory, initializes it on first use and reads `config.toml`.
    pub fn load(deck_dir: Option<PathBuf>) -> Result<Self> {
        let deck_dir = match deck_dir {
            Some(dir) => dir,
            None => Self::default_deck_dir()?,
        };

        let mut config = Self::new(deck_dir);
        config.initialize()?;
        config.settings = read_settings(&config.deck_dir.join(CONFIG_FILE))?;
        Ok(config)
    }

    /// Creates the deck directory and seeds the tutorial deck the first time it is used.
    pub fn initialize(&self) -> Result<()> {
        if self.deck_dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.deck_dir)?;
        info!("Created deck directory {}", self.deck_dir.display());
        tutorial::create_tutorial_deck(&self.deck_dir)
    }

    /// Storage location of a deck reference.
    pub fn deck_path(&self, reference: &DeckReference) -> PathBuf {
        self.deck_dir
            .join(format!("{}.{}", reference.as_str(), DECK_EXTENSION))
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|source| CramError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_initializes_directory_with_tutorial() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("decks");

        let config = Config::load(Some(root.clone())).unwrap();

        assert!(root.is_dir());
        assert!(root.join("tutorial.json").is_file());
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_existing_directory_is_left_alone() {
        let dir = TempDir::new().unwrap();

        Config::load(Some(dir.path().to_path_buf())).unwrap();

        assert!(!dir.path().join("tutorial.json").exists());
    }

    #[test]
    fn test_settings_from_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "decay_on_load = false\n").unwrap();

        let config = Config::load(Some(dir.path().to_path_buf())).unwrap();

        assert!(!config.settings.decay_on_load);
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "decay_on_load = \"sometimes").unwrap();

        let result = Config::load(Some(dir.path().to_path_buf()));

        assert!(matches!(result, Err(CramError::Config { .. })));
    }

    #[test]
    fn test_deck_path() {
        let config = Config::new("/decks");
        let path = config.deck_path(&DeckReference::new("languages/spanish"));
        assert_eq!(path, PathBuf::from("/decks/languages/spanish.json"));
    }
}
