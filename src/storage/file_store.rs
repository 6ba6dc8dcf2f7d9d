//! Directory-backed deck store.
//!
//! Layout under the deck directory:
//! ```text
//! ~/.cram/
//! ├── config.toml          # optional settings
//! ├── tutorial.json        # uncategorized deck, reference "tutorial"
//! └── languages/
//!     └── spanish.json     # reference "languages/spanish"
//! ```

use super::json::{read_deck, write_deck};
use super::{DeckDiscovery, DeckEntry, DeckRepository};
use crate::config::{Config, DECK_EXTENSION};
use crate::error::{CramError, Result};
use crate::models::{Deck, DeckReference};
use log::{debug, info};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub struct FileDeckStore<'a> {
    config: &'a Config,
}

impl<'a> FileDeckStore<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Copies an existing deck file into the store, optionally inside a category
    /// directory. The file must parse as a deck. Returns the new reference.
    pub fn add_deck_file(&self, source: &Path, category: Option<&str>) -> Result<DeckReference> {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CramError::InvalidDeckFile(source.to_path_buf()))?;

        let source_ref = DeckReference::new(source.display().to_string());
        read_deck(source, &source_ref)?;

        let reference = match category.filter(|c| !c.is_empty()) {
            Some(category) => DeckReference::new(format!("{}/{}", category, stem)),
            None => DeckReference::new(stem),
        };

        let destination = self.config.deck_path(&reference);
        // copying a file onto itself truncates it
        if destination.exists() && fs::canonicalize(source)? == fs::canonicalize(&destination)? {
            info!("Deck {} is already in the deck directory", reference);
            return Ok(reference);
        }
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &destination)?;
        info!("Added deck {} from {}", reference, source.display());

        Ok(reference)
    }
}

impl DeckRepository for FileDeckStore<'_> {
    fn load(&self, reference: &DeckReference) -> Result<Deck> {
        let path = self.config.deck_path(reference);
        debug!("Loading deck {} from {}", reference, path.display());
        read_deck(&path, reference)
    }

    fn save(&self, reference: &DeckReference, deck: &Deck) -> Result<()> {
        let path = self.config.deck_path(reference);
        debug!("Saving deck {} to {}", reference, path.display());
        write_deck(deck, &path)
    }
}

impl DeckDiscovery for FileDeckStore<'_> {
    fn list_decks(&self) -> Result<Vec<DeckEntry>> {
        let root = &self.config.deck_dir;
        let mut entries = Vec::new();

        for item in WalkDir::new(root).sort_by_file_name() {
            let item = item.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory loop in deck directory"))
            })?;
            let path = item.path();
            if !item.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(DECK_EXTENSION)
            {
                continue;
            }
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };

            let parts: Vec<String> = relative
                .with_extension("")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            let Some(name) = parts.last().cloned() else {
                continue;
            };
            let category = if parts.len() > 1 {
                parts[0].clone()
            } else {
                String::new()
            };

            entries.push(DeckEntry {
                category,
                name,
                reference: DeckReference::new(parts.join("/")),
            });
        }

        Ok(entries)
    }
}
