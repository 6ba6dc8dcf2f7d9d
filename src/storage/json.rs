//! JSON deck files.
//! Reads and writes a whole `Deck` record; the file is always rewritten in full.

use crate::error::{CramError, Result};
use crate::models::{Deck, DeckReference};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Writes a deck to a JSON file at the specified path, creating parent directories.
pub fn write_deck(deck: &Deck, path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(deck)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json_string)?;
    Ok(())
}

/// Reads a deck from a JSON file.
/// A missing file is `NotFound`, invalid JSON is `Parse`; both carry `reference`.
pub fn read_deck(path: &Path, reference: &DeckReference) -> Result<Deck> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CramError::NotFound(reference.clone()));
        }
        Err(e) => return Err(e.into()),
    };

    let mut deck: Deck = serde_json::from_str(&contents).map_err(|source| CramError::Parse {
        reference: reference.clone(),
        source,
    })?;
    deck.clamp_scores();

    Ok(deck)
}
