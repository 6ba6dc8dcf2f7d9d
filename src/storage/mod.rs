//! Deck persistence and discovery.
//!
//! The session core only talks to the `DeckRepository` and `DeckDiscovery` traits;
//! `FileDeckStore` implements both on top of a directory of JSON files.

pub mod file_store;
pub mod json;

pub use file_store::FileDeckStore;

use crate::error::Result;
use crate::models::{Deck, DeckReference};

/// Label used for decks stored directly in the deck directory.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub trait DeckRepository {
    fn load(&self, reference: &DeckReference) -> Result<Deck>;
    fn save(&self, reference: &DeckReference, deck: &Deck) -> Result<()>;
}

pub trait DeckDiscovery {
    /// Every stored deck, in a stable discovery order.
    fn list_decks(&self) -> Result<Vec<DeckEntry>>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeckEntry {
    /// Empty for uncategorized decks.
    pub category: String,
    pub name: String,
    pub reference: DeckReference,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryDecks {
    pub category: String,
    pub decks: Vec<DeckEntry>,
}

/// Groups entries by category: uncategorized decks first (labelled
/// `UNCATEGORIZED`), then the other categories in the order they were discovered.
pub fn group_by_category(entries: Vec<DeckEntry>) -> Vec<CategoryDecks> {
    let mut uncategorized = Vec::new();
    let mut groups: Vec<CategoryDecks> = Vec::new();

    for entry in entries {
        if entry.category.is_empty() {
            uncategorized.push(entry);
            continue;
        }
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.decks.push(entry),
            None => groups.push(CategoryDecks {
                category: entry.category.clone(),
                decks: vec![entry],
            }),
        }
    }

    if !uncategorized.is_empty() {
        groups.insert(
            0,
            CategoryDecks {
                category: UNCATEGORIZED.to_string(),
                decks: uncategorized,
            },
        );
    }
    groups
}
