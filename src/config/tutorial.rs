//! Starter deck written into a fresh deck directory.
use crate::error::Result;
use crate::models::{Card, Deck};
use crate::storage::json::write_deck;
use std::path::Path;

pub const TUTORIAL_FILE: &str = "tutorial.json";

pub fn tutorial_deck() -> Deck {
    Deck::new(
        "Tutorial Deck",
        vec![
            Card::new(
                "What is a flashcard?",
                "A study tool with a question on the front and the answer on the back.",
            ),
            Card::new(
                "How do you rate a card in cram?",
                "Press 'r' to start rating, then pick a score from 1-5 (1 = hard, 5 = easy).",
            ),
            Card::new(
                "What keyboard shortcut flips a card?",
                "Press 'h', 'l' or space to flip between the front and back of a card.",
            ),
            Card::new(
                "How do you navigate between cards?",
                "Press 'j' for the next card or 'k' for the previous one.",
            ),
            Card::new(
                "Which cards come first?",
                "Unrated and low-scored cards, oldest review first. Scores fade if a card is not reviewed for a week.",
            ),
        ],
    )
}

/// Writes the tutorial deck unless one is already there.
pub fn create_tutorial_deck(deck_dir: &Path) -> Result<()> {
    let path = deck_dir.join(TUTORIAL_FILE);
    if path.exists() {
        return Ok(());
    }
    write_deck(&tutorial_deck(), &path)
}
