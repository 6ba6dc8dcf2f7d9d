//! Deck is a named, ordered set of cards. The order is the study order.
use super::Card;
use super::card::MAX_SCORE;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Pulls any out-of-range score read from disk back into `[0, 5]`.
    pub fn clamp_scores(&mut self) {
        for card in &mut self.cards {
            card.score = card.score.min(MAX_SCORE);
        }
    }
}
