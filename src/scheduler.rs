//! Card scheduling: study order, passive score decay and bounded navigation.
//!
//! The scoring model is a manual 1-5 self rating:
//! - Unrated cards (score 0) and low scores are studied first
//! - Among equal scores, the card reviewed longest ago comes first
//! - A card not reviewed for more than a week loses one point (never below 1)
//! - A card not reviewed for more than a month drops straight back to 1

use crate::models::card::{MAX_SCORE, MIN_SCORE};
use crate::models::{Card, Deck};
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;

pub const WEEK_DAYS: i64 = 7;
pub const MONTH_DAYS: i64 = 30;

/// Sorts the deck into study order. The sort is stable, so cards with equal
/// score and review time keep their stored order.
pub fn sort_by_score(deck: &mut Deck) {
    deck.cards.sort_by(study_order);
}

fn study_order(a: &Card, b: &Card) -> Ordering {
    // `None < Some(_)`, so never-reviewed cards lead their score group
    a.score
        .cmp(&b.score)
        .then_with(|| a.last_review.cmp(&b.last_review))
}

/// Downgrades scores of cards that have not been reviewed recently.
/// Returns how many cards changed.
pub fn apply_decay(deck: &mut Deck, now: DateTime<Utc>) -> usize {
    let week = Duration::days(WEEK_DAYS);
    let month = Duration::days(MONTH_DAYS);
    let mut changed = 0;

    for card in &mut deck.cards {
        let Some(reviewed) = card.last_review else {
            continue;
        };
        if !card.is_rated() {
            continue;
        }

        let elapsed = now - reviewed;
        let before = card.score;

        if elapsed > month {
            card.score = MIN_SCORE;
        } else if elapsed > week && card.score > MIN_SCORE {
            card.score -= 1;
        }

        if card.score != before {
            changed += 1;
        }
    }

    changed
}

/// Index of the card after `current`, stopping at the last card.
pub fn next_index(deck: &Deck, current: usize) -> usize {
    if current + 1 < deck.cards.len() {
        current + 1
    } else {
        current.min(deck.cards.len().saturating_sub(1))
    }
}

/// Index of the card before `current`, stopping at the first card.
pub fn previous_index(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Records a rating on the card at `index`. Returns false, leaving the deck
/// untouched, when the index or the score is out of range.
pub fn rate_card(deck: &mut Deck, index: usize, score: u8, now: DateTime<Utc>) -> bool {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return false;
    }
    match deck.cards.get_mut(index) {
        Some(card) => {
            card.score = score;
            card.last_review = Some(now);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(front: &str, score: u8, days_ago: Option<i64>, now: DateTime<Utc>) -> Card {
        Card {
            front: front.to_string(),
            back: format!("{} answer", front),
            score,
            last_review: days_ago.map(|d| now - Duration::days(d)),
        }
    }

    fn create_test_deck(now: DateTime<Utc>) -> Deck {
        Deck::new(
            "Test Deck",
            vec![
                card("Q1", 0, None, now),
                card("Q2", 2, Some(1), now),
                card("Q3", 1, Some(2), now),
            ],
        )
    }

    #[test]
    fn test_sort_by_score() {
        let now = Utc::now();
        let mut deck = create_test_deck(now);

        sort_by_score(&mut deck);

        let scores: Vec<u8> = deck.cards.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_by_score_then_by_date() {
        let now = Utc::now();
        let mut deck = Deck::new(
            "Test Deck",
            vec![
                card("Q1", 1, Some(0), now),
                card("Q2", 1, Some(1), now),
                card("Q3", 2, Some(0), now),
                card("Q4", 1, None, now),
            ],
        );

        sort_by_score(&mut deck);

        let fronts: Vec<&str> = deck.cards.iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["Q4", "Q2", "Q1", "Q3"]);
    }

    #[test]
    fn test_sort_is_non_decreasing() {
        let now = Utc::now();
        let mut deck = Deck::new(
            "Mixed",
            vec![
                card("a", 5, Some(3), now),
                card("b", 0, None, now),
                card("c", 3, Some(9), now),
                card("d", 3, Some(1), now),
                card("e", 1, Some(40), now),
                card("f", 0, None, now),
            ],
        );

        sort_by_score(&mut deck);

        for pair in deck.cards.windows(2) {
            assert!(pair[0].score <= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].last_review <= pair[1].last_review);
            }
        }
        // equal keys keep their stored order
        assert_eq!(deck.cards[0].front, "b");
        assert_eq!(deck.cards[1].front, "f");
    }

    #[test]
    fn test_decay() {
        let now = Utc::now();
        let mut deck = Deck::new(
            "Decay",
            vec![
                card("month", 4, Some(40), now),
                card("week", 3, Some(10), now),
                card("fresh", 3, Some(2), now),
                card("unrated", 0, None, now),
                card("floor", 1, Some(10), now),
            ],
        );

        let changed = apply_decay(&mut deck, now);

        assert_eq!(deck.cards[0].score, 1);
        assert_eq!(deck.cards[1].score, 2);
        assert_eq!(deck.cards[2].score, 3);
        assert_eq!(deck.cards[3].score, 0);
        assert_eq!(deck.cards[4].score, 1);
        assert_eq!(changed, 2);
    }

    #[test]
    fn test_decay_never_rates_unrated_card() {
        let now = Utc::now();
        let mut deck = Deck::new("Odd", vec![card("reviewed but unrated", 0, Some(60), now)]);

        apply_decay(&mut deck, now);

        assert_eq!(deck.cards[0].score, 0);
    }

    #[test]
    fn test_decay_keeps_review_time() {
        let now = Utc::now();
        let mut deck = Deck::new("Decay", vec![card("week", 4, Some(8), now)]);
        let before = deck.cards[0].last_review;

        apply_decay(&mut deck, now);

        assert_eq!(deck.cards[0].last_review, before);
    }

    #[test]
    fn test_next_index() {
        let deck = create_test_deck(Utc::now());

        assert_eq!(next_index(&deck, 0), 1);
        assert_eq!(next_index(&deck, 2), 2);
        assert_eq!(next_index(&deck, next_index(&deck, next_index(&deck, 2))), 2);
    }

    #[test]
    fn test_next_index_on_empty_deck() {
        let deck = Deck::new("Empty", Vec::new());
        assert_eq!(next_index(&deck, 0), 0);
    }

    #[test]
    fn test_previous_index() {
        assert_eq!(previous_index(1), 0);
        assert_eq!(previous_index(0), 0);
        assert_eq!(previous_index(previous_index(0)), 0);
    }

    #[test]
    fn test_rate_card() {
        let now = Utc::now();
        let mut deck = create_test_deck(now);

        assert!(rate_card(&mut deck, 0, 5, now));

        assert_eq!(deck.cards[0].score, 5);
        assert_eq!(deck.cards[0].last_review, Some(now));
    }

    #[test]
    fn test_rate_card_invalid_index() {
        let now = Utc::now();
        let mut deck = create_test_deck(now);
        let before = deck.clone();

        assert!(!rate_card(&mut deck, 10, 5, now));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_rate_card_invalid_score() {
        let now = Utc::now();
        let mut deck = create_test_deck(now);
        let before = deck.clone();

        assert!(!rate_card(&mut deck, 0, 0, now));
        assert!(!rate_card(&mut deck, 0, 6, now));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_rate_multiple_cards() {
        let now = Utc::now();
        let mut deck = create_test_deck(now);

        rate_card(&mut deck, 0, 5, now);
        rate_card(&mut deck, 1, 3, now);
        rate_card(&mut deck, 2, 4, now);

        let scores: Vec<u8> = deck.cards.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![5, 3, 4]);
    }
}
