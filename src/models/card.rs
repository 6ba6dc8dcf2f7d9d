//! Card is a pair <front, back> with a self-assessed score and the time it was last reviewed.
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Score of a card nobody has rated yet.
pub const UNRATED: u8 = 0;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: u8,
    /// `None` means the card was never reviewed.
    #[serde(default, deserialize_with = "deserialize_last_review")]
    pub last_review: Option<DateTime<Utc>>,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            score: UNRATED,
            last_review: None,
        }
    }

    pub fn is_rated(&self) -> bool {
        self.score > UNRATED
    }
}

/// Hand-edited files may hold any integer; it is clamped into `0..=MAX_SCORE`.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(i64::from(UNRATED), i64::from(MAX_SCORE)) as u8)
}

/// Older deck files store "never reviewed" as the zero instant `0001-01-01T00:00:00Z`.
fn deserialize_last_review<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<DateTime<Utc>> = Option::deserialize(deserializer)?;
    Ok(value.filter(|time| time.year() > 1))
}
