pub mod card;
pub mod deck;
pub mod deck_ref;

pub use card::Card;
pub use deck::Deck;
pub use deck_ref::DeckReference;
