pub mod browser;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod scheduler;
pub mod session;
pub mod storage;
pub mod tui;

pub use browser::DeckBrowser;
pub use config::Config;
pub use error::{CramError, Result};
pub use models::{Card, Deck, DeckReference};
pub use session::StudySession;
