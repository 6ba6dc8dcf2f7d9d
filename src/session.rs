//! Study session over a single deck.
//!
//! Keys in normal mode flip and navigate; `r` switches to rating mode, where only
//! a score `1`-`5` or quit is accepted. Every rating is saved right away, and the
//! whole deck is written back through the repository.

use crate::models::card::{MAX_SCORE, MIN_SCORE};
use crate::models::{Card, Deck, DeckReference};
use crate::scheduler;
use crate::storage::DeckRepository;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Normal,
    Rating,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionExit {
    Quit,
    /// Return to the deck browser instead of exiting.
    GoBack,
}

pub struct StudySession<'a> {
    deck: Deck,
    reference: DeckReference,
    repository: &'a dyn DeckRepository,
    current: usize,
    flipped: bool,
    mode: SessionMode,
    exit: Option<SessionExit>,
    can_go_back: bool,
    notice: Option<String>,
}

impl<'a> StudySession<'a> {
    pub fn new(deck: Deck, reference: DeckReference, repository: &'a dyn DeckRepository) -> Self {
        Self {
            deck,
            reference,
            repository,
            current: 0,
            flipped: false,
            mode: SessionMode::Normal,
            exit: None,
            can_go_back: false,
            notice: None,
        }
    }

    /// Allows `request_go_back`; set for sessions opened from the deck browser.
    pub fn with_go_back(mut self, can_go_back: bool) -> Self {
        self.can_go_back = can_go_back;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn exit(&self) -> Option<SessionExit> {
        self.exit
    }

    pub fn is_finished(&self) -> bool {
        self.exit.is_some()
    }

    pub fn go_back_requested(&self) -> bool {
        self.exit == Some(SessionExit::GoBack)
    }

    /// Ends the session asking to return to the browser. Ignored when the
    /// session was not opened from the browser.
    pub fn request_go_back(&mut self) {
        if self.can_go_back {
            self.exit = Some(SessionExit::GoBack);
        }
    }

    /// Esc in normal mode returns to the browser when the session allows it.
    /// Returns whether the key was taken as a go-back request.
    pub fn handle_back_key(&mut self, key: KeyEvent) -> bool {
        if key.code != KeyCode::Esc || self.mode != SessionMode::Normal || !self.can_go_back {
            return false;
        }
        self.request_go_back();
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        let quit = key.code == KeyCode::Char('q')
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'));
        if quit {
            self.exit = Some(SessionExit::Quit);
            return;
        }
        if self.deck.is_empty() {
            return;
        }

        match self.mode {
            SessionMode::Normal => self.handle_normal_key(key),
            SessionMode::Rating => self.handle_rating_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.flipped = !self.flipped;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.current = scheduler::next_index(&self.deck, self.current);
                self.flipped = false;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.current = scheduler::previous_index(self.current);
                self.flipped = false;
            }
            KeyCode::Char('r') => self.mode = SessionMode::Rating,
            _ => {}
        }
    }

    fn handle_rating_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char(c) = key.code {
            if let Some(score) = c.to_digit(10) {
                let score = score as u8;
                if (MIN_SCORE..=MAX_SCORE).contains(&score) {
                    self.rate(score);
                }
            }
        }
    }

    fn rate(&mut self, score: u8) {
        self.mode = SessionMode::Normal;
        if !scheduler::rate_card(&mut self.deck, self.current, score, Utc::now()) {
            return;
        }
        debug!("Rated card {} of {} with {}", self.current + 1, self.reference, score);

        match self.repository.save(&self.reference, &self.deck) {
            Ok(()) => {
                self.current = scheduler::next_index(&self.deck, self.current);
                self.flipped = false;
            }
            Err(e) => {
                warn!("Failed to save deck {}: {}", self.reference, e);
                self.notice = Some(format!("Rating kept but not saved: {}", e));
            }
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.cards.get(self.current)
    }

    /// Text of the side currently facing the user.
    pub fn visible_face(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.flipped {
                card.back.trim()
            } else {
                card.front.trim()
            }
        })
    }

    /// "(i/n)"
    pub fn progress_label(&self) -> String {
        format!("({}/{})", self.current + 1, self.deck.len())
    }

    pub fn score_badge(&self) -> Option<String> {
        self.current_card()
            .filter(|card| card.is_rated())
            .map(|card| format!("{}/{}", card.score, MAX_SCORE))
    }

    pub fn help_text(&self) -> String {
        match self.mode {
            SessionMode::Rating => "Rate: [1] [2] [3] [4] [5]  |  [Q] quit".to_string(),
            SessionMode::Normal if self.can_go_back => {
                "[H/L] flip  |  [J/K] navigate  |  [R] rate  |  [Esc] decks  |  [Q] quit"
                    .to_string()
            }
            SessionMode::Normal => {
                "[H/L] flip  |  [J/K] navigate  |  [R] rate  |  [Q] quit".to_string()
            }
        }
    }
}
