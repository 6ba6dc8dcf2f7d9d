//! Browser → session → browser loop.

use crate::browser::DeckBrowser;
use crate::config::Settings;
use crate::error::Result;
use crate::models::{Deck, DeckReference};
use crate::scheduler;
use crate::session::StudySession;
use crate::storage::{DeckDiscovery, DeckRepository};
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Drives the controllers until they finish. The terminal front-end reads real
/// key events; tests replay scripted ones.
pub trait Frontend {
    fn browse(&mut self, browser: &mut DeckBrowser) -> Result<()>;
    fn study(&mut self, session: &mut StudySession<'_>) -> Result<()>;
}

/// Decays stale scores (when enabled) and puts the deck in study order.
pub fn prepare_deck(deck: &mut Deck, settings: &Settings, now: DateTime<Utc>) {
    if settings.decay_on_load {
        let changed = scheduler::apply_decay(deck, now);
        if changed > 0 {
            debug!("Decayed {} card scores in '{}'", changed, deck.name);
        }
    }
    scheduler::sort_by_score(deck);
}

/// Studies `reference`, or lets the user pick a deck first when none is given.
/// A session opened from the browser may return to it; the loop ends when the
/// user quits either controller.
pub fn run_study_session<S, F>(
    store: &S,
    settings: &Settings,
    frontend: &mut F,
    reference: Option<DeckReference>,
) -> Result<()>
where
    S: DeckRepository + DeckDiscovery,
    F: Frontend + ?Sized,
{
    let mut pending = reference;

    loop {
        let from_browser = pending.is_none();
        let reference = match pending.take() {
            Some(reference) => reference,
            None => {
                let mut browser = DeckBrowser::new(store.list_decks()?);
                frontend.browse(&mut browser)?;
                match browser.selection() {
                    Some(reference) => reference,
                    None => {
                        info!("No deck selected");
                        return Ok(());
                    }
                }
            }
        };

        let mut deck = store.load(&reference)?;
        prepare_deck(&mut deck, settings, Utc::now());
        info!("Studying '{}' ({} cards)", deck.name, deck.len());

        let mut session = StudySession::new(deck, reference, store).with_go_back(from_browser);
        frontend.study(&mut session)?;

        if !session.go_back_requested() {
            return Ok(());
        }
    }
}
