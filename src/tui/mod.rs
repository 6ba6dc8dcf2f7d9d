//! Terminal front-end: raw mode, alternate screen and the blocking key loops.

mod browser_view;
mod session_view;

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::browser::DeckBrowser;
use crate::config::Config;
use crate::error::Result;
use crate::models::DeckReference;
use crate::orchestrator::{self, Frontend};
use crate::session::StudySession;
use crate::storage::FileDeckStore;

/// Runs the interactive study loop against the deck directory in `config`.
/// Without a reference the user picks a deck in the browser first.
pub fn run_study_session(config: &Config, reference: Option<DeckReference>) -> Result<()> {
    let store = FileDeckStore::new(config);
    let mut frontend = TerminalFrontend::enter()?;

    let result =
        orchestrator::run_study_session(&store, &config.settings, &mut frontend, reference);

    let restored = frontend.leave();
    result?;
    restored
}

pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalFrontend {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn leave(mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Frontend for TerminalFrontend {
    fn browse(&mut self, browser: &mut DeckBrowser) -> Result<()> {
        browser.resize(self.terminal.size()?.height);

        while !browser.is_finished() {
            self.terminal.draw(|f| browser_view::draw(f, browser))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => browser.handle_key(key),
                Event::Resize(_, rows) => browser.resize(rows),
                _ => {}
            }
        }
        Ok(())
    }

    fn study(&mut self, session: &mut StudySession<'_>) -> Result<()> {
        while !session.is_finished() {
            self.terminal.draw(|f| session_view::draw(f, session))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !session.handle_back_key(key) {
                    session.handle_key(key);
                }
            }
        }
        Ok(())
    }
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
pub(crate) fn render_to_string(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut Frame),
) -> String {
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
