//! Deck browser: a flattened category → deck list with incremental search and
//! a scrolling viewport.

use crate::models::DeckReference;
use crate::storage::{CategoryDecks, DeckEntry, group_by_category};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Rows taken by the title, search bar, borders and help text.
const CHROME_ROWS: usize = 10;
const MIN_VIEWPORT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserMode {
    Normal,
    Search,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BrowserItem {
    Category {
        name: String,
    },
    Deck {
        name: String,
        category: String,
        reference: DeckReference,
    },
}

impl BrowserItem {
    pub fn name(&self) -> &str {
        match self {
            BrowserItem::Category { name } | BrowserItem::Deck { name, .. } => name,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, BrowserItem::Category { .. })
    }
}

pub struct DeckBrowser {
    items: Vec<BrowserItem>,
    filtered: Vec<usize>,
    selected: usize,
    scroll_offset: usize,
    rows: usize,
    mode: BrowserMode,
    query: String,
    confirmed: bool,
    finished: bool,
}

impl DeckBrowser {
    pub fn new(entries: Vec<DeckEntry>) -> Self {
        Self::from_categories(group_by_category(entries))
    }

    pub fn from_categories(categories: Vec<CategoryDecks>) -> Self {
        let mut items = Vec::new();
        for group in categories {
            items.push(BrowserItem::Category {
                name: group.category.clone(),
            });
            for deck in group.decks {
                items.push(BrowserItem::Deck {
                    name: deck.name,
                    category: group.category.clone(),
                    reference: deck.reference,
                });
            }
        }

        let mut browser = Self {
            items,
            filtered: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            rows: 0,
            mode: BrowserMode::Normal,
            query: String::new(),
            confirmed: false,
            finished: false,
        };
        browser.update_filter();
        browser
    }

    pub fn items(&self) -> &[BrowserItem] {
        &self.items
    }

    pub fn mode(&self) -> BrowserMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// True once the user confirmed a deck or cancelled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Items currently matching the query, in display order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &BrowserItem> {
        self.filtered.iter().map(|&i| &self.items[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The filtered positions that fit in the viewport.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.scroll_offset + self.viewport_height()).min(self.filtered.len());
        self.scroll_offset.min(end)..end
    }

    /// Number of list rows that fit on screen, never more than there are items.
    pub fn viewport_height(&self) -> usize {
        self.rows
            .saturating_sub(CHROME_ROWS)
            .max(MIN_VIEWPORT)
            .min(self.filtered.len())
    }

    pub fn resize(&mut self, rows: u16) {
        self.rows = rows as usize;
        self.ensure_visible();
    }

    fn selected_item(&self) -> Option<&BrowserItem> {
        self.filtered
            .get(self.selected)
            .and_then(|&i| self.items.get(i))
    }

    /// The confirmed deck, or `None` when the user cancelled or picked nothing.
    pub fn selection(&self) -> Option<DeckReference> {
        if !self.confirmed {
            return None;
        }
        match self.selected_item() {
            Some(BrowserItem::Deck { reference, .. }) => Some(reference.clone()),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.finished = true;
            return;
        }
        match self.mode {
            BrowserMode::Normal => self.handle_normal_key(key),
            BrowserMode::Search => self.handle_search_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.finished = true,
            KeyCode::Char('/') => {
                self.mode = BrowserMode::Search;
                self.query.clear();
                self.update_filter();
            }
            KeyCode::Char('l') | KeyCode::Enter => self.confirm(),
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = BrowserMode::Normal;
                self.query.clear();
                self.update_filter();
            }
            KeyCode::Enter => {
                self.mode = BrowserMode::Normal;
                self.confirm();
            }
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.update_filter();
                }
            }
            KeyCode::Down => self.move_down(),
            KeyCode::Up => self.move_up(),
            KeyCode::Char(c)
                if !c.is_control() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.query.push(c);
                self.update_filter();
            }
            _ => {}
        }
    }

    fn confirm(&mut self) {
        if matches!(self.selected_item(), Some(BrowserItem::Deck { .. })) {
            self.confirmed = true;
            self.finished = true;
        }
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
        }
        self.ensure_visible();
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_visible();
    }

    fn update_filter(&mut self) {
        let query = self.query.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| query.is_empty() || item.name().to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect();

        self.selected = self.selected.min(self.filtered.len().saturating_sub(1));
        self.scroll_offset = 0;
        self.ensure_visible();
    }

    /// Scrolls the least amount needed to keep the selection on screen.
    fn ensure_visible(&mut self) {
        let height = self.viewport_height();
        if height == 0 {
            self.scroll_offset = 0;
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }
}
