//! Deck browser screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph};

use super::centered;
use crate::browser::{BrowserItem, BrowserMode, DeckBrowser};

pub fn draw(f: &mut Frame, browser: &DeckBrowser) {
    let area = f.area();

    if browser.items().is_empty() {
        let message = Paragraph::new("✗ No decks found in the deck directory")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(message, centered(area, area.width, 1));
        return;
    }

    let search_height = if browser.mode() == BrowserMode::Search { 2 } else { 0 };
    let [title_area, search_area, list_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(search_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = Paragraph::new("Select a Deck")
        .add_modifier(Modifier::BOLD)
        .alignment(Alignment::Center);
    f.render_widget(title, title_area);

    if browser.mode() == BrowserMode::Search {
        let search = Paragraph::new(format!("Search: {}│", browser.query()))
            .add_modifier(Modifier::BOLD)
            .alignment(Alignment::Center);
        let [_, bar_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(search_area);
        f.render_widget(search, bar_area);
    }

    let list_width = area.width.max(20) - area.width.max(20) / 4;
    let lines = list_lines(browser, list_width.saturating_sub(10) as usize);
    let list_height = lines.len().max(1) as u16 + 2;

    let list = Paragraph::new(lines).block(Block::bordered().padding(Padding::horizontal(4)));
    f.render_widget(list, centered(list_area, list_width, list_height));

    let help = match browser.mode() {
        BrowserMode::Search => "Type to search • Enter select • Esc exit search",
        BrowserMode::Normal => "↑↓ J/K | L select | / search | Q quit",
    };
    let help = Paragraph::new(help)
        .add_modifier(Modifier::ITALIC)
        .alignment(Alignment::Center);
    f.render_widget(help, help_area);
}

fn list_lines(browser: &DeckBrowser, max_len: usize) -> Vec<Line<'static>> {
    if browser.filtered_len() == 0 {
        return vec![Line::from("  No results").italic()];
    }

    let range = browser.visible_range();
    browser
        .filtered_items()
        .enumerate()
        .skip(range.start)
        .take(range.len())
        .map(|(i, item)| {
            let is_selected = i == browser.selected();
            match item {
                BrowserItem::Category { name } => {
                    let color = if is_selected { Color::Yellow } else { Color::Blue };
                    Line::from(name.clone()).bold().fg(color)
                }
                BrowserItem::Deck { name, .. } => {
                    let prefix = if is_selected { "▶ " } else { "  " };
                    let line = Line::from(format!("{}{}", prefix, truncate(name, max_len)))
                        .fg(Color::Gray);
                    if is_selected { line.bold() } else { line }
                }
            }
        })
        .collect()
}

fn truncate(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len || max_len <= 3 {
        return name.to_string();
    }
    let kept: String = name.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DeckEntry;
    use crate::tui::render_to_string;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn browser() -> DeckBrowser {
        let entry = |category: &str, name: &str, reference: &str| DeckEntry {
            category: category.to_string(),
            name: name.to_string(),
            reference: reference.into(),
        };
        DeckBrowser::new(vec![
            entry("", "tutorial", "tutorial"),
            entry("languages", "spanish", "languages/spanish"),
        ])
    }

    #[test]
    fn test_draw_list() {
        let mut browser = browser();
        browser.resize(24);
        browser.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));

        let screen = render_to_string(60, 24, |f| draw(f, &browser));

        assert!(screen.contains("Select a Deck"));
        assert!(screen.contains("Uncategorized"));
        assert!(screen.contains("▶ tutorial"));
        assert!(screen.contains("  spanish"));
        assert!(screen.contains("Q quit"));
    }

    #[test]
    fn test_draw_search() {
        let mut browser = browser();
        browser.resize(24);
        for code in [KeyCode::Char('/'), KeyCode::Char('x')] {
            browser.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        }

        let screen = render_to_string(60, 24, |f| draw(f, &browser));

        assert!(screen.contains("Search: x"));
        assert!(screen.contains("No results"));
        assert!(screen.contains("Esc exit search"));
    }

    #[test]
    fn test_draw_without_decks() {
        let browser = DeckBrowser::new(Vec::new());
        let screen = render_to_string(60, 10, |f| draw(f, &browser));
        assert!(screen.contains("No decks found"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("spanish", 20), "spanish");
        assert_eq!(truncate("spanish-vocabulary", 10), "spanish...");
        assert_eq!(truncate("spanish", 3), "spanish");
    }
}
