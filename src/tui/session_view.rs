//! Study screen: header with progress and score, the card, notice and help line.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use super::centered;
use crate::session::StudySession;

pub fn draw(f: &mut Frame, session: &StudySession<'_>) {
    let area = f.area();

    let Some(face) = session.visible_face() else {
        let message = Paragraph::new("No cards in deck")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(message, centered(area, area.width, 1));
        return;
    };

    let [header_area, card_area, notice_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut header = vec![
        Span::raw(session.deck().name.clone()),
        Span::raw("  "),
        Span::raw(session.progress_label()),
    ];
    if let Some(badge) = session.score_badge() {
        header.push(Span::styled(format!("  - {}", badge), Style::default().fg(Color::Green)));
    }
    let header = Paragraph::new(Line::from(header))
        .add_modifier(Modifier::BOLD)
        .alignment(Alignment::Center);
    f.render_widget(header, header_area);

    let available = area.width.max(20);
    let card_width = available - available / 4;
    // borders and padding take two columns and rows on each side
    let text_width = card_width.saturating_sub(4).max(1) as usize;
    let card_height = wrapped_height(face, text_width) + 4;

    let border_color = if session.is_flipped() { Color::Cyan } else { Color::White };
    let card = Paragraph::new(face.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_style(Style::default().fg(border_color))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(card, centered(card_area, card_width, card_height));

    if let Some(notice) = session.notice() {
        let notice = Paragraph::new(notice.to_string())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(notice, notice_area);
    }

    let help = Paragraph::new(session.help_text())
        .add_modifier(Modifier::ITALIC)
        .alignment(Alignment::Center);
    f.render_widget(help, help_area);
}

/// Rows `text` needs when wrapped at `width` columns.
fn wrapped_height(text: &str, width: usize) -> u16 {
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    rows.max(1).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::{Card, Deck, DeckReference};
    use crate::storage::DeckRepository;
    use crate::tui::render_to_string;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct NullRepository;

    impl DeckRepository for NullRepository {
        fn load(&self, reference: &DeckReference) -> Result<Deck> {
            Err(crate::error::CramError::NotFound(reference.clone()))
        }

        fn save(&self, _reference: &DeckReference, _deck: &Deck) -> Result<()> {
            Ok(())
        }
    }

    fn press(session: &mut StudySession<'_>, c: char) {
        session.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn test_draw_card() {
        let deck = Deck::new("Spanish", vec![Card::new("hola", "hello"), Card::new("adiós", "bye")]);
        let mut session = StudySession::new(deck, "spanish".into(), &NullRepository);

        let front = render_to_string(60, 20, |f| draw(f, &session));
        assert!(front.contains("Spanish  (1/2)"));
        assert!(front.contains("hola"));
        assert!(!front.contains("hello"));
        assert!(front.contains("[R] rate"));

        press(&mut session, 'l');
        let back = render_to_string(60, 20, |f| draw(f, &session));
        assert!(back.contains("hello"));

        press(&mut session, 'r');
        press(&mut session, '4');
        press(&mut session, 'k');
        let rated = render_to_string(60, 20, |f| draw(f, &session));
        assert!(rated.contains("- 4/5"));
    }

    #[test]
    fn test_draw_empty_deck() {
        let session = StudySession::new(Deck::new("Empty", Vec::new()), "empty".into(), &NullRepository);
        let screen = render_to_string(60, 10, |f| draw(f, &session));
        assert!(screen.contains("No cards in deck"));
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("short", 20), 1);
        assert_eq!(wrapped_height("0123456789abcdefghij!", 10), 3);
        assert_eq!(wrapped_height("one\n\nthree", 20), 3);
        assert_eq!(wrapped_height("", 20), 1);
    }
}
