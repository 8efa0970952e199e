// Queue widget: the user's ordered wishlist of undrafted players.

use mockdraft_core::draft::player::Player;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::{focus_border, position_color};
use crate::tui::ViewState;

pub const EMPTY_HINT: &str = "Your queue is empty. Press s on a player to add them here.";

/// Render the queue into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let queue = &state.snapshot.queue;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused))
        .title(format!("Queue ({})", queue.len()));

    if queue.is_empty() {
        let paragraph = Paragraph::new(EMPTY_HINT)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = queue
        .iter()
        .enumerate()
        .map(|(i, p)| ListItem::new(queue_line(i, p)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(focused.then_some(state.queue_cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// "1. WR CeeDee Lamb"
pub fn queue_line(index: usize, player: &Player) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::Gray)),
        Span::styled(
            player.position.display_str(),
            Style::default().fg(position_color(player.position)),
        ),
        Span::raw(" "),
        Span::raw(player.name.as_str()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{buffer_text, sample_view};
    use mockdraft_core::draft::player::Position;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn queue_line_numbers_from_one() {
        let p = Player::new("Sam LaPorta", Position::TightEnd, "DET", "CHI");
        let text: String = queue_line(0, &p)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "1. TE Sam LaPorta");
    }

    #[test]
    fn render_empty_queue_shows_hint() {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = sample_view();
        state.snapshot.queue.clear();
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains("Your queue is empty."), "{row}");
    }

    #[test]
    fn render_does_not_panic_with_entries() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = sample_view();
        state.queue_cursor = 1;
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
    }
}
