// TUI widget modules for each dashboard panel, plus shared styling.

pub mod available;
pub mod help_bar;
pub mod pick_board;
pub mod queue;
pub mod quit_confirm;
pub mod roster;
pub mod status_bar;

use mockdraft_core::draft::player::Position;
use ratatui::style::{Color, Style};

/// Text color for a position tag.
pub fn position_color(position: Position) -> Color {
    match position {
        Position::Quarterback => Color::Red,
        Position::RunningBack => Color::Green,
        Position::WideReceiver => Color::Blue,
        Position::TightEnd => Color::Yellow,
    }
}

/// Border style for a panel: cyan when it holds keyboard focus.
pub fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_position_has_a_distinct_color() {
        let colors: Vec<Color> = Position::ALL.iter().map(|p| position_color(*p)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn focus_border_highlights_only_focused() {
        assert_eq!(focus_border(true).fg, Some(Color::Cyan));
        assert_eq!(focus_border(false).fg, None);
    }
}
