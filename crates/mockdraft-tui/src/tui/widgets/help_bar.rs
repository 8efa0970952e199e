// Help bar widget: key hints for the current mode and focused panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::Panel;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(state),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Hints for whatever currently receives keys.
pub fn hint_text(state: &ViewState) -> &'static str {
    if state.confirm_quit {
        return " y:Quit | n:Cancel";
    }
    if state.filter_mode {
        return " Type to search | Enter:Keep | Esc:Clear";
    }
    match state.focus {
        Panel::Available => {
            " Enter:Draft | s:Queue | /:Search | p:Position | Esc:Clear | a:Auto | Tab:Panel | q:Quit"
        }
        Panel::Queue => " Enter:Draft | x:Remove | K/J:Move | a:Auto | Tab:Panel | q:Quit",
        Panel::Roster => " h/l:Team | u:My team | a:Auto | Tab:Panel | q:Quit",
    }
}
