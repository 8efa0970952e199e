// Available players widget: filterable table of undrafted players.
//
// Columns: queued star, name, position, matchup. Filtered by the position
// filter and search text from ViewState; the cursor row is highlighted and
// kept in view by the table state.

use mockdraft_core::draft::player::Player;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use super::{focus_border, position_color};
use crate::tui::ViewState;

/// Render the available players table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let visible = state.visible_available();

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Name"),
        Cell::from("Pos"),
        Cell::from("Matchup"),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = visible
        .iter()
        .map(|p| player_row(p, state.is_queued(&p.name)))
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Min(16),
        Constraint::Length(4),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(focused))
                .title(build_title(state, visible.len())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let selected = (!visible.is_empty()).then_some(state.available_cursor);
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn player_row(player: &Player, queued: bool) -> Row<'static> {
    let star = if queued { "★" } else { "" };
    Row::new(vec![
        Cell::from(star).style(Style::default().fg(Color::Yellow)),
        Cell::from(player.name.clone()),
        Cell::from(player.position.display_str())
            .style(Style::default().fg(position_color(player.position))),
        Cell::from(player.matchup()),
    ])
}

/// Title with active filters and the filtered count.
pub fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Available Players");
    if let Some(pos) = state.position_filter {
        title.push_str(&format!(" [{}]", pos.display_str()));
    }
    if state.filter_mode || !state.filter_text.is_empty() {
        let cursor = if state.filter_mode { "_" } else { "" };
        title.push_str(&format!(" /{}{}", state.filter_text, cursor));
    }
    title.push_str(&format!(" ({})", filtered_count));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
