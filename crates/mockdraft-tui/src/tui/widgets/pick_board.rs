// Pick board widget: one cell per pick slot, one row per round.
//
// Cells read "round.NN Team" over the drafted player (or "--"). Rows are laid
// out in pick order, so even rounds list teams from last to first. The slot on
// the clock is highlighted and the user's slots are marked in cyan.

use mockdraft_core::draft::pick::{pick_label, PickSlot};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::position_color;
use crate::tui::ViewState;

/// Lines per round row.
const ROW_HEIGHT: u16 = 2;

/// Render the pick board into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let snap = &state.snapshot;
    let num_teams = state.num_teams();

    if snap.pick_board.is_empty() || num_teams == 0 {
        let paragraph = Paragraph::new("  No picks to show.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Pick Board"));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = u32::from(area.height.saturating_sub(2) / ROW_HEIGHT).max(1);
    let focus_round = snap.current_round.unwrap_or(snap.num_rounds);
    let first = first_visible_round(focus_round, snap.num_rounds, visible);
    let last = (first + visible - 1).min(snap.num_rounds);

    let rows: Vec<Row> = (first..=last)
        .map(|round| {
            let cells: Vec<Cell> = snap
                .pick_board
                .iter()
                .filter(|slot| slot.round == round)
                .map(|slot| slot_cell(slot, state))
                .collect();
            Row::new(cells).height(ROW_HEIGHT)
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, num_teams); num_teams as usize];
    let title = format!("Pick Board (rounds {}-{} of {})", first, last, snap.num_rounds);

    let table = Table::new(rows, widths)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

/// First round to show so the round on the clock stays visible, with the
/// previous round above it for context.
pub fn first_visible_round(focus_round: u32, num_rounds: u32, visible: u32) -> u32 {
    if num_rounds <= visible {
        return 1;
    }
    let max_start = num_rounds - visible + 1;
    focus_round.saturating_sub(1).clamp(1, max_start)
}

fn slot_cell<'a>(slot: &'a PickSlot, state: &ViewState) -> Cell<'a> {
    let is_current = !state.snapshot.is_over && slot.pick_number == state.snapshot.current_pick;
    let is_user = state.is_user_team(slot.team);

    let label_style = if is_current {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if is_user {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let label = Line::from(Span::styled(
        format!(
            "{} {}",
            pick_label(slot.pick_number, state.num_teams()),
            state.team_name(slot.team)
        ),
        label_style,
    ));

    let player_line = match slot.player {
        Some(ref player) => Line::from(vec![
            Span::styled(
                player.position.display_str(),
                Style::default().fg(position_color(player.position)),
            ),
            Span::raw(" "),
            Span::styled(player.name.as_str(), Style::default().fg(Color::White)),
        ]),
        None => Line::from(Span::styled("--", Style::default().fg(Color::DarkGray))),
    };

    Cell::from(Text::from(vec![label, player_line]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
