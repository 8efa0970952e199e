// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Pick Board (9 rows)                               |
// +----------------------+------------+--------------+
// | Available (50%)      | Queue (20%)| Roster (30%) |
// +----------------------+------------+--------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the pick board including borders (three two-line rounds).
pub const PICK_BOARD_HEIGHT: u16 = 9;

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: pick counter, team on the clock, last notice.
    pub status_bar: Rect,
    /// Snake-order grid of pick slots.
    pub pick_board: Rect,
    /// Left of the middle section: filterable available players.
    pub available: Rect,
    /// Middle column: the user's queue.
    pub queue: Rect,
    /// Right column: roster viewer.
    pub roster: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(PICK_BOARD_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar = vertical[0];
    let pick_board = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(middle);

    AppLayout {
        status_bar,
        pick_board,
        available: horizontal[0],
        queue: horizontal[1],
        roster: horizontal[2],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
