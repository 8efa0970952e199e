// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// orchestrator, or into local ViewState changes (focus, cursors, filters).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mockdraft_core::draft::player::Position;

use super::ViewState;
use crate::protocol::{Panel, UserCommand};

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator, `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm on Windows emits Release events too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Tab => {
            view_state.focus = view_state.focus.next();
            None
        }
        KeyCode::BackTab => {
            view_state.focus = view_state.focus.prev();
            None
        }
        KeyCode::Char('a') => {
            if view_state.snapshot.is_over {
                None
            } else {
                Some(UserCommand::AutoDraft)
            }
        }
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }
        _ => match view_state.focus {
            Panel::Available => handle_available(key_event, view_state),
            Panel::Queue => handle_queue(key_event, view_state),
            Panel::Roster => handle_roster(key_event, view_state),
        },
    }
}

/// y/q confirm, n/Esc cancel, everything else is swallowed.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Search input: printable characters edit the text, Enter keeps it, Esc
/// clears it.
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
        }
        _ => return None,
    }
    view_state.available_cursor = 0;
    None
}

fn handle_available(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let len = view_state.visible_available().len();
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.available_cursor = view_state.available_cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.available_cursor = step_down(view_state.available_cursor, 1, len);
            None
        }
        KeyCode::PageUp => {
            view_state.available_cursor = view_state.available_cursor.saturating_sub(PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            view_state.available_cursor = step_down(view_state.available_cursor, PAGE_SIZE, len);
            None
        }
        KeyCode::Enter => {
            if view_state.snapshot.is_over {
                return None;
            }
            view_state
                .selected_available()
                .map(|p| UserCommand::Draft {
                    player_name: p.name.clone(),
                })
        }
        KeyCode::Char('s') | KeyCode::Char(' ') => view_state
            .selected_available()
            .map(|p| UserCommand::ToggleQueue {
                player_name: p.name.clone(),
            }),
        KeyCode::Char('/') => {
            view_state.filter_mode = true;
            None
        }
        KeyCode::Char('p') => {
            view_state.position_filter = next_position_filter(view_state.position_filter);
            view_state.available_cursor = 0;
            None
        }
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.position_filter = None;
            view_state.available_cursor = 0;
            None
        }
        _ => None,
    }
}

fn handle_queue(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let len = view_state.snapshot.queue.len();
    let cursor = view_state.queue_cursor;
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.queue_cursor = cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.queue_cursor = step_down(cursor, 1, len);
            None
        }
        KeyCode::Enter => {
            if view_state.snapshot.is_over {
                return None;
            }
            view_state.selected_queued().map(|p| UserCommand::Draft {
                player_name: p.name.clone(),
            })
        }
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            view_state.selected_queued().map(|p| UserCommand::Dequeue {
                player_name: p.name.clone(),
            })
        }
        KeyCode::Char('K') => {
            if cursor == 0 || cursor >= len {
                return None;
            }
            view_state.queue_cursor = cursor - 1;
            Some(UserCommand::MoveQueued {
                from: cursor,
                to: cursor - 1,
            })
        }
        KeyCode::Char('J') => {
            if cursor + 1 >= len {
                return None;
            }
            view_state.queue_cursor = cursor + 1;
            Some(UserCommand::MoveQueued {
                from: cursor,
                to: cursor + 1,
            })
        }
        _ => None,
    }
}

fn handle_roster(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let num_teams = view_state.num_teams().max(1);
    match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => {
            view_state.roster_team = if view_state.roster_team <= 1 {
                num_teams
            } else {
                view_state.roster_team - 1
            };
        }
        KeyCode::Right | KeyCode::Char('l') => {
            view_state.roster_team = if view_state.roster_team >= num_teams {
                1
            } else {
                view_state.roster_team + 1
            };
        }
        KeyCode::Char('u') => {
            view_state.roster_team = view_state.snapshot.user_team.clamp(1, num_teams);
        }
        _ => {}
    }
    None
}

fn step_down(cursor: usize, by: usize, len: usize) -> usize {
    cursor.saturating_add(by).min(len.saturating_sub(1))
}

/// None -> QB -> RB -> WR -> TE -> None
fn next_position_filter(current: Option<Position>) -> Option<Position> {
    match current {
        None => Some(Position::ALL[0]),
        Some(pos) => {
            let idx = Position::ALL.iter().position(|p| *p == pos)?;
            Position::ALL.get(idx + 1).copied()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
