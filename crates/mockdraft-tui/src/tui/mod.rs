// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the last snapshot from the app
// orchestrator plus purely local UI state (focus, cursors, filters). The app
// pushes `UiUpdate` messages over an mpsc channel; the TUI applies them and
// re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use mockdraft_core::draft::player::{Player, Position};
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::protocol::{AppSnapshot, Panel, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state: the last draft snapshot plus focus, cursors, and filters.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Last snapshot received from the app orchestrator.
    pub snapshot: AppSnapshot,
    /// Last notice from the app (shown in the status bar).
    pub notice: Option<String>,
    /// Which panel receives navigation keys.
    pub focus: Panel,
    /// Selected row in the filtered available list.
    pub available_cursor: usize,
    /// Selected row in the queue.
    pub queue_cursor: usize,
    /// Team shown in the roster panel (1-indexed).
    pub roster_team: u32,
    /// Current search text.
    pub filter_text: String,
    /// Whether the search input is capturing keys.
    pub filter_mode: bool,
    pub position_filter: Option<Position>,
    /// Whether the quit confirmation dialog is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            snapshot: AppSnapshot::default(),
            notice: None,
            focus: Panel::Available,
            available_cursor: 0,
            queue_cursor: 0,
            roster_team: 1,
            filter_text: String::new(),
            filter_mode: false,
            position_filter: None,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    /// Replace the mirrored draft data and clamp cursors to the new lists.
    ///
    /// The first snapshot also points the roster panel at the user's team.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        let first = self.snapshot.team_names.is_empty();
        self.snapshot = snapshot;
        if first && self.snapshot.user_team >= 1 {
            self.roster_team = self.snapshot.user_team;
        }
        let num_teams = self.num_teams().max(1);
        self.roster_team = self.roster_team.clamp(1, num_teams);
        self.clamp_cursors();
    }

    pub fn num_teams(&self) -> u32 {
        self.snapshot.team_names.len() as u32
    }

    /// Display name for a team, falling back to "Team N".
    pub fn team_name(&self, team: u32) -> String {
        team.checked_sub(1)
            .and_then(|i| self.snapshot.team_names.get(i as usize))
            .cloned()
            .unwrap_or_else(|| format!("Team {team}"))
    }

    pub fn is_user_team(&self, team: u32) -> bool {
        team == self.snapshot.user_team
    }

    pub fn is_queued(&self, name: &str) -> bool {
        self.snapshot.queue.iter().any(|p| p.name == name)
    }

    /// Available players passing the position filter and search text.
    pub fn visible_available(&self) -> Vec<&Player> {
        self.snapshot
            .available
            .iter()
            .filter(|p| p.matches(self.position_filter, &self.filter_text))
            .collect()
    }

    pub fn selected_available(&self) -> Option<&Player> {
        self.visible_available().get(self.available_cursor).copied()
    }

    pub fn selected_queued(&self) -> Option<&Player> {
        self.snapshot.queue.get(self.queue_cursor)
    }

    /// Keep both cursors inside their lists.
    pub fn clamp_cursors(&mut self) {
        let visible = self.visible_available().len();
        self.available_cursor = self.available_cursor.min(visible.saturating_sub(1));
        let queued = self.snapshot.queue.len();
        self.queue_cursor = self.queue_cursor.min(queued.saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => state.apply_snapshot(*snapshot),
        UiUpdate::Notice(text) => state.notice = Some(text),
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::pick_board::render(frame, layout.pick_board, state);
    widgets::available::render(frame, layout.available, state, state.focus == Panel::Available);
    widgets::queue::render(frame, layout.queue, state, state.focus == Panel::Queue);
    widgets::roster::render(frame, layout.roster, state, state.focus == Panel::Roster);
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// Owns the terminal: enters raw mode and the alternate screen, installs a
/// panic hook that restores the terminal, and restores it again on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => {
                        info!("UI update channel closed");
                        break Ok(());
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal input error: {}", e);
                        break Err(e.into());
                    }
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(e.into());
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
