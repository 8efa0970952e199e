// Application state and orchestration logic.
//
// Owns the single `DraftState`. User commands from the TUI arrive over an
// mpsc channel and are applied to the engine one at a time; after each one a
// full snapshot is pushed back to the TUI.

use mockdraft_core::config::Config;
use mockdraft_core::draft::pick::pick_label;
use mockdraft_core::draft::state::{ActionOutcome, DraftAction, DraftOutcome, DraftState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::protocol::{AppSnapshot, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub draft: DraftState,
    /// Random source for auto-draft.
    pub rng: StdRng,
}

impl AppState {
    /// Create the app state, seeding auto-draft from the config when a seed
    /// is set and from OS entropy otherwise.
    pub fn new(config: Config, draft: DraftState) -> Self {
        let rng = match config.draft.auto_draft_seed {
            Some(seed) => {
                info!("Auto-draft seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        AppState::with_rng(config, draft, rng)
    }

    pub fn with_rng(config: Config, draft: DraftState, rng: StdRng) -> Self {
        AppState { config, draft, rng }
    }

    /// Build a full snapshot of the draft for the TUI.
    pub fn build_snapshot(&self) -> AppSnapshot {
        let draft = &self.draft;
        let settings = draft.settings();
        AppSnapshot {
            league_name: self.config.league.name.clone(),
            team_names: settings.team_names.clone(),
            user_team: settings.user_team,
            num_rounds: settings.num_rounds,
            current_pick: draft.current_pick(),
            total_picks: draft.total_picks(),
            current_round: draft.current_round(),
            current_team: draft.current_team(),
            is_over: draft.is_over(),
            pick_board: draft.pick_board(),
            available: draft.available().to_vec(),
            queue: draft.queue().players().to_vec(),
            rosters: draft.rosters().to_vec(),
        }
    }

    /// Apply one command to the draft. Returns a status-bar notice, if any.
    ///
    /// `Quit` is handled by the event loop and is a no-op here.
    pub fn apply_command(&mut self, cmd: UserCommand) -> Option<String> {
        match cmd {
            UserCommand::Draft { player_name } => {
                let outcome = self.draft.dispatch(DraftAction::Draft {
                    player_name: player_name.clone(),
                });
                match outcome {
                    ActionOutcome::Draft(DraftOutcome::Drafted(pick)) => {
                        let team = self.team_label(pick.team);
                        info!(
                            "Pick {} ({}): {} -> {}",
                            pick.pick_number,
                            pick_label(pick.pick_number, self.draft.settings().num_teams),
                            pick.player.name,
                            team
                        );
                        if self.draft.is_over() {
                            info!("Draft complete after {} picks", pick.pick_number);
                        }
                        Some(format!("{} drafted {}", team, pick.player.name))
                    }
                    ActionOutcome::Draft(DraftOutcome::DraftOver) => {
                        debug!("Ignoring draft of {}: draft is over", player_name);
                        Some("The draft is over".to_string())
                    }
                    ActionOutcome::Draft(DraftOutcome::NotAvailable) => {
                        debug!("Ignoring draft of {}: not available", player_name);
                        Some(format!("{} is not available", player_name))
                    }
                    other => {
                        warn!("Unexpected outcome for draft action: {:?}", other);
                        None
                    }
                }
            }
            UserCommand::AutoDraft => {
                if self.draft.is_over() {
                    debug!("Ignoring auto-draft: draft is over");
                    return Some("The draft is over".to_string());
                }
                let picks = self.draft.auto_draft(&mut self.rng);
                for pick in &picks {
                    info!(
                        "Auto pick {} ({}): {} -> {}",
                        pick.pick_number,
                        pick_label(pick.pick_number, self.draft.settings().num_teams),
                        pick.player.name,
                        self.team_label(pick.team)
                    );
                }
                if !self.draft.is_over() {
                    warn!(
                        "Player pool ran out with {} picks remaining",
                        self.draft.picks_remaining()
                    );
                    return Some(format!(
                        "Auto-drafted {} picks; no players left",
                        picks.len()
                    ));
                }
                info!("Draft complete after auto-draft of {} picks", picks.len());
                Some(format!("Auto-drafted {} picks", picks.len()))
            }
            UserCommand::ToggleQueue { player_name } => {
                let was_queued = self.draft.is_queued(&player_name);
                let outcome = self.draft.dispatch(DraftAction::ToggleQueued {
                    player_name: player_name.clone(),
                });
                match outcome {
                    ActionOutcome::QueueChanged if was_queued => {
                        debug!("Unqueued {}", player_name);
                        Some(format!("Removed {} from queue", player_name))
                    }
                    ActionOutcome::QueueChanged => {
                        debug!("Queued {}", player_name);
                        Some(format!("Queued {}", player_name))
                    }
                    _ => {
                        debug!("Ignoring queue toggle of {}: not available", player_name);
                        None
                    }
                }
            }
            UserCommand::Dequeue { player_name } => {
                if let ActionOutcome::QueueChanged = self.draft.dispatch(DraftAction::Dequeue {
                    player_name: player_name.clone(),
                }) {
                    debug!("Unqueued {}", player_name);
                    return Some(format!("Removed {} from queue", player_name));
                }
                None
            }
            UserCommand::MoveQueued { from, to } => {
                match self.draft.dispatch(DraftAction::MoveQueued { from, to }) {
                    ActionOutcome::QueueRejected(e) => {
                        debug!("Ignoring queue move: {}", e);
                    }
                    _ => debug!("Moved queue entry {} -> {}", from, to),
                }
                None
            }
            UserCommand::Quit => None,
        }
    }

    fn team_label(&self, team: u32) -> String {
        self.draft
            .team_name(team)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Team {team}"))
    }
}

// ---------------------------------------------------------------------------
// Command handling
// ---------------------------------------------------------------------------

/// Apply a command and push the resulting notice and snapshot to the TUI.
pub async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    if let Some(notice) = state.apply_command(cmd) {
        let _ = ui_tx.send(UiUpdate::Notice(notice)).await;
    }
    send_snapshot(state, ui_tx).await;
}

async fn send_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let snapshot = state.build_snapshot();
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(snapshot)))
        .await;
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the app event loop until the TUI quits or goes away.
///
/// Sends an initial snapshot so the TUI has something to draw before the
/// first command.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!(
        "Application event loop started: {} teams, {} rounds, {} players",
        state.draft.settings().num_teams,
        state.draft.settings().num_rounds,
        state.draft.universe_size()
    );

    send_snapshot(&state, &ui_tx).await;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit requested");
                        break;
                    }
                    Some(cmd) => {
                        debug!("User command: {:?}", cmd);
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            _ = ui_tx.closed() => {
                info!("UI channel closed, shutting down");
                break;
            }
        }
    }

    info!(
        "Application event loop finished at pick {}/{}",
        state.draft.current_pick().min(state.draft.total_picks()),
        state.draft.total_picks()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
