// Message types passed between the TUI and the app orchestrator.
//
// The TUI sends `UserCommand`s; the app applies them to the draft engine and
// answers with `UiUpdate`s carrying a full `AppSnapshot`.

use mockdraft_core::draft::pick::PickSlot;
use mockdraft_core::draft::player::Player;
use mockdraft_core::draft::roster::Roster;

/// Commands from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Draft this player to the team on the clock.
    Draft { player_name: String },
    /// Randomly fill every remaining pick.
    AutoDraft,
    /// Star/unstar a player in the user's queue.
    ToggleQueue { player_name: String },
    Dequeue { player_name: String },
    /// Move a queue entry from one index to another.
    MoveQueued { from: usize, to: usize },
    Quit,
}

/// Updates from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    StateSnapshot(Box<AppSnapshot>),
    /// One-line message for the status bar (last pick, ignored action).
    Notice(String),
}

/// Everything the dashboard needs to draw one frame of draft data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSnapshot {
    pub league_name: String,
    /// Index 0 is team 1.
    pub team_names: Vec<String>,
    pub user_team: u32,
    pub num_rounds: u32,
    pub current_pick: u32,
    pub total_picks: u32,
    /// `None` once the draft is over.
    pub current_round: Option<u32>,
    /// `None` once the draft is over.
    pub current_team: Option<u32>,
    pub is_over: bool,
    pub pick_board: Vec<PickSlot>,
    /// Undrafted players in source order.
    pub available: Vec<Player>,
    pub queue: Vec<Player>,
    /// Index 0 is team 1.
    pub rosters: Vec<Roster>,
}

/// Panels that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Available,
    Queue,
    Roster,
}

impl Panel {
    /// Next panel in Tab order.
    pub fn next(self) -> Panel {
        match self {
            Panel::Available => Panel::Queue,
            Panel::Queue => Panel::Roster,
            Panel::Roster => Panel::Available,
        }
    }

    /// Previous panel in Tab order.
    pub fn prev(self) -> Panel {
        match self {
            Panel::Available => Panel::Roster,
            Panel::Queue => Panel::Available,
            Panel::Roster => Panel::Queue,
        }
    }
}
