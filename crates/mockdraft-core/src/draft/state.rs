// Draft state: pick counter, rosters, available pool, and the user's queue.
//
// `DraftState` is the single owner of all draft data. Its fields are private;
// every mutation goes through a method so that the available pool and the
// rosters always partition the player universe.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use super::pick::{pick_in_round, round_for_pick, team_for_pick, DraftPick, PickSlot};
use super::player::Player;
use super::queue::{DraftQueue, QueueError};
use super::roster::Roster;

// ---------------------------------------------------------------------------
// Settings and setup errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("invalid draft setting `{field}`: {message}")]
    InvalidSetting { field: String, message: String },

    #[error("duplicate player name in player pool: {0}")]
    DuplicatePlayer(String),
}

/// League shape for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSettings {
    pub num_teams: u32,
    pub num_rounds: u32,
    /// The human user's team (display only; anyone may draft on any turn).
    pub user_team: u32,
    /// Display names, index 0 is team 1.
    pub team_names: Vec<String>,
}

impl DraftSettings {
    /// Total number of picks in the draft.
    pub fn total_picks(&self) -> u32 {
        self.num_teams * self.num_rounds
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.num_teams < 2 {
            return Err(invalid("num_teams", format!("must be at least 2, got {}", self.num_teams)));
        }
        if self.num_rounds < 1 {
            return Err(invalid("num_rounds", "must be at least 1".to_string()));
        }
        // current_pick runs to total_picks + 1, which must fit in a u32.
        let fits = self
            .num_teams
            .checked_mul(self.num_rounds)
            .and_then(|total| total.checked_add(1))
            .is_some();
        if !fits {
            return Err(invalid(
                "num_rounds",
                format!(
                    "{} teams x {} rounds is too many picks",
                    self.num_teams, self.num_rounds
                ),
            ));
        }
        if self.user_team < 1 || self.user_team > self.num_teams {
            return Err(invalid(
                "user_team",
                format!("must be between 1 and {}, got {}", self.num_teams, self.user_team),
            ));
        }
        if self.team_names.len() != self.num_teams as usize {
            return Err(invalid(
                "team_names",
                format!(
                    "expected {} names, got {}",
                    self.num_teams,
                    self.team_names.len()
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> SetupError {
    SetupError::InvalidSetting {
        field: field.to_string(),
        message,
    }
}

// ---------------------------------------------------------------------------
// Actions and outcomes
// ---------------------------------------------------------------------------

/// Result of a draft attempt. The two non-`Drafted` variants are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    Drafted(DraftPick),
    /// The draft already ended; nothing changed.
    DraftOver,
    /// The player is unknown or already drafted; nothing changed.
    NotAvailable,
}

impl DraftOutcome {
    pub fn is_drafted(&self) -> bool {
        matches!(self, DraftOutcome::Drafted(_))
    }
}

/// Every user-triggered mutation of the draft state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    Draft { player_name: String },
    Enqueue { player_name: String },
    Dequeue { player_name: String },
    ToggleQueued { player_name: String },
    ReorderQueue { order: Vec<String> },
    MoveQueued { from: usize, to: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Draft(DraftOutcome),
    QueueChanged,
    QueueUnchanged,
    QueueRejected(QueueError),
}

// ---------------------------------------------------------------------------
// DraftState
// ---------------------------------------------------------------------------

/// The complete state of a mock draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    settings: DraftSettings,
    /// Undrafted players in source order.
    available: Vec<Player>,
    /// One roster per team, index 0 is team 1.
    rosters: Vec<Roster>,
    queue: DraftQueue,
    /// 1-indexed number of the next pick to be made.
    current_pick: u32,
    universe_size: usize,
}

impl DraftState {
    /// Create a new draft with every player available and pick 1 on the clock.
    pub fn new(settings: DraftSettings, players: Vec<Player>) -> Result<Self, SetupError> {
        settings.validate()?;

        let mut seen = HashSet::new();
        for p in &players {
            if !seen.insert(p.name.as_str()) {
                return Err(SetupError::DuplicatePlayer(p.name.clone()));
            }
        }

        let rosters = vec![Roster::new(); settings.num_teams as usize];
        let universe_size = players.len();

        Ok(DraftState {
            settings,
            available: players,
            rosters,
            queue: DraftQueue::new(),
            current_pick: 1,
            universe_size,
        })
    }

    // -- Pick order --------------------------------------------------------

    pub fn settings(&self) -> &DraftSettings {
        &self.settings
    }

    pub fn current_pick(&self) -> u32 {
        self.current_pick
    }

    pub fn total_picks(&self) -> u32 {
        self.settings.total_picks()
    }

    pub fn picks_remaining(&self) -> u32 {
        (self.total_picks() + 1).saturating_sub(self.current_pick)
    }

    pub fn is_over(&self) -> bool {
        self.current_pick > self.total_picks()
    }

    /// Round of the pick on the clock, or `None` once the draft is over.
    pub fn current_round(&self) -> Option<u32> {
        (!self.is_over()).then(|| round_for_pick(self.current_pick, self.settings.num_teams))
    }

    /// Team on the clock, or `None` once the draft is over.
    pub fn current_team(&self) -> Option<u32> {
        (!self.is_over()).then(|| team_for_pick(self.current_pick, self.settings.num_teams))
    }

    pub fn user_team(&self) -> u32 {
        self.settings.user_team
    }

    pub fn team_name(&self, team: u32) -> Option<&str> {
        let idx = usize::try_from(team.checked_sub(1)?).ok()?;
        self.settings.team_names.get(idx).map(String::as_str)
    }

    // -- Pool and rosters --------------------------------------------------

    pub fn available(&self) -> &[Player] {
        &self.available
    }

    pub fn find_available(&self, name: &str) -> Option<&Player> {
        self.available.iter().find(|p| p.name == name)
    }

    pub fn is_available(&self, name: &str) -> bool {
        self.find_available(name).is_some()
    }

    pub fn roster(&self, team: u32) -> Option<&Roster> {
        let idx = usize::try_from(team.checked_sub(1)?).ok()?;
        self.rosters.get(idx)
    }

    /// All rosters, index 0 is team 1.
    pub fn rosters(&self) -> &[Roster] {
        &self.rosters
    }

    /// Number of players the draft started with.
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    // -- Drafting ----------------------------------------------------------

    /// Draft a player to the team on the clock.
    ///
    /// Removes the player from the pool and the queue and advances the pick
    /// counter. Returns a no-op outcome (and changes nothing) when the draft
    /// is over or the player is not in the pool.
    pub fn draft(&mut self, player_name: &str) -> DraftOutcome {
        let Some(team) = self.current_team() else {
            return DraftOutcome::DraftOver;
        };
        let Some(idx) = self.available.iter().position(|p| p.name == player_name) else {
            return DraftOutcome::NotAvailable;
        };

        let player = self.available.remove(idx);
        self.queue.dequeue(&player.name);

        let num_teams = self.settings.num_teams;
        let pick = DraftPick {
            pick_number: self.current_pick,
            round: round_for_pick(self.current_pick, num_teams),
            pick_in_round: pick_in_round(self.current_pick, num_teams),
            team,
            player: player.clone(),
        };

        self.rosters[(team - 1) as usize].push(player);
        self.current_pick += 1;

        DraftOutcome::Drafted(pick)
    }

    /// Draft one uniformly random available player.
    pub fn auto_pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DraftOutcome {
        if self.is_over() {
            return DraftOutcome::DraftOver;
        }
        if self.available.is_empty() {
            return DraftOutcome::NotAvailable;
        }
        let idx = rng.random_range(0..self.available.len());
        let name = self.available[idx].name.clone();
        self.draft(&name)
    }

    /// Randomly draft until the draft is over or the pool runs dry.
    ///
    /// Returns the picks made, in order.
    pub fn auto_draft<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<DraftPick> {
        let mut picks = Vec::new();
        while let DraftOutcome::Drafted(pick) = self.auto_pick(rng) {
            picks.push(pick);
        }
        picks
    }

    // -- Pick board projection --------------------------------------------

    /// Every pick slot in the draft with its team and, once made, its player.
    ///
    /// Recomputed from the rosters and the snake formula on every call.
    pub fn pick_board(&self) -> Vec<PickSlot> {
        (1..=self.total_picks()).map(|n| self.pick_slot(n)).collect()
    }

    /// Picks made so far, in pick order.
    pub fn completed_picks(&self) -> Vec<DraftPick> {
        self.pick_board()
            .into_iter()
            .filter_map(|slot| {
                slot.player.map(|player| DraftPick {
                    pick_number: slot.pick_number,
                    round: slot.round,
                    pick_in_round: slot.pick_in_round,
                    team: slot.team,
                    player,
                })
            })
            .collect()
    }

    fn pick_slot(&self, pick_number: u32) -> PickSlot {
        let num_teams = self.settings.num_teams;
        let round = round_for_pick(pick_number, num_teams);
        let team = team_for_pick(pick_number, num_teams);
        let player = self
            .roster(team)
            .and_then(|r| r.pick_in_round(round))
            .cloned();
        PickSlot {
            pick_number,
            round,
            pick_in_round: pick_in_round(pick_number, num_teams),
            team,
            player,
        }
    }

    // -- Queue -------------------------------------------------------------

    pub fn queue(&self) -> &DraftQueue {
        &self.queue
    }

    pub fn is_queued(&self, name: &str) -> bool {
        self.queue.contains(name)
    }

    /// Queue an available player. No-op if already queued or not available.
    pub fn enqueue(&mut self, player_name: &str) -> bool {
        match self.find_available(player_name) {
            Some(player) => {
                let player = player.clone();
                self.queue.enqueue(player)
            }
            None => false,
        }
    }

    pub fn dequeue(&mut self, player_name: &str) -> bool {
        self.queue.dequeue(player_name)
    }

    /// Queue the player if unqueued, unqueue if queued. Returns whether the
    /// queue changed.
    pub fn toggle_queued(&mut self, player_name: &str) -> bool {
        if self.queue.contains(player_name) {
            self.queue.dequeue(player_name)
        } else {
            self.enqueue(player_name)
        }
    }

    /// Replace the queue order. `order` must name exactly the queued players.
    pub fn reorder_queue(&mut self, order: &[String]) -> Result<(), QueueError> {
        let players = order
            .iter()
            .map(|name| {
                self.queue
                    .players()
                    .iter()
                    .find(|p| &p.name == name)
                    .cloned()
                    .ok_or(QueueError::NotAPermutation)
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.queue.reorder(players)
    }

    pub fn move_queued(&mut self, from: usize, to: usize) -> Result<(), QueueError> {
        self.queue.move_entry(from, to)
    }

    // -- Action dispatch ---------------------------------------------------

    /// Apply one action in place.
    pub fn dispatch(&mut self, action: DraftAction) -> ActionOutcome {
        match action {
            DraftAction::Draft { player_name } => ActionOutcome::Draft(self.draft(&player_name)),
            DraftAction::Enqueue { player_name } => queue_changed(self.enqueue(&player_name)),
            DraftAction::Dequeue { player_name } => queue_changed(self.dequeue(&player_name)),
            DraftAction::ToggleQueued { player_name } => {
                queue_changed(self.toggle_queued(&player_name))
            }
            DraftAction::ReorderQueue { order } => match self.reorder_queue(&order) {
                Ok(()) => ActionOutcome::QueueChanged,
                Err(e) => ActionOutcome::QueueRejected(e),
            },
            DraftAction::MoveQueued { from, to } => match self.move_queued(from, to) {
                Ok(()) if from == to => ActionOutcome::QueueUnchanged,
                Ok(()) => ActionOutcome::QueueChanged,
                Err(e) => ActionOutcome::QueueRejected(e),
            },
        }
    }
}

fn queue_changed(changed: bool) -> ActionOutcome {
    if changed {
        ActionOutcome::QueueChanged
    } else {
        ActionOutcome::QueueUnchanged
    }
}

/// Pure transition: the state after applying `action` to `state`.
pub fn reduce(state: &DraftState, action: DraftAction) -> DraftState {
    let mut next = state.clone();
    next.dispatch(action);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::player::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings(num_teams: u32, num_rounds: u32) -> DraftSettings {
        DraftSettings {
            num_teams,
            num_rounds,
            user_team: 1,
            team_names: (1..=num_teams).map(|i| format!("Team {i}")).collect(),
        }
    }

    fn players(n: usize) -> Vec<Player> {
        let positions = Position::ALL;
        (1..=n)
            .map(|i| Player::new(&format!("Player {i}"), positions[i % 4], "TST", "OPP"))
            .collect()
    }

    fn state(num_teams: u32, num_rounds: u32, num_players: usize) -> DraftState {
        DraftState::new(settings(num_teams, num_rounds), players(num_players)).unwrap()
    }

    fn assert_partition(state: &DraftState) {
        let rostered: usize = state.rosters().iter().map(|r| r.len()).sum();
        assert_eq!(state.available().len() + rostered, state.universe_size());
        for p in state.available() {
            assert!(
                state.rosters().iter().all(|r| !r.contains(&p.name)),
                "{} is both available and rostered",
                p.name
            );
        }
    }

    // -- Construction --

    #[test]
    fn new_state_starts_at_pick_one() {
        let s = state(4, 2, 10);
        assert_eq!(s.current_pick(), 1);
        assert_eq!(s.current_team(), Some(1));
        assert_eq!(s.current_round(), Some(1));
        assert_eq!(s.total_picks(), 8);
        assert_eq!(s.picks_remaining(), 8);
        assert!(!s.is_over());
        assert_eq!(s.available().len(), 10);
        assert_eq!(s.rosters().len(), 4);
        assert!(s.queue().is_empty());
    }

    #[test]
    fn rejects_single_team() {
        let err = DraftState::new(settings(1, 2), players(4)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidSetting { ref field, .. } if field == "num_teams"));
    }

    #[test]
    fn rejects_zero_rounds() {
        let err = DraftState::new(settings(4, 0), players(4)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidSetting { ref field, .. } if field == "num_rounds"));
    }

    #[test]
    fn rejects_pick_count_overflow() {
        let err = DraftState::new(settings(70_000, 70_000), players(1)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidSetting { ref field, .. } if field == "num_rounds"));
    }

    #[test]
    fn accepts_large_league_that_fits() {
        let s = DraftState::new(settings(65_535, 65_536), players(1)).unwrap();
        assert_eq!(s.total_picks(), 65_535 * 65_536);
        assert_eq!(s.picks_remaining(), 65_535 * 65_536);
        assert!(!s.is_over());
        assert_eq!(s.current_team(), Some(1));

        // One more pick than u32 can count past.
        let err = DraftState::new(settings(65_535, 65_537), players(1)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidSetting { ref field, .. } if field == "num_rounds"));
    }

    #[test]
    fn rejects_user_team_out_of_range() {
        let mut s = settings(4, 2);
        s.user_team = 5;
        let err = DraftState::new(s, players(4)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidSetting { ref field, .. } if field == "user_team"));
    }

    #[test]
    fn rejects_team_name_count_mismatch() {
        let mut s = settings(4, 2);
        s.team_names.pop();
        let err = DraftState::new(s, players(4)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidSetting { ref field, .. } if field == "team_names"));
    }

    #[test]
    fn rejects_duplicate_player_names() {
        let mut pool = players(3);
        pool.push(pool[0].clone());
        let err = DraftState::new(settings(2, 2), pool).unwrap_err();
        assert_eq!(err, SetupError::DuplicatePlayer("Player 1".to_string()));
    }

    #[test]
    fn team_name_lookup() {
        let s = state(4, 2, 4);
        assert_eq!(s.team_name(1), Some("Team 1"));
        assert_eq!(s.team_name(4), Some("Team 4"));
        assert_eq!(s.team_name(0), None);
        assert_eq!(s.team_name(5), None);
    }

    // -- Drafting --

    #[test]
    fn draft_moves_player_to_team_on_clock() {
        let mut s = state(4, 2, 10);
        let outcome = s.draft("Player 3");
        let DraftOutcome::Drafted(pick) = outcome else {
            panic!("expected a pick, got {outcome:?}");
        };
        assert_eq!(pick.pick_number, 1);
        assert_eq!(pick.round, 1);
        assert_eq!(pick.pick_in_round, 1);
        assert_eq!(pick.team, 1);
        assert_eq!(pick.player.name, "Player 3");
        assert_eq!(s.current_pick(), 2);
        assert_eq!(s.current_team(), Some(2));
        assert!(!s.is_available("Player 3"));
        assert!(s.roster(1).unwrap().contains("Player 3"));
        assert_partition(&s);
    }

    #[test]
    fn drafting_same_player_twice_is_noop() {
        let mut s = state(4, 2, 10);
        assert!(s.draft("Player 1").is_drafted());
        let before = s.clone();
        assert_eq!(s.draft("Player 1"), DraftOutcome::NotAvailable);
        assert_eq!(s, before);
    }

    #[test]
    fn drafting_unknown_player_is_noop() {
        let mut s = state(4, 2, 10);
        let before = s.clone();
        assert_eq!(s.draft("Nobody"), DraftOutcome::NotAvailable);
        assert_eq!(s, before);
    }

    #[test]
    fn draft_after_over_changes_nothing() {
        let mut s = state(2, 1, 5);
        assert!(s.draft("Player 1").is_drafted());
        assert!(s.draft("Player 2").is_drafted());
        assert!(s.is_over());
        assert_eq!(s.current_team(), None);
        assert_eq!(s.current_round(), None);
        assert_eq!(s.picks_remaining(), 0);

        let before = s.clone();
        assert_eq!(s.draft("Player 3"), DraftOutcome::DraftOver);
        assert_eq!(s.draft("Player 3"), DraftOutcome::DraftOver);
        assert_eq!(s, before);
    }

    #[test]
    fn drafting_queued_player_removes_it_from_queue() {
        let mut s = state(4, 2, 10);
        s.enqueue("Player 5");
        s.enqueue("Player 6");
        assert!(s.draft("Player 5").is_drafted());
        assert!(!s.is_queued("Player 5"));
        assert!(s.is_queued("Player 6"));
        assert_eq!(s.queue().len(), 1);
    }

    #[test]
    fn rosters_follow_snake_order() {
        let mut s = state(3, 2, 6);
        for i in 1..=6 {
            assert!(s.draft(&format!("Player {i}")).is_drafted());
        }
        let names = |team: u32| -> Vec<String> {
            s.roster(team)
                .unwrap()
                .players()
                .iter()
                .map(|p| p.name.clone())
                .collect()
        };
        assert_eq!(names(1), vec!["Player 1", "Player 6"]);
        assert_eq!(names(2), vec!["Player 2", "Player 5"]);
        assert_eq!(names(3), vec!["Player 3", "Player 4"]);
    }

    // -- Auto-draft --

    #[test]
    fn auto_draft_fills_every_pick() {
        let mut s = state(4, 3, 20);
        let mut rng = StdRng::seed_from_u64(7);
        let picks = s.auto_draft(&mut rng);
        assert_eq!(picks.len(), 12);
        assert!(s.is_over());
        assert_eq!(s.available().len(), 8);
        for r in s.rosters() {
            assert_eq!(r.len(), 3);
        }
        let numbers: Vec<u32> = picks.iter().map(|p| p.pick_number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
        assert_partition(&s);
    }

    #[test]
    fn auto_draft_is_deterministic_for_a_seed() {
        let mut a = state(4, 2, 12);
        let mut b = state(4, 2, 12);
        a.auto_draft(&mut StdRng::seed_from_u64(99));
        b.auto_draft(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn auto_draft_stops_when_pool_runs_out() {
        let mut s = state(4, 3, 5);
        let picks = s.auto_draft(&mut StdRng::seed_from_u64(1));
        assert_eq!(picks.len(), 5);
        assert!(s.available().is_empty());
        assert!(!s.is_over());
        assert_eq!(s.current_pick(), 6);
    }

    #[test]
    fn auto_draft_after_over_is_noop() {
        let mut s = state(2, 1, 4);
        s.auto_draft(&mut StdRng::seed_from_u64(3));
        let before = s.clone();
        assert!(s.auto_draft(&mut StdRng::seed_from_u64(3)).is_empty());
        assert_eq!(s.auto_pick(&mut StdRng::seed_from_u64(3)), DraftOutcome::DraftOver);
        assert_eq!(s, before);
    }

    #[test]
    fn auto_draft_clears_queue_entries_it_takes() {
        let mut s = state(2, 2, 4);
        s.enqueue("Player 1");
        s.enqueue("Player 2");
        s.auto_draft(&mut StdRng::seed_from_u64(11));
        assert!(s.queue().is_empty());
    }

    // -- Pick board --

    #[test]
    fn pick_board_empty_draft() {
        let s = state(4, 2, 8);
        let board = s.pick_board();
        assert_eq!(board.len(), 8);
        let teams: Vec<u32> = board.iter().map(|slot| slot.team).collect();
        assert_eq!(teams, vec![1, 2, 3, 4, 4, 3, 2, 1]);
        assert!(board.iter().all(|slot| slot.player.is_none()));
        assert_eq!((board[4].round, board[4].pick_in_round), (2, 1));
    }

    #[test]
    fn pick_board_places_players_by_round() {
        let mut s = state(2, 2, 4);
        for name in ["Player 1", "Player 2", "Player 3"] {
            s.draft(name);
        }
        let board = s.pick_board();
        let filled: Vec<Option<&str>> = board
            .iter()
            .map(|slot| slot.player.as_ref().map(|p| p.name.as_str()))
            .collect();
        // Snake: T1, T2, T2, T1
        assert_eq!(
            filled,
            vec![Some("Player 1"), Some("Player 2"), Some("Player 3"), None]
        );
        assert_eq!(board[2].team, 2);
    }

    #[test]
    fn completed_picks_match_draft_results() {
        let mut s = state(3, 2, 6);
        let mut made = Vec::new();
        for i in [4, 2, 6, 1] {
            if let DraftOutcome::Drafted(pick) = s.draft(&format!("Player {i}")) {
                made.push(pick);
            }
        }
        assert_eq!(s.completed_picks(), made);
    }

    // -- Queue --

    #[test]
    fn enqueue_requires_available_player() {
        let mut s = state(4, 2, 10);
        s.draft("Player 1");
        assert!(!s.enqueue("Player 1"));
        assert!(!s.enqueue("Nobody"));
        assert!(s.queue().is_empty());
    }

    #[test]
    fn enqueue_twice_does_not_duplicate() {
        let mut s = state(4, 2, 10);
        assert!(s.enqueue("Player 2"));
        assert!(!s.enqueue("Player 2"));
        assert_eq!(s.queue().len(), 1);
    }

    #[test]
    fn toggle_queued_flips_membership() {
        let mut s = state(4, 2, 10);
        assert!(s.toggle_queued("Player 2"));
        assert!(s.is_queued("Player 2"));
        assert!(s.toggle_queued("Player 2"));
        assert!(!s.is_queued("Player 2"));
    }

    #[test]
    fn reorder_queue_by_names() {
        let mut s = state(4, 2, 10);
        for n in ["Player 1", "Player 2", "Player 3"] {
            s.enqueue(n);
        }
        let order: Vec<String> = ["Player 3", "Player 1", "Player 2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        s.reorder_queue(&order).unwrap();
        let names: Vec<&str> = s.queue().players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Player 3", "Player 1", "Player 2"]);
    }

    #[test]
    fn reorder_queue_rejects_non_members() {
        let mut s = state(4, 2, 10);
        s.enqueue("Player 1");
        s.enqueue("Player 2");
        let before = s.clone();
        let order = vec!["Player 1".to_string(), "Player 9".to_string()];
        assert_eq!(s.reorder_queue(&order), Err(QueueError::NotAPermutation));
        assert_eq!(s, before);
    }

    // -- Dispatch / reduce --

    #[test]
    fn dispatch_reports_outcomes() {
        let mut s = state(4, 2, 10);
        assert_eq!(
            s.dispatch(DraftAction::Enqueue { player_name: "Player 1".into() }),
            ActionOutcome::QueueChanged
        );
        assert_eq!(
            s.dispatch(DraftAction::Enqueue { player_name: "Player 1".into() }),
            ActionOutcome::QueueUnchanged
        );
        assert_eq!(
            s.dispatch(DraftAction::MoveQueued { from: 0, to: 4 }),
            ActionOutcome::QueueRejected(QueueError::IndexOutOfRange { index: 4, len: 1 })
        );
        assert!(matches!(
            s.dispatch(DraftAction::Draft { player_name: "Player 1".into() }),
            ActionOutcome::Draft(DraftOutcome::Drafted(_))
        ));
        assert_eq!(
            s.dispatch(DraftAction::Dequeue { player_name: "Player 1".into() }),
            ActionOutcome::QueueUnchanged
        );
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let s = state(4, 2, 10);
        let before = s.clone();
        let next = reduce(&s, DraftAction::Draft { player_name: "Player 1".into() });
        assert_eq!(s, before);
        assert_eq!(next.current_pick(), 2);
        assert!(!next.is_available("Player 1"));
    }

    #[test]
    fn reduce_chain_matches_dispatch() {
        let actions = vec![
            DraftAction::Enqueue { player_name: "Player 2".into() },
            DraftAction::Enqueue { player_name: "Player 3".into() },
            DraftAction::MoveQueued { from: 1, to: 0 },
            DraftAction::Draft { player_name: "Player 3".into() },
            DraftAction::ToggleQueued { player_name: "Player 4".into() },
        ];
        let start = state(4, 2, 10);
        let reduced = actions.iter().cloned().fold(start.clone(), |acc, a| reduce(&acc, a));
        let mut dispatched = start;
        for a in actions {
            dispatched.dispatch(a);
        }
        assert_eq!(reduced, dispatched);
        let queued: Vec<&str> = reduced.queue().players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(queued, vec!["Player 2", "Player 4"]);
    }
}
