// Team rosters: players in the order the team drafted them.

use super::player::{Player, Position};

/// A team's roster. Grows by one player per pick and never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Append a drafted player. Only the draft engine calls this.
    pub(crate) fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Players in draft order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player taken with this team's pick in `round` (1-indexed).
    pub fn pick_in_round(&self, round: u32) -> Option<&Player> {
        let idx = usize::try_from(round.checked_sub(1)?).ok()?;
        self.players.get(idx)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Players at one position, in draft order.
    pub fn at_position(&self, pos: Position) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.position == pos)
    }

    /// Number of rostered players at each position, in display order.
    pub fn position_counts(&self) -> [(Position, usize); 4] {
        Position::ALL.map(|pos| (pos, self.at_position(pos).count()))
    }
}
