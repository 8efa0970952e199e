// Player records and the closed set of football positions.

use std::fmt;

/// Football positions a player can be listed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
}

impl Position {
    /// All positions in display order.
    pub const ALL: [Position; 4] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
    ];

    /// Parse a position abbreviation into a Position enum.
    ///
    /// Case-insensitive and whitespace-tolerant: "qb", " WR " and "Te" all parse.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A draftable player. The name is the unique identity across the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub position: Position,
    /// NFL team abbreviation (e.g. "KC").
    pub team: String,
    /// This week's opponent abbreviation.
    pub opponent: String,
}

impl Player {
    pub fn new(name: &str, position: Position, team: &str, opponent: &str) -> Self {
        Player {
            name: name.to_string(),
            position,
            team: team.to_string(),
            opponent: opponent.to_string(),
        }
    }

    /// Whether this player passes a position filter and a search string.
    ///
    /// The search is case-insensitive and matches against name, team, and
    /// opponent. An empty search matches everything.
    pub fn matches(&self, position: Option<Position>, search: &str) -> bool {
        if let Some(pos) = position {
            if self.position != pos {
                return false;
            }
        }
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.team.to_lowercase().contains(&needle)
            || self.opponent.to_lowercase().contains(&needle)
    }

    /// "KC vs BAL" matchup line.
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.team, self.opponent)
    }
}
