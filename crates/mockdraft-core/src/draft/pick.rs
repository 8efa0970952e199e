// Snake pick order and individual pick records.
//
// Picks, rounds, and teams are all 1-indexed. Odd rounds run 1..=N, even
// rounds run N..=1.

use super::player::Player;

/// Round (1-indexed) that a pick number falls in: `ceil(pick / num_teams)`.
pub fn round_for_pick(pick_number: u32, num_teams: u32) -> u32 {
    debug_assert!(pick_number >= 1 && num_teams >= 1);
    (pick_number - 1) / num_teams + 1
}

/// Position of a pick within its round (1-indexed, in pick order).
pub fn pick_in_round(pick_number: u32, num_teams: u32) -> u32 {
    (pick_number - 1) % num_teams + 1
}

/// Team (1-indexed) that owns a pick under snake ordering.
pub fn team_for_pick(pick_number: u32, num_teams: u32) -> u32 {
    let offset = (pick_number - 1) % num_teams;
    if round_for_pick(pick_number, num_teams) % 2 == 1 {
        offset + 1
    } else {
        num_teams - offset
    }
}

/// Board label for a pick, e.g. "1.01" or "3.12".
pub fn pick_label(pick_number: u32, num_teams: u32) -> String {
    format!(
        "{}.{:02}",
        round_for_pick(pick_number, num_teams),
        pick_in_round(pick_number, num_teams)
    )
}

/// A completed draft pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPick {
    /// Sequential pick number (1-indexed).
    pub pick_number: u32,
    pub round: u32,
    pub pick_in_round: u32,
    /// Team that made the pick.
    pub team: u32,
    pub player: Player,
}

/// One slot on the pick board. `player` is `None` until the pick is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSlot {
    pub pick_number: u32,
    pub round: u32,
    pub pick_in_round: u32,
    pub team: u32,
    pub player: Option<Player>,
}

impl PickSlot {
    pub fn is_filled(&self) -> bool {
        self.player.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_team_snake_over_two_rounds() {
        let teams: Vec<u32> = (1..=8).map(|p| team_for_pick(p, 4)).collect();
        assert_eq!(teams, vec![1, 2, 3, 4, 4, 3, 2, 1]);
    }

    #[test]
    fn third_round_runs_ascending_again() {
        let teams: Vec<u32> = (9..=12).map(|p| team_for_pick(p, 4)).collect();
        assert_eq!(teams, vec![1, 2, 3, 4]);
    }

    #[test]
    fn two_team_snake_doubles_up_at_the_turn() {
        let teams: Vec<u32> = (1..=6).map(|p| team_for_pick(p, 2)).collect();
        assert_eq!(teams, vec![1, 2, 2, 1, 1, 2]);
    }

    #[test]
    fn every_team_picks_once_per_round() {
        let num_teams = 10;
        for round in 1..=5 {
            let start = (round - 1) * num_teams + 1;
            let mut teams: Vec<u32> = (start..start + num_teams)
                .map(|p| team_for_pick(p, num_teams))
                .collect();
            teams.sort_unstable();
            assert_eq!(teams, (1..=num_teams).collect::<Vec<_>>(), "round {round}");
        }
    }

    #[test]
    fn round_for_pick_is_ceiling_division() {
        assert_eq!(round_for_pick(1, 4), 1);
        assert_eq!(round_for_pick(4, 4), 1);
        assert_eq!(round_for_pick(5, 4), 2);
        assert_eq!(round_for_pick(8, 4), 2);
        assert_eq!(round_for_pick(9, 4), 3);
    }

    #[test]
    fn pick_in_round_wraps() {
        assert_eq!(pick_in_round(1, 4), 1);
        assert_eq!(pick_in_round(4, 4), 4);
        assert_eq!(pick_in_round(5, 4), 1);
        assert_eq!(pick_in_round(7, 4), 3);
    }

    #[test]
    fn pick_label_zero_pads() {
        assert_eq!(pick_label(1, 4), "1.01");
        assert_eq!(pick_label(6, 4), "2.02");
        assert_eq!(pick_label(36, 12), "3.12");
    }

    #[test]
    fn empty_slot_agrees_with_pick_label() {
        let slot = PickSlot {
            pick_number: 6,
            round: 2,
            pick_in_round: 2,
            team: 3,
            player: None,
        };
        let label = format!("{}.{:02}", slot.round, slot.pick_in_round);
        assert_eq!(label, pick_label(slot.pick_number, 4));
        assert!(!slot.is_filled());
    }
}
