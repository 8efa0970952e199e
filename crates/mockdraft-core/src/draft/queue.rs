// The user's draft queue: an ordered wishlist of undrafted players.

use thiserror::Error;

use super::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("new queue order is not a permutation of the current queue")]
    NotAPermutation,

    #[error("queue index {index} out of range (queue length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered queue of players, unique by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftQueue {
    entries: Vec<Player>,
}

impl DraftQueue {
    pub fn new() -> Self {
        DraftQueue::default()
    }

    /// Append a player. Returns `false` (and does nothing) if already queued.
    pub fn enqueue(&mut self, player: Player) -> bool {
        if self.contains(&player.name) {
            return false;
        }
        self.entries.push(player);
        true
    }

    /// Remove a player by name. Returns whether anything was removed.
    pub fn dequeue(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.name != name);
        self.entries.len() != before
    }

    /// Replace the queue with `new_order`, which must hold exactly the
    /// current members. On error the queue is left untouched.
    pub fn reorder(&mut self, new_order: Vec<Player>) -> Result<(), QueueError> {
        if !self.is_permutation(&new_order) {
            return Err(QueueError::NotAPermutation);
        }
        self.entries = new_order;
        Ok(())
    }

    /// Move the entry at `from` so it ends up at index `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<(), QueueError> {
        let len = self.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(QueueError::IndexOutOfRange { index, len });
            }
        }
        if from != to {
            let player = self.entries.remove(from);
            self.entries.insert(to, player);
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|p| p.name == name)
    }

    pub fn players(&self) -> &[Player] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_permutation(&self, candidate: &[Player]) -> bool {
        if candidate.len() != self.entries.len() {
            return false;
        }
        let mut current: Vec<&str> = self.entries.iter().map(|p| p.name.as_str()).collect();
        let mut proposed: Vec<&str> = candidate.iter().map(|p| p.name.as_str()).collect();
        current.sort_unstable();
        proposed.sort_unstable();
        current == proposed
    }
}
