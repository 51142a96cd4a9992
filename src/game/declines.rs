use super::MAX_PLAYERS;
use serde::{Deserialize, Serialize};

/// Tracks which players have passed on blocking the pending action,
/// so that each eligible blocker is only asked once.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Declines {
    state: [bool; MAX_PLAYERS],
}

impl Declines {
    pub fn has_declined(&self, player_idx: usize) -> bool {
        self.state.get(player_idx).copied().unwrap_or(false)
    }

    /// Records that a player has declined, and returns `true` iff this is news.
    pub fn decline(&mut self, player_idx: usize) -> bool {
        match self.state.get_mut(player_idx) {
            Some(declined) if !*declined => {
                *declined = true;
                true
            }
            _ => false,
        }
    }
}
