use super::{declines::Declines, player::Role, Game, MAX_PLAYERS};
use serde::{Deserialize, Serialize};

/// A set of players, indexed by their seat in the roster.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct EligiblePlayers {
    eligible: [bool; MAX_PLAYERS],
}

impl EligiblePlayers {
    pub fn includes(&self, player: usize) -> bool {
        self.eligible.get(player).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        !self.eligible.iter().any(|e| *e)
    }

    pub fn count(&self) -> usize {
        self.eligible.iter().filter(|e| **e).count()
    }

    /// The included players, in roster order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.eligible
            .iter()
            .enumerate()
            .filter(|(_, e)| **e)
            .map(|(i, _)| i)
    }

    pub fn names(&self, game: &Game) -> Vec<String> {
        game.players
            .iter()
            .enumerate()
            .filter(|(i, _)| self.includes(*i))
            .map(|(_, p)| p.name.clone())
            .collect()
    }
}

pub struct EligiblePlayersBuilder<'a> {
    game: &'a Game,
    eligible: [bool; MAX_PLAYERS],
}

impl Game {
    /// Starts building a set of players from everyone still alive.
    pub(super) fn eligible_players(&self) -> EligiblePlayersBuilder<'_> {
        EligiblePlayersBuilder {
            game: self,
            eligible: core::array::from_fn(|i| self.players.get(i).map(|p| p.alive).unwrap_or(false)),
        }
    }
}

impl<'a> EligiblePlayersBuilder<'a> {
    pub fn exclude(mut self, player: usize) -> Self {
        if let Some(e) = self.eligible.get_mut(player) {
            *e = false;
        }
        self
    }

    /// Keeps only the players whose role passes the given capability check.
    pub fn with_role(mut self, capability: impl Fn(Role) -> bool) -> Self {
        for (idx, player) in self.game.players.iter().enumerate() {
            self.eligible[idx] &= capability(player.role);
        }
        self
    }

    pub fn min_coins(mut self, coins: u32) -> Self {
        for (idx, player) in self.game.players.iter().enumerate() {
            self.eligible[idx] &= player.coins >= coins;
        }
        self
    }

    pub fn not_declined(mut self, declines: &Declines) -> Self {
        for (idx, eligible) in self.eligible.iter_mut().enumerate() {
            *eligible &= !declines.has_declined(idx);
        }
        self
    }

    pub fn make(self) -> EligiblePlayers {
        EligiblePlayers { eligible: self.eligible }
    }
}
