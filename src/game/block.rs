use super::{action::BRIBE_EXTRA_TURNS, declines::Declines, eligible::EligiblePlayers, player::Role, Game};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coins a general pays to block a coup.
pub const COUP_BLOCK_COST: u32 = 5;

/// The actions that other players get a chance to block.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum BlockableAction {
    /// Blocked by a governor; the tax is taken back.
    Tax,
    /// Blocked by a judge; the extra turns are cancelled but the coins stay spent.
    Bribe,
    /// Blocked by a general; the target returns to the game and the coins are refunded.
    Coup { target: usize },
}

impl fmt::Display for BlockableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockableAction::Tax => "tax",
            BlockableAction::Bribe => "bribe",
            BlockableAction::Coup { .. } => "coup",
        })
    }
}

/// A blockable action whose block window is still open.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PendingBlock {
    pub action: BlockableAction,
    pub performer: usize,
    /// Coins moved by the action: taken by a tax, paid for a bribe or a coup.
    pub escrow: u32,
    declines: Declines,
}

impl PendingBlock {
    pub(super) fn new(action: BlockableAction, performer: usize, escrow: u32) -> Self {
        Self {
            action,
            performer,
            escrow,
            declines: Declines::default(),
        }
    }

    pub fn target(&self) -> Option<usize> {
        match self.action {
            BlockableAction::Coup { target } => Some(target),
            _ => None,
        }
    }

    pub fn has_declined(&self, player: usize) -> bool {
        self.declines.has_declined(player)
    }
}

impl Game {
    /// Gets the action currently open to being blocked, if there is one.
    pub fn pending_action(&self) -> Option<&PendingBlock> {
        self.pending.as_ref()
    }

    /// Determines which players may still block the pending action, in turn order.
    pub fn eligible_blockers(&self) -> Result<EligiblePlayers, GameError> {
        let pending = self.pending.as_ref().ok_or(GameError::NoPendingAction)?;
        Ok(self.blockers_for(pending))
    }

    pub(super) fn blockers_for(&self, pending: &PendingBlock) -> EligiblePlayers {
        let candidates = self
            .eligible_players()
            .exclude(pending.performer)
            .not_declined(&pending.declines);

        match pending.action {
            BlockableAction::Tax => candidates.with_role(Role::can_block_tax),
            BlockableAction::Bribe => candidates.with_role(Role::can_undo_bribe),
            BlockableAction::Coup { .. } => candidates
                .with_role(Role::can_block_coup)
                .min_coins(COUP_BLOCK_COST),
        }
        .make()
    }

    /// Called when a player blocks the pending action, reversing its effect.
    pub fn accept_block(&mut self, blocker: usize) -> Result<(), GameError> {
        self.check_in_progress()?;
        self.check_player_index(blocker)?;
        let pending = self.pending.ok_or(GameError::NoPendingAction)?;
        if !self.blockers_for(&pending).includes(blocker) {
            return Err(GameError::CannotBlock);
        }

        match pending.action {
            BlockableAction::Tax => {
                self.players[pending.performer].debit(pending.escrow)?;
            }
            BlockableAction::Bribe => {
                self.extra_turns = self.extra_turns.saturating_sub(BRIBE_EXTRA_TURNS);
            }
            BlockableAction::Coup { target } => {
                self.players[blocker].debit(COUP_BLOCK_COST)?;
                self.players[target].revive();
                self.players[pending.performer].credit(pending.escrow);
            }
        }

        self.pending = None;
        log::info!(
            "{} blocked {}'s {}",
            self.players[blocker].name,
            self.players[pending.performer].name,
            pending.action
        );
        Ok(())
    }

    /// Called when a player passes on blocking the pending action.
    /// Once every eligible blocker has passed, the action stands.
    pub fn decline_block(&mut self, blocker: usize) -> Result<(), GameError> {
        self.check_in_progress()?;
        self.check_player_index(blocker)?;
        let mut pending = self.pending.ok_or(GameError::NoPendingAction)?;
        let eligible = self.blockers_for(&pending).includes(blocker);
        if !pending.declines.decline(blocker) {
            return Ok(());
        }
        if !eligible {
            return Err(GameError::CannotBlock);
        }

        if self.blockers_for(&pending).is_empty() {
            log::debug!(
                "Nobody blocked {}'s {}",
                self.players[pending.performer].name,
                pending.action
            );
            self.pending = None;
        } else {
            self.pending = Some(pending);
        }
        Ok(())
    }

    /// Offers the pending action to each eligible blocker in turn order until one accepts.
    /// Returns the player who blocked it, or `None` if the action stands.
    pub fn resolve_blocks(
        &mut self,
        mut decide: impl FnMut(&Game, usize) -> bool,
    ) -> Result<Option<usize>, GameError> {
        self.check_in_progress()?;
        if self.pending.is_none() {
            return Err(GameError::NoPendingAction);
        }
        loop {
            let Some(pending) = self.pending else {
                return Ok(None);
            };
            let Some(blocker) = self.blockers_for(&pending).indices().next() else {
                self.pending = None;
                return Ok(None);
            };
            if decide(self, blocker) {
                self.accept_block(blocker)?;
                return Ok(Some(blocker));
            }
            self.decline_block(blocker)?;
        }
    }
}
