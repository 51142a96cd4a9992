use super::{
    block::{BlockableAction, PendingBlock},
    Game, GameState,
};
use crate::error::GameError;

pub const GATHER_AMOUNT: u32 = 1;
pub const BRIBE_COST: u32 = 4;
pub const BRIBE_EXTRA_TURNS: usize = 2;
pub const SANCTION_COST: u32 = 3;
pub const COUP_COST: u32 = 7;

impl Game {
    /// Called when a player takes one coin from the bank.
    pub fn gather(&mut self, player: usize) -> Result<(), GameError> {
        self.check_can_act(player)?;
        let actor = &mut self.players[player];
        if actor.sanctioned {
            return Err(GameError::Sanctioned);
        }

        actor.credit(GATHER_AMOUNT);
        log::info!("{} gathers {} coin", actor.name, GATHER_AMOUNT);
        self.state = GameState::ActionTaken;
        Ok(())
    }

    /// Called when a player collects tax. A governor may block it until the turn ends.
    pub fn tax(&mut self, player: usize) -> Result<(), GameError> {
        self.check_can_act(player)?;
        let actor = &mut self.players[player];
        if actor.sanctioned {
            return Err(GameError::Sanctioned);
        }

        let amount = actor.role.tax_amount();
        actor.credit(amount);
        log::info!("{} taxes {} coins", actor.name, amount);
        self.open_block_window(BlockableAction::Tax, player, amount);
        Ok(())
    }

    /// Called when a player pays a bribe for two extra turns. A judge may cancel the
    /// extra turns until the turn ends.
    pub fn bribe(&mut self, player: usize) -> Result<(), GameError> {
        self.check_can_act(player)?;
        let actor = &mut self.players[player];
        actor.debit(BRIBE_COST)?;

        self.extra_turns += BRIBE_EXTRA_TURNS;
        log::info!("{} bribes for {} extra turns", actor.name, BRIBE_EXTRA_TURNS);
        self.open_block_window(BlockableAction::Bribe, player, BRIBE_COST);
        Ok(())
    }

    /// Called when a player sanctions another, barring them from gathering and taxing
    /// during their next turn.
    pub fn sanction(&mut self, player: usize, target: usize) -> Result<(), GameError> {
        self.check_can_act(player)?;
        self.check_target(player, target)?;
        if self.players[target].sanctioned {
            return Err(GameError::AlreadySanctioned);
        }

        let reaction = self.players[target].role.sanction_reaction();
        self.players[player].debit(SANCTION_COST + reaction.sanctioner_penalty)?;
        let victim = &mut self.players[target];
        victim.sanction();
        victim.credit(reaction.target_bonus);

        log::info!("{} sanctions {}", self.players[player].name, self.players[target].name);
        self.state = GameState::ActionTaken;
        Ok(())
    }

    /// Called when a player arrests another, usually taking one of their coins.
    pub fn arrest(&mut self, player: usize, target: usize) -> Result<(), GameError> {
        self.check_can_act(player)?;
        if self.players[player].prevented_from_arresting {
            return Err(GameError::Prevented);
        }
        self.check_target(player, target)?;
        if self.players[target].last_arrested {
            return Err(GameError::TargetRecentlyArrested);
        }

        let outcome = self.players[target].role.arrest_outcome();
        self.players[target]
            .debit(outcome.target_loses)
            .map_err(|_| GameError::TargetCannotPay)?;
        self.players[player].credit(outcome.attacker_gains);

        self.clear_last_arrested();
        self.players[target].last_arrested = true;
        self.last_arrester = Some(player);

        log::info!("{} arrests {}", self.players[player].name, self.players[target].name);
        self.state = GameState::ActionTaken;
        Ok(())
    }

    /// Called when a player stages a coup against another. The target is out of the game
    /// unless a general blocks the coup before the turn ends.
    pub fn coup(&mut self, player: usize, target: usize) -> Result<(), GameError> {
        self.check_can_act(player)?;
        self.check_target(player, target)?;

        self.players[player].debit(COUP_COST)?;
        self.players[target].eliminate();

        log::info!("{} coups {}", self.players[player].name, self.players[target].name);
        self.open_block_window(BlockableAction::Coup { target }, player, COUP_COST);
        Ok(())
    }

    fn open_block_window(&mut self, action: BlockableAction, performer: usize, escrow: u32) {
        self.pending = Some(PendingBlock::new(action, performer, escrow));
        self.state = GameState::ActionTaken;
    }

    /// Returns `Ok` if it is this player's turn and they have not acted yet.
    fn check_can_act(&self, player: usize) -> Result<(), GameError> {
        self.check_in_progress()?;
        self.check_player_index(player)?;
        if player != self.current {
            return Err(GameError::NotYourTurn);
        }
        if self.state == GameState::ActionTaken {
            return Err(GameError::ActionAlreadyTaken);
        }
        Ok(())
    }

    /// Returns `Ok` if `target` is another player who is still in the game.
    pub(super) fn check_target(&self, player: usize, target: usize) -> Result<(), GameError> {
        self.check_player_index(target)?;
        if target == player {
            return Err(GameError::InvalidPlayerChoice);
        }
        if !self.players[target].alive {
            return Err(GameError::TargetNotAlive);
        }
        Ok(())
    }
}
