use super::Game;
use crate::error::GameError;

pub const INVEST_COST: u32 = 3;
pub const INVEST_RETURN: u32 = 6;

// Role abilities that do not use up the turn's action and cannot be blocked.
impl Game {
    /// Called when a spy looks at another player's coins.
    pub fn reveal_coins(&self, spy: usize, target: usize) -> Result<u32, GameError> {
        self.check_ability(spy, |role| role.can_prevent_arrest())?;
        self.check_player_index(target)?;
        let target = &self.players[target];
        if !target.alive {
            return Err(GameError::TargetNotAlive);
        }
        Ok(target.coins)
    }

    /// Called when a spy stops another player from arresting until that player's next turn
    /// begins. The spy may do this at any time, including during the target's turn.
    pub fn prevent_arrest(&mut self, spy: usize, target: usize) -> Result<(), GameError> {
        self.check_ability(spy, |role| role.can_prevent_arrest())?;
        self.check_target(spy, target)?;
        if self.players[target].prevented_from_arresting {
            return Err(GameError::AlreadyPrevented);
        }

        self.players[target].prevented_from_arresting = true;
        log::info!(
            "{} prevents {} from arresting",
            self.players[spy].name,
            self.players[target].name
        );
        Ok(())
    }

    /// Called when a baron invests, once per turn, on their own turn.
    pub fn invest(&mut self, baron: usize) -> Result<(), GameError> {
        self.check_ability(baron, |role| role.can_invest())?;
        if baron != self.current {
            return Err(GameError::NotYourTurn);
        }
        if self.ability_used {
            return Err(GameError::AbilityAlreadyUsed);
        }

        let player = &mut self.players[baron];
        player.debit(INVEST_COST)?;
        player.credit(INVEST_RETURN);
        log::info!("{} invests {} coins for {}", player.name, INVEST_COST, INVEST_RETURN);
        self.ability_used = true;
        Ok(())
    }

    /// Returns `Ok` if the player is still in the game and their role has the ability.
    fn check_ability(
        &self,
        player: usize,
        has_ability: impl Fn(super::Role) -> bool,
    ) -> Result<(), GameError> {
        self.check_in_progress()?;
        self.check_player_index(player)?;
        let player = &self.players[player];
        if !has_ability(player.role) {
            return Err(GameError::WrongRole);
        }
        if !player.alive {
            return Err(GameError::PlayerEliminated);
        }
        Ok(())
    }
}
