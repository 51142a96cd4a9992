use self::player::assign_roles;
pub use self::ability::{INVEST_COST, INVEST_RETURN};
pub use self::action::{BRIBE_COST, BRIBE_EXTRA_TURNS, COUP_COST, GATHER_AMOUNT, SANCTION_COST};
pub use self::block::{BlockableAction, PendingBlock, COUP_BLOCK_COST};
pub use self::eligible::EligiblePlayers;
pub use self::player::{
    ArrestOutcome, Player, Role, SanctionReaction, MUST_COUP_THRESHOLD, SANCTION_DURATION,
};
pub use self::update::{BoardPrompt, BoardUpdate, PlayerPrompt, PublicPlayer};
use crate::error::GameError;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

mod ability;
mod action;
mod block;
mod declines;
mod eligible;
mod json;
mod player;
mod test;
mod update;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// A game of Coup.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct Game {
    players: Vec<Player>,
    /// Seat of the player whose turn it is.
    current: usize,
    /// Turns the current player keeps before play moves on.
    extra_turns: usize,
    state: GameState,
    /// The last blockable action, while its block window is open.
    pending: Option<PendingBlock>,
    /// Number of turns that have been completed.
    turn_number: usize,
    /// Seat of the player who made the most recent arrest.
    last_arrester: Option<usize>,
    /// Whether the current player has used their once-per-turn ability.
    ability_used: bool,
}

/// Represents the current phase of the turn.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
enum GameState {
    #[default]
    AwaitingAction,
    ActionTaken,
    GameOver(Outcome),
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
enum Outcome {
    /// Only this player survived.
    Winner(usize),
    /// Every player was eliminated.
    Draw,
}

impl Game {
    /// Creates a game for the given players, handing out roles at random.
    pub fn new(player_names: &[String], seed: u64) -> Result<Self, GameError> {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let roles = assign_roles(player_names.len(), &mut rng)?;

        let mut game = Game::default();
        for (name, role) in player_names.iter().zip(roles) {
            game.add_player(name, role)?;
        }
        Ok(game)
    }

    /// Adds a player to a game that has not started yet, returning their seat.
    pub fn add_player(&mut self, name: &str, role: Role) -> Result<usize, GameError> {
        if self.game_over() {
            return Err(GameError::GameAlreadyEnded);
        }
        if self.turn_number > 0 || self.state != GameState::AwaitingAction {
            return Err(GameError::CannotJoinStartedGame);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount);
        }
        if self.players.iter().any(|p| p.name == name) {
            return Err(GameError::DuplicatePlayerName);
        }

        self.players.push(Player::new(name.to_string(), role));
        log::debug!("{} joined as {}", name, role);
        Ok(self.players.len() - 1)
    }

    /// Returns whether there are enough players to play.
    pub fn can_start(&self) -> bool {
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players.len())
    }

    /// Gets the name of the player whose turn it is.
    pub fn turn(&self) -> Result<&str, GameError> {
        let player = self.current_player()?;
        Ok(&self.players[player].name)
    }

    /// Gets the seat of the player whose turn it is.
    pub fn current_player(&self) -> Result<usize, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if self.game_over() {
            return Err(GameError::GameAlreadyEnded);
        }
        Ok(self.current)
    }

    /// Gets the names of the players still in the game, in turn order.
    pub fn players(&self) -> Result<Vec<&str>, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(self
            .players
            .iter()
            .filter(|p| p.alive)
            .map(|p| &p.name[..])
            .collect())
    }

    /// Gets every player's name and role, in turn order.
    pub fn players_with_roles(&self) -> Vec<(&str, Role)> {
        self.players.iter().map(|p| (&p.name[..], p.role)).collect()
    }

    /// Gets the name of the last player standing.
    pub fn winner(&self) -> Result<&str, GameError> {
        match self.state {
            GameState::GameOver(Outcome::Winner(player)) => Ok(&self.players[player].name),
            GameState::GameOver(Outcome::Draw) => Err(GameError::NoWinner),
            _ => Err(GameError::GameInProgress),
        }
    }

    /// Returns true if the game is over.
    pub fn game_over(&self) -> bool {
        matches!(self.state, GameState::GameOver(_))
    }

    /// Gets the number of players in the game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Gets the number of players in the game that are alive.
    pub fn num_players_alive(&self) -> usize {
        self.players.iter().filter(|p| p.alive).count()
    }

    /// Gets the number of extra turns the current player has banked.
    pub fn extra_turns(&self) -> usize {
        self.extra_turns
    }

    pub fn has_extra_turns(&self) -> bool {
        self.extra_turns > 0
    }

    /// Returns whether the current player holds enough coins that they ought to coup.
    pub fn must_coup(&self) -> bool {
        match self.current_player() {
            Ok(player) => self.players[player].coins >= MUST_COUP_THRESHOLD,
            Err(_) => false,
        }
    }

    /// Finds a player with the given name.
    pub fn find_player(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or(GameError::PlayerNotFound)
    }

    pub fn player(&self, player: usize) -> Result<&Player, GameError> {
        self.players.get(player).ok_or(GameError::InvalidPlayerIndex)
    }

    /// Ends the current turn and starts the next one.
    ///
    /// Any block window still open lapses, leaving its action in place. A player with extra
    /// turns keeps the turn; otherwise play moves to the next living player in seat order.
    pub fn next_turn(&mut self) -> Result<(), GameError> {
        self.check_in_progress()?;

        if let Some(pending) = self.pending.take() {
            log::debug!(
                "Block window for {}'s {} closed unblocked",
                self.players[pending.performer].name,
                pending.action
            );
        }
        self.players[self.current].on_end_turn();
        self.state = GameState::AwaitingAction;
        self.ability_used = false;
        self.turn_number += 1;

        if self.extra_turns > 0 && self.players[self.current].alive {
            self.extra_turns -= 1;
            log::debug!(
                "{} takes an extra turn ({} left)",
                self.players[self.current].name,
                self.extra_turns
            );
        } else {
            self.extra_turns = 0;
            match self.advance_seat() {
                Some(next) => self.current = next,
                None => {
                    self.end_game(Outcome::Draw);
                    return Ok(());
                }
            }
        }

        if self.check_game_over() {
            return Ok(());
        }

        let player = &mut self.players[self.current];
        player.on_begin_turn();
        log::debug!("Turn {}: {} to play", self.turn_number, player.name);
        if player.coins >= MUST_COUP_THRESHOLD {
            log::warn!("{} has {} coins and must coup", player.name, player.coins);
        }
        Ok(())
    }

    /// Finds the next living player after the current one, wrapping around the table.
    /// Arrest protection expires once the rotation gets back to the player who made the arrest.
    fn advance_seat(&mut self) -> Option<usize> {
        let n = self.num_players();
        for offset in 1..=n {
            let seat = (self.current + offset) % n;
            if self.last_arrester == Some(seat) {
                self.clear_last_arrested();
            }
            if self.players[seat].alive {
                return Some(seat);
            }
        }
        None
    }

    fn clear_last_arrested(&mut self) {
        for player in &mut self.players {
            player.last_arrested = false;
        }
        self.last_arrester = None;
    }

    fn check_game_over(&mut self) -> bool {
        let mut alive = self.players.iter().enumerate().filter(|(_, p)| p.alive);
        match (alive.next(), alive.next()) {
            (Some((winner, _)), None) => self.end_game(Outcome::Winner(winner)),
            (None, _) => self.end_game(Outcome::Draw),
            _ => return false,
        }
        true
    }

    fn end_game(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(player) => log::info!("Game over, {} wins", self.players[player].name),
            Outcome::Draw => log::info!("Game over, no players remain"),
        }
        self.state = GameState::GameOver(outcome);
        self.pending = None;
        self.extra_turns = 0;
    }

    /// Returns `Ok` if turns can be played, and an `Err` otherwise.
    fn check_in_progress(&self) -> Result<(), GameError> {
        if self.game_over() {
            return Err(GameError::GameAlreadyEnded);
        }
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if !self.can_start() {
            return Err(GameError::InvalidPlayerCount);
        }
        Ok(())
    }

    /// Returns `Ok` if the given player index is valid, and an `Err` otherwise.
    fn check_player_index(&self, player: usize) -> Result<(), GameError> {
        if player < self.num_players() {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerIndex)
        }
    }
}
