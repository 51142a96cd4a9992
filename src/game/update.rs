use super::{block::BlockableAction, player::Role, Game, GameState, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct BoardUpdate {
    pub players: Vec<PublicPlayer>,
    pub turn_number: usize,
    pub extra_turns: usize,
    pub prompt: BoardPrompt,
}

/// Everything a table display shows about a player.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PublicPlayer {
    pub name: String,
    pub role: Role,
    pub coins: u32,
    pub alive: bool,
    pub sanctioned: bool,
    pub last_arrested: bool,
    pub prevented_from_arresting: bool,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum BoardPrompt {
    Lobby,
    Turn {
        player: usize,
        must_coup: bool,
    },
    BlockWindow {
        action: BlockableAction,
        performer: usize,
        blockers: Vec<usize>,
    },
    TurnOver {
        player: usize,
    },
    GameOver {
        winner: Option<usize>,
    },
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum PlayerPrompt {
    /// It is this player's turn to act.
    TakeAction { must_coup: bool },
    /// This player may block the pending action.
    Block { action: BlockableAction, performer: usize },
    Dead,
    GameOver { won: bool },
}

impl Game {
    pub fn get_board_update(&self) -> BoardUpdate {
        BoardUpdate {
            players: self.roster(),
            turn_number: self.turn_number,
            extra_turns: self.extra_turns,
            prompt: self.get_board_prompt(),
        }
    }

    /// Gets the public state of every player, in turn order.
    pub fn roster(&self) -> Vec<PublicPlayer> {
        self.players
            .iter()
            .map(|player| PublicPlayer {
                name: player.name.clone(),
                role: player.role,
                coins: player.coins,
                alive: player.alive,
                sanctioned: player.sanctioned,
                last_arrested: player.last_arrested,
                prevented_from_arresting: player.prevented_from_arresting,
            })
            .collect()
    }

    pub fn get_board_prompt(&self) -> BoardPrompt {
        if !self.can_start() {
            return BoardPrompt::Lobby;
        }
        match self.state {
            GameState::GameOver(outcome) => BoardPrompt::GameOver {
                winner: match outcome {
                    Outcome::Winner(player) => Some(player),
                    Outcome::Draw => None,
                },
            },
            GameState::AwaitingAction => BoardPrompt::Turn {
                player: self.current,
                must_coup: self.must_coup(),
            },
            GameState::ActionTaken => match &self.pending {
                Some(pending) => BoardPrompt::BlockWindow {
                    action: pending.action,
                    performer: pending.performer,
                    blockers: self.blockers_for(pending).indices().collect(),
                },
                None => BoardPrompt::TurnOver {
                    player: self.current,
                },
            },
        }
    }

    /// Gets what the given player is being asked to do, if anything.
    pub fn get_player_prompt(&self, player_idx: usize) -> Option<PlayerPrompt> {
        let player = self.players.get(player_idx)?;

        if let GameState::GameOver(outcome) = self.state {
            return Some(PlayerPrompt::GameOver {
                won: outcome == Outcome::Winner(player_idx),
            });
        }
        if !player.alive {
            return Some(PlayerPrompt::Dead);
        }
        if let Some(pending) = &self.pending {
            if self.blockers_for(pending).includes(player_idx) {
                return Some(PlayerPrompt::Block {
                    action: pending.action,
                    performer: pending.performer,
                });
            }
        }
        if self.state == GameState::AwaitingAction && player_idx == self.current && self.can_start() {
            return Some(PlayerPrompt::TakeAction {
                must_coup: self.must_coup(),
            });
        }
        None
    }
}
