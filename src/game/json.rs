use super::{update::BoardPrompt, Game};
use serde_json::{json, Value};

impl Game {
    pub fn get_board_json(&self) -> Value {
        json!({
            "players": self.get_players_json(),
            "state": self.get_board_state_json(),
            "turnNumber": self.turn_number,
            "extraTurns": self.extra_turns,
        })
    }

    fn get_players_json(&self) -> Value {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                json!({
                    "id": player.name,
                    "name": player.name,
                    "role": player.role.to_string(),
                    "coins": player.coins,
                    "isDead": !player.alive,
                    "isSanctioned": player.sanctioned,
                    "isLastArrested": player.last_arrested,
                    "isPreventedFromArresting": player.prevented_from_arresting,
                    "isCurrent": !self.game_over() && index == self.current
                })
            })
            .collect()
    }

    fn get_board_state_json(&self) -> Value {
        let name = |player: usize| self.players[player].name.clone();

        match self.get_board_prompt() {
            BoardPrompt::Lobby => json!({ "type": "lobby", "canStart": false }),
            BoardPrompt::Turn { player, must_coup } => json!({
                "type": "turn",
                "player": name(player),
                "mustCoup": must_coup
            }),
            BoardPrompt::BlockWindow { action, performer, .. } => json!({
                "type": "blockWindow",
                "action": action.to_string(),
                "performer": name(performer),
                "target": self.pending.and_then(|p| p.target()).map(name),
                "blockers": self
                    .eligible_blockers()
                    .map(|blockers| blockers.names(self))
                    .unwrap_or_default()
            }),
            BoardPrompt::TurnOver { player } => json!({
                "type": "turnOver",
                "player": name(player)
            }),
            BoardPrompt::GameOver { winner } => json!({
                "type": "gameOver",
                "winner": winner.map(name)
            }),
        }
    }
}
