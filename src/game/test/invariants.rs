//! Random playouts, checking that every reachable state is consistent

use super::test_utils::*;
use crate::error::GameError;
use crate::game::{Game, Role};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Attempts random moves for the current player until one is accepted.
fn play_random_turn(game: &mut Game, rng: &mut ChaCha8Rng) {
    let player = game.current_player().unwrap();
    let n = game.num_players();

    for _ in 0..20 {
        let target = rng.gen_range(0..n);
        let choice = rng.gen_range(0..8);
        let before = game.clone();
        let result = match choice {
            0 => game.gather(player),
            1 => game.tax(player),
            2 => game.bribe(player),
            3 => game.sanction(player, target),
            4 => game.arrest(player, target),
            5 => game.coup(player, target),
            6 => game.prevent_arrest(target, player),
            _ => game.invest(player),
        };
        assert_invariants(game);
        match result {
            // Spy and baron abilities leave the turn's action to be taken
            Ok(()) if choice < 6 => return,
            Ok(()) => {}
            Err(err) => {
                assert!(err.is_rule_violation() || err == GameError::PlayerEliminated, "{:?}", err);
                // A rejected move leaves everything as it was
                assert_eq!(game.roster_snapshot(), before.roster_snapshot());
                assert_eq!(game.extra_turns, before.extra_turns);
                assert_eq!(game.pending, before.pending);
            }
        }
    }
}

impl Game {
    fn roster_snapshot(&self) -> Vec<(u32, bool, bool, bool, bool)> {
        self.players
            .iter()
            .map(|p| (p.coins, p.alive, p.sanctioned, p.last_arrested, p.prevented_from_arresting))
            .collect()
    }
}

#[test]
fn random_games_stay_consistent() {
    let roles = [Role::Governor, Role::Baron, Role::Judge, Role::General, Role::Merchant, Role::Spy];

    for seed in 0..40 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let num_players = rng.gen_range(2..=6);
        let mut chosen = roles;
        chosen.shuffle(&mut rng);
        let mut game = create_game(&chosen[..num_players]);

        for _ in 0..300 {
            if game.game_over() {
                break;
            }
            play_random_turn(&mut game, &mut rng);

            if game.pending_action().is_some() {
                let coup_target = game.pending_action().unwrap().target();
                let performer_coins = coins(&game, game.pending_action().unwrap().performer);
                let blocker = game.resolve_blocks(|_, _| rng.gen_bool(0.5)).unwrap();

                if let (Some(_), Some(target)) = (blocker, coup_target) {
                    assert!(is_alive(&game, target));
                    let performer = game.current_player().unwrap();
                    assert_eq!(coins(&game, performer), performer_coins + 7);
                }
            }
            assert_invariants(&game);
            game.next_turn().unwrap();
            assert_invariants(&game);
        }
    }
}
