use crate::error::GameError;
use crate::game::{Game, Role};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One of the turn's actions, as chosen by a simulated player.
#[derive(Clone, Copy, Debug)]
enum Move {
    Gather,
    Tax,
    Bribe,
    Sanction(usize),
    Arrest(usize),
    Coup(usize),
}

/// Plays a whole game with every player choosing moves at random, and returns the final state.
pub fn run(player_names: &[String], seed: u64, max_turns: usize) -> anyhow::Result<Game> {
    let mut game = Game::new(player_names, seed)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for (name, role) in game.players_with_roles() {
        log::info!("{} is the {}", name, role);
    }

    for _ in 0..max_turns {
        if game.game_over() {
            break;
        }
        let player = game.current_player()?;

        use_abilities(&mut game, player, &mut rng)?;
        if !take_action(&mut game, player, &mut rng)? {
            log::info!("{} has no legal move and passes", game.turn()?);
        }
        if game.pending_action().is_some() {
            game.resolve_blocks(|_, _| rng.gen_bool(0.5))?;
        }
        game.next_turn()?;
    }

    match game.winner() {
        Ok(winner) => log::info!("{} wins", winner),
        Err(err) => log::info!("No winner: {}", err),
    }
    Ok(game)
}

/// Tries moves in a random order until one is legal. Returns `false` if none were.
fn take_action(game: &mut Game, player: usize, rng: &mut impl Rng) -> anyhow::Result<bool> {
    let opponents: Vec<usize> = (0..game.num_players())
        .filter(|&other| other != player && game.player(other).map(|p| p.is_alive()).unwrap_or(false))
        .collect();

    let mut moves = vec![Move::Gather, Move::Tax, Move::Bribe];
    for &target in &opponents {
        moves.extend([Move::Sanction(target), Move::Arrest(target), Move::Coup(target)]);
    }
    moves.shuffle(rng);

    if game.must_coup() {
        if let Some(&target) = opponents.choose(rng) {
            moves.insert(0, Move::Coup(target));
        }
    }

    for choice in moves {
        let result = match choice {
            Move::Gather => game.gather(player),
            Move::Tax => game.tax(player),
            Move::Bribe => game.bribe(player),
            Move::Sanction(target) => game.sanction(player, target),
            Move::Arrest(target) => game.arrest(player, target),
            Move::Coup(target) => game.coup(player, target),
        };
        match result {
            Ok(()) => return Ok(true),
            Err(err) if err.is_rule_violation() => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(false)
}

/// Gives any spy or baron at the table a chance to use their ability.
fn use_abilities(game: &mut Game, current: usize, rng: &mut impl Rng) -> Result<(), GameError> {
    for idx in 0..game.num_players() {
        let player = game.player(idx)?;
        let (alive, role) = (player.is_alive(), player.role);
        if !alive || !rng.gen_bool(0.3) {
            continue;
        }
        let result = match role {
            Role::Spy if idx != current => game.prevent_arrest(idx, current),
            Role::Baron if idx == current => game.invest(idx),
            _ => continue,
        };
        match result {
            Ok(()) => {}
            Err(err) if err.is_rule_violation() => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
