//! Tests for the six turn actions and their preconditions

use super::test_utils::*;
use crate::error::GameError;
use crate::game::Role::*;

#[test]
fn gather_adds_one_coin() {
    let mut game = create_base_game(2);
    game.gather(0).unwrap();
    assert_eq!(coins(&game, 0), 1);
    assert!(game.pending_action().is_none());
}

#[test]
fn sanctioned_player_cannot_gather_or_tax() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 0, 3);
    give_coins(&mut game, 1, 2);

    game.sanction(0, 1).unwrap();
    assert_eq!(coins(&game, 0), 0);
    assert!(game.players[1].sanctioned);

    game.next_turn().unwrap();
    assert_eq!(game.gather(1), Err(GameError::Sanctioned));
    assert_eq!(game.tax(1), Err(GameError::Sanctioned));
    assert_eq!(coins(&game, 1), 2);

    // Other actions are still open to a sanctioned player
    give_coins(&mut game, 0, 1);
    game.arrest(1, 0).unwrap();
    assert_eq!(coins(&game, 1), 3);
}

#[test]
fn sanction_lasts_for_one_turn() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 0, 3);
    game.sanction(0, 1).unwrap();

    game.next_turn().unwrap();
    assert!(game.players[1].sanctioned);

    game.next_turn().unwrap();
    assert!(!game.players[1].sanctioned);

    game.next_turn().unwrap();
    game.gather(1).unwrap();
    assert_eq!(coins(&game, 1), 1);
}

#[test]
fn tax_adds_two_coins() {
    let mut game = create_base_game(2);
    game.tax(0).unwrap();
    assert_eq!(coins(&game, 0), 2);
    assert!(game.pending_action().is_some());
}

#[test]
fn bribe_requires_four_coins() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 0, 3);

    assert_eq!(game.bribe(0), Err(GameError::InsufficientFunds));
    assert_eq!(coins(&game, 0), 3);
    assert_eq!(game.extra_turns(), 0);
    assert!(game.pending_action().is_none());
}

#[test]
fn sanction_requires_three_coins() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 0, 2);

    assert_eq!(game.sanction(0, 1), Err(GameError::InsufficientFunds));
    assert_eq!(coins(&game, 0), 2);
    assert!(!game.players[1].sanctioned);
}

#[test]
fn cannot_sanction_twice() {
    let mut game = create_base_game(3);
    give_coins(&mut game, 0, 3);
    give_coins(&mut game, 1, 3);

    game.sanction(0, 2).unwrap();
    game.next_turn().unwrap();

    assert_eq!(game.sanction(1, 2), Err(GameError::AlreadySanctioned));
    assert_eq!(coins(&game, 1), 3);
}

#[test]
fn cannot_sanction_eliminated_player() {
    let mut game = create_base_game(3);
    give_coins(&mut game, 0, 3);
    game.players[2].alive = false;

    assert_eq!(game.sanction(0, 2), Err(GameError::TargetNotAlive));
    assert_eq!(coins(&game, 0), 3);
}

#[test]
fn arrest_moves_one_coin() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 1, 2);

    game.arrest(0, 1).unwrap();
    assert_eq!(coins(&game, 0), 1);
    assert_eq!(coins(&game, 1), 1);
    assert!(game.players[1].last_arrested);
}

#[test]
fn arrest_of_penniless_player_fails() {
    let mut game = create_base_game(2);

    assert_eq!(game.arrest(0, 1), Err(GameError::TargetCannotPay));
    assert_eq!(coins(&game, 0), 0);
    assert!(!game.players[1].last_arrested);

    // The failed attempt did not use up the turn
    game.gather(0).unwrap();
}

#[test]
fn cannot_arrest_same_player_twice_in_a_row() {
    let mut game = create_base_game(3);
    give_coins(&mut game, 1, 3);

    game.arrest(0, 1).unwrap();
    game.next_turn().unwrap();
    game.gather(1).unwrap();
    game.next_turn().unwrap();

    assert_eq!(game.arrest(2, 1), Err(GameError::TargetRecentlyArrested));
    assert_eq!(coins(&game, 1), 3);

    // Once play gets back around to the arrester, the protection is gone
    game.gather(2).unwrap();
    game.next_turn().unwrap();
    assert!(!game.players[1].last_arrested);
    game.arrest(0, 1).unwrap();
    assert_eq!(coins(&game, 1), 2);
}

#[test]
fn extra_turn_does_not_allow_second_arrest() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 1, 3);
    game.extra_turns = 1;

    game.arrest(0, 1).unwrap();
    game.next_turn().unwrap();
    assert_eq!(game.turn().unwrap(), "Player0");
    assert_eq!(game.arrest(0, 1), Err(GameError::TargetRecentlyArrested));
}

#[test]
fn newest_arrest_replaces_flag() {
    let mut game = create_base_game(3);
    give_coins(&mut game, 0, 1);
    give_coins(&mut game, 2, 1);

    game.arrest(1, 0).unwrap_err(); // not their turn
    game.arrest(0, 2).unwrap();
    game.next_turn().unwrap();
    game.arrest(1, 0).unwrap();

    assert!(game.players[0].last_arrested);
    assert!(!game.players[2].last_arrested);
}

#[test]
fn prevented_player_cannot_arrest() {
    let mut game = create_game(&[Base, Spy]);
    give_coins(&mut game, 1, 2);

    game.prevent_arrest(1, 0).unwrap();
    assert_eq!(game.arrest(0, 1), Err(GameError::Prevented));
    assert_eq!(coins(&game, 1), 2);
}

#[test]
fn coup_requires_seven_coins() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 0, 6);

    assert_eq!(game.coup(0, 1), Err(GameError::InsufficientFunds));
    assert_eq!(coins(&game, 0), 6);
    assert!(is_alive(&game, 1));
}

#[test]
fn coup_on_eliminated_player_fails() {
    let mut game = create_base_game(3);
    give_coins(&mut game, 0, 9);
    game.players[2].alive = false;

    assert_eq!(game.coup(0, 2), Err(GameError::TargetNotAlive));
    assert_eq!(coins(&game, 0), 9);
}

#[test]
fn cannot_target_self() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 0, 10);

    assert_eq!(game.coup(0, 0), Err(GameError::InvalidPlayerChoice));
    assert_eq!(game.sanction(0, 0), Err(GameError::InvalidPlayerChoice));
    assert_eq!(game.arrest(0, 0), Err(GameError::InvalidPlayerChoice));
    assert_eq!(coins(&game, 0), 10);
}

#[test]
fn invalid_target_index() {
    let mut game = create_base_game(2);
    give_coins(&mut game, 0, 7);
    assert_eq!(game.coup(0, 5), Err(GameError::InvalidPlayerIndex));
}
