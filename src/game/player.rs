use crate::error::GameError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{MAX_PLAYERS, MIN_PLAYERS};

/// Number of the sanctioned player's own turns a sanction covers.
pub const SANCTION_DURATION: u32 = 1;

/// A player holding at least this many coins at the start of their turn ought to coup.
pub const MUST_COUP_THRESHOLD: u32 = 10;

/// A merchant holding at least this many coins at the start of their turn earns a bonus coin.
const MERCHANT_BONUS_THRESHOLD: u32 = 3;

/// A game player.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub(super) coins: u32,
    pub(super) alive: bool,
    pub(super) sanctioned: bool,
    pub(super) sanction_turns: u32,
    pub(super) last_arrested: bool,
    pub(super) prevented_from_arresting: bool,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Hash)]
pub enum Role {
    Base,
    Governor,
    Baron,
    Judge,
    General,
    Merchant,
    Spy,
}

/// The special roles handed out when a game is created from a list of names.
const SPECIAL_ROLES: [Role; 6] = [
    Role::Governor,
    Role::Baron,
    Role::Judge,
    Role::Spy,
    Role::General,
    Role::Merchant,
];

/// How the coins move when a player is arrested.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArrestOutcome {
    /// Coins the arrested player loses.
    pub target_loses: u32,
    /// Coins the arresting player gains.
    pub attacker_gains: u32,
}

/// Side effects a player's role triggers when they are sanctioned.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SanctionReaction {
    /// Coins the sanctioning player pays on top of the sanction cost.
    pub sanctioner_penalty: u32,
    /// Coins the sanctioned player receives.
    pub target_bonus: u32,
}

impl Role {
    /// Coins gained from an unblocked tax.
    pub fn tax_amount(self) -> u32 {
        match self {
            Role::Governor => 3,
            _ => 2,
        }
    }

    pub fn arrest_outcome(self) -> ArrestOutcome {
        match self {
            Role::General => ArrestOutcome {
                target_loses: 0,
                attacker_gains: 0,
            },
            // The merchant pays the bank rather than the attacker
            Role::Merchant => ArrestOutcome {
                target_loses: 2,
                attacker_gains: 0,
            },
            _ => ArrestOutcome {
                target_loses: 1,
                attacker_gains: 1,
            },
        }
    }

    pub fn sanction_reaction(self) -> SanctionReaction {
        match self {
            Role::Judge => SanctionReaction {
                sanctioner_penalty: 1,
                target_bonus: 0,
            },
            Role::Baron => SanctionReaction {
                sanctioner_penalty: 0,
                target_bonus: 1,
            },
            _ => SanctionReaction::default(),
        }
    }

    pub fn can_block_tax(self) -> bool {
        self == Role::Governor
    }

    pub fn can_undo_bribe(self) -> bool {
        self == Role::Judge
    }

    pub fn can_block_coup(self) -> bool {
        self == Role::General
    }

    pub fn can_prevent_arrest(self) -> bool {
        self == Role::Spy
    }

    pub fn can_invest(self) -> bool {
        self == Role::Baron
    }

    pub fn has_begin_turn_bonus(self) -> bool {
        self == Role::Merchant
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Base => "Base",
            Role::Governor => "Governor",
            Role::Baron => "Baron",
            Role::Judge => "Judge",
            Role::General => "General",
            Role::Merchant => "Merchant",
            Role::Spy => "Spy",
        })
    }
}

impl FromStr for Role {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Base" => Ok(Role::Base),
            "Governor" => Ok(Role::Governor),
            "Baron" => Ok(Role::Baron),
            "Judge" => Ok(Role::Judge),
            "General" => Ok(Role::General),
            "Merchant" => Ok(Role::Merchant),
            "Spy" => Ok(Role::Spy),
            _ => Err(GameError::UnknownRole(s.to_string())),
        }
    }
}

impl Player {
    pub fn new(name: String, role: Role) -> Self {
        Self {
            name,
            role,
            coins: 0,
            alive: true,
            sanctioned: false,
            sanction_turns: 0,
            last_arrested: false,
            prevented_from_arresting: false,
        }
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_sanctioned(&self) -> bool {
        self.sanctioned
    }

    pub fn is_last_arrested(&self) -> bool {
        self.last_arrested
    }

    pub fn is_prevented_from_arresting(&self) -> bool {
        self.prevented_from_arresting
    }

    pub(super) fn credit(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Removes coins, leaving the balance untouched if it cannot cover the amount.
    pub(super) fn debit(&mut self, amount: u32) -> Result<(), GameError> {
        self.coins = self
            .coins
            .checked_sub(amount)
            .ok_or(GameError::InsufficientFunds)?;
        Ok(())
    }

    pub(super) fn sanction(&mut self) {
        self.sanctioned = true;
        self.sanction_turns = SANCTION_DURATION;
    }

    pub(super) fn eliminate(&mut self) {
        self.alive = false;
    }

    pub(super) fn revive(&mut self) {
        self.alive = true;
    }

    /// Called by the game each time one of this player's turns starts, extra turns included.
    pub(super) fn on_begin_turn(&mut self) {
        if self.sanctioned && self.sanction_turns > 0 {
            self.sanction_turns -= 1;
        }
        self.prevented_from_arresting = false;

        if self.role.has_begin_turn_bonus() && self.coins >= MERCHANT_BONUS_THRESHOLD {
            self.credit(1);
        }
    }

    /// Called by the game when one of this player's turns is over.
    pub(super) fn on_end_turn(&mut self) {
        if self.sanctioned && self.sanction_turns == 0 {
            self.sanctioned = false;
        }
    }
}

/// Picks a distinct special role for each of `num_players` players.
pub fn assign_roles(num_players: usize, rng: &mut impl rand::Rng) -> Result<Vec<Role>, GameError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(GameError::InvalidPlayerCount);
    }
    let mut roles = SPECIAL_ROLES;
    roles.shuffle(rng);
    Ok(roles[..num_players].to_vec())
}
