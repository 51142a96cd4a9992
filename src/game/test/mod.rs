//! Test module for the Coup game engine
//!
//! Tests are grouped by the part of the rules they exercise.

#![cfg(test)]
#![allow(clippy::bool_assert_comparison)]

pub mod actions;
pub mod invariants;
