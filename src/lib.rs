//! Rule engine for Coup: turn order, role abilities and the block window.

pub mod demo;
pub mod error;
pub mod game;
