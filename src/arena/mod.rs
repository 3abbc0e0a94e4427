//! Trial runner: seats two agents, plays games to completion and tallies
//! the outcomes.

pub mod runner;
pub mod tally;

pub use runner::{Arena, ArenaConfig, GameRecord};
pub use tally::Tally;
