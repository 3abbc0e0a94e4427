//! # Connect Four Arena
//!
//! A Connect Four engine with automated agents: a minimax agent with
//! alpha-beta pruning and immediate win/block checks, a uniform random
//! agent, and a trial runner that plays them against each other.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, game state
//! - [`ai`] — Agent trait, heuristic evaluator, minimax and random agents
//! - [`arena`] — Trial runner and result tally
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
