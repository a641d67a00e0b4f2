//! Minimax search with alpha-beta pruning for two-player zero-sum games
//!
//! This crate provides:
//! - The [`GameState`] contract any perfect-information game implements
//! - An alpha-beta [`Engine`] with recursive and explicit-stack traversals
//!   and an optional node budget
//! - An unpruned minimax solver used as a reference
//! - Tic-Tac-Toe and Nim as concrete games
//! - Agents, search observers and the `adversary` command-line tool

pub mod adapters;
pub mod cli;
pub mod error;
pub mod game;
pub mod nim;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use game::{GameState, Player, Value};
pub use search::{Engine, SearchConfig, SearchOutcome, Traversal, best_action};
