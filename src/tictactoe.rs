//! Tic-Tac-Toe, the reference game for the search engine

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{BoardState, Cell, Mark, row_col};
pub use game::{Game, GameOutcome, Move};
pub use game_tree::{StateSpaceSummary, reachable_states};
pub use lines::{LineAnalyzer, WINNING_LINES};
