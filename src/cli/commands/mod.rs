//! Subcommands of the `adversary` binary

pub mod best_move;
pub mod export;
pub mod nim;
pub mod play;
pub mod verify;

use anyhow::{Context, Result};

use crate::tictactoe::BoardState;

/// Parse a `--state` argument, defaulting to the empty board
pub(crate) fn parse_board(state: Option<&str>) -> Result<BoardState> {
    match state {
        Some(s) => BoardState::from_string(s).with_context(|| format!("invalid board '{s}'")),
        None => Ok(BoardState::new()),
    }
}

/// Render a position as `position N (row R, col C)`
pub(crate) fn describe_position(position: usize) -> String {
    let (row, col) = crate::tictactoe::row_col(position);
    format!("position {position} (row {row}, col {col})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_board_defaults_to_empty() {
        assert_eq!(parse_board(None).unwrap(), BoardState::new());
        assert!(parse_board(Some("XXX")).is_err());
    }

    #[test]
    fn describe_position_uses_row_major_layout() {
        assert_eq!(describe_position(7), "position 7 (row 2, col 1)");
    }
}
