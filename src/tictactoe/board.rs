//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::{
    Error, Result,
    game::{GameState, Player},
};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// The mark a player places; X is MAX, O is MIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opponent's mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    /// Search side playing this mark
    pub fn side(self) -> Player {
        match self {
            Mark::X => Player::Max,
            Mark::O => Player::Min,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

/// Row and column (both 0-2) of a board position
pub fn row_col(position: usize) -> (usize, usize) {
    (position / 3, position % 3)
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it's only 10 bytes
/// (9 bytes for cells + 1 byte for the mark to move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Mark,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Mark::X)
    }

    /// Create a new empty board with the given mark moving first.
    ///
    /// O-first boards are supported for analysis; utility is still scored
    /// from X's (MAX's) point of view.
    pub fn new_with_player(first: Mark) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first,
        }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9]> {
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn parse_mark(mark_str: &str, context: &str) -> Result<Mark> {
        match mark_str {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            _ => Err(Error::InvalidPlayerString {
                player: mark_str.to_string(),
                context: context.to_string(),
            }),
        }
    }

    fn turn_from_counts(count: PieceCount, context: &str) -> Result<Mark> {
        if count.x == count.o {
            Ok(Mark::X)
        } else if count.x == count.o + 1 {
            Ok(Mark::O)
        } else {
            Err(Error::MalformedState {
                message: format!(
                    "piece counts X={}, O={} in '{context}' must be equal or X ahead by 1",
                    count.x, count.o
                ),
            })
        }
    }

    fn turn_consistent_with_counts(count: PieceCount, mark: Mark) -> bool {
        match mark {
            Mark::X => count.x == count.o || count.o == count.x + 1,
            Mark::O => count.x == count.o || count.x == count.o + 1,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string holds 9 cells in row-major order (whitespace is ignored) and
    /// may end with `_X` or `_O` to set the mark to move explicitly. Without the
    /// suffix the turn is inferred from the piece counts, assuming X opened.
    ///
    /// # Examples
    ///
    /// ```
    /// use adversary::tictactoe::{BoardState, Mark};
    ///
    /// let board = BoardState::from_string("X.. .O. ...").unwrap();
    /// assert_eq!(board.to_move, Mark::X);
    ///
    /// let o_first = BoardState::from_string("O........_X").unwrap();
    /// assert_eq!(o_first.to_move, Mark::X);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the board does not have exactly 9 cells, contains an invalid
    /// character, has impossible piece counts, or has a suffix that conflicts
    /// with the counts.
    pub fn from_string(s: &str) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, specified_turn) = match cleaned.split_once('_') {
            Some((board, suffix)) => (board, Some(Self::parse_mark(suffix, s)?)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        let to_move = match specified_turn {
            Some(mark) if Self::turn_consistent_with_counts(count, mark) => mark,
            Some(mark) => {
                return Err(Error::MalformedState {
                    message: format!(
                        "piece counts (X={}, O={}) are inconsistent with {} to move in '{s}'",
                        count.x,
                        count.o,
                        mark.to_char()
                    ),
                });
            }
            None => Self::turn_from_counts(count, s)?,
        };

        Ok(BoardState { cells, to_move })
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move and return a new board state
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] if the position is off the board,
    /// already occupied, or the game is over.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState> {
        if pos >= 9 || !self.is_empty(pos) || self.is_terminal() {
            return Err(Error::InvalidAction {
                action: pos.to_string(),
                state: self.encode(),
            });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a mark has three in a row
    pub fn has_won(&self, mark: Mark) -> bool {
        LineAnalyzer::has_won(&self.cells, mark)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Mark::X) || self.has_won(Mark::O) || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        if self.has_won(Mark::X) {
            Some(Mark::X)
        } else if self.has_won(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Compact key of the form `XO......._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move.to_char()
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl GameState for BoardState {
    type Action = usize;
    type Utility = i32;

    /// Side to move, checked against the piece counts
    fn current_player(&self) -> Result<Player> {
        let count = Self::count_pieces(&self.cells);
        if !Self::turn_consistent_with_counts(count, self.to_move) {
            return Err(Error::MalformedState {
                message: format!(
                    "piece counts (X={}, O={}) are inconsistent with {} to move in '{}'",
                    count.x,
                    count.o,
                    self.to_move.to_char(),
                    self.encode()
                ),
            });
        }
        Ok(self.to_move.side())
    }

    /// Empty cells in row-major order
    fn legal_actions(&self) -> Vec<usize> {
        self.legal_moves()
    }

    fn apply(&self, action: &usize) -> Result<Self> {
        self.make_move(*action)
    }

    fn is_terminal(&self) -> bool {
        BoardState::is_terminal(self)
    }

    /// +1 if X won, -1 if O won, 0 for a draw
    fn utility(&self) -> Result<i32> {
        if !BoardState::is_terminal(self) {
            return Err(Error::UndefinedUtility {
                state: self.encode(),
            });
        }
        Ok(match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Mark::X);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_make_move() {
        let board = BoardState::new();
        let next = board.make_move(4).unwrap();
        assert_eq!(next.get(4), Cell::X);
        assert_eq!(next.to_move, Mark::O);
        // Original untouched
        assert!(board.is_empty(4));

        let err = next.make_move(4).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { .. }));
        assert!(next.make_move(9).is_err());
    }

    #[test]
    fn test_win_detection() {
        let board = BoardState::from_string("XXXOO....").unwrap();
        assert!(board.has_won(Mark::X));
        assert_eq!(board.winner(), Some(Mark::X));
        assert!(board.is_terminal());
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.utility().unwrap(), 1);
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O O
        // O X X
        let board = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_draw());
        assert!(board.is_terminal());
        assert_eq!(board.utility().unwrap(), 0);
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let board = BoardState::from_string("XXXOO....").unwrap();
        assert!(matches!(
            board.make_move(5),
            Err(Error::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.to_move, Mark::O);

        assert!(matches!(
            BoardState::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            BoardState::from_string("XX.OO....XO"),
            Err(Error::InvalidBoardLength { got: 11, .. })
        ));
        assert!(matches!(
            BoardState::from_string("XX.OO....._X"),
            Err(Error::InvalidBoardLength { got: 10, .. })
        ));
        assert!(matches!(
            BoardState::from_string("XOZ......"),
            Err(Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(BoardState::from_string("XXX......").is_err());
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let board = BoardState::from_string("........._O").unwrap();
        assert_eq!(board.to_move, Mark::O);

        let err = BoardState::from_string("O........_O").unwrap_err();
        assert!(matches!(err, Error::MalformedState { .. }));
        assert!(
            err.to_string().contains("inconsistent with O to move"),
            "expected inconsistency error, got {err}"
        );
        assert!(BoardState::from_string("........._Z").is_err());
    }

    #[test]
    fn test_current_player_detects_malformed_state() {
        let board = BoardState {
            cells: [Cell::X; 9],
            to_move: Mark::O,
        };
        assert!(matches!(
            board.current_player(),
            Err(Error::MalformedState { .. })
        ));
    }

    #[test]
    fn test_utility_undefined_before_end() {
        assert!(matches!(
            BoardState::new().utility(),
            Err(Error::UndefinedUtility { .. })
        ));
    }

    #[test]
    fn test_encode_and_display() {
        let board = BoardState::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO......._X");
        assert_eq!(board.to_string(), "XO.\n...\n...");
        assert_eq!(row_col(5), (1, 2));
    }
}
