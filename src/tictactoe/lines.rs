//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Cell, Mark};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Line queries over a raw cell array
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First completed line of `mark`, in [`WINNING_LINES`] order
    pub fn winning_line(cells: &[Cell; 9], mark: Mark) -> Option<[usize; 3]> {
        let target = mark.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Check if a mark has three in a row
    pub fn has_won(cells: &[Cell; 9], mark: Mark) -> bool {
        Self::winning_line(cells, mark).is_some()
    }

    /// Empty positions that would complete a line for `mark`, ascending
    pub fn threats(cells: &[Cell; 9], mark: Mark) -> Vec<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::completing_cell(cells, mark, line))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // The single empty cell of a line whose other two cells hold `mark`
    fn completing_cell(cells: &[Cell; 9], mark: Mark, line: &[usize; 3]) -> Option<usize> {
        let target = mark.to_cell();
        let mut empty = None;
        for &idx in line {
            match cells[idx] {
                Cell::Empty if empty.is_none() => empty = Some(idx),
                c if c == target => {}
                _ => return None,
            }
        }
        empty
    }
}
