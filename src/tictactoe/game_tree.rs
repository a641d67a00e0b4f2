//! Enumeration of the positions reachable from a starting board

use std::collections::{HashSet, VecDeque};

use super::board::{BoardState, Mark};
use crate::Result;

/// Every distinct position reachable from `root` (root included), in
/// breadth-first order with moves tried in row-major order.
///
/// # Errors
///
/// Only fails if `root` cannot be played from, which indicates a corrupted board.
pub fn reachable_states(root: BoardState) -> Result<Vec<BoardState>> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut states = Vec::new();

    visited.insert(root);
    queue.push_back(root);

    while let Some(state) = queue.pop_front() {
        states.push(state);
        for pos in state.legal_moves() {
            let next = state.make_move(pos)?;
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(states)
}

/// Counts describing a reachable state space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSpaceSummary {
    pub total: usize,
    pub terminal: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Positions by number of occupied cells (0-9)
    pub by_occupancy: [usize; 10],
}

impl StateSpaceSummary {
    pub fn from_states(states: &[BoardState]) -> Self {
        let mut summary = StateSpaceSummary {
            total: states.len(),
            ..Default::default()
        };

        for state in states {
            summary.by_occupancy[state.occupied_count()] += 1;
            if !state.is_terminal() {
                continue;
            }
            summary.terminal += 1;
            match state.winner() {
                Some(Mark::X) => summary.x_wins += 1,
                Some(Mark::O) => summary.o_wins += 1,
                None => summary.draws += 1,
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_state_space_matches_known_counts() {
        let states = reachable_states(BoardState::new()).unwrap();
        let summary = StateSpaceSummary::from_states(&states);

        assert_eq!(summary.total, 5478);
        assert_eq!(summary.terminal, 958);
        assert_eq!(summary.x_wins, 626);
        assert_eq!(summary.o_wins, 316);
        assert_eq!(summary.draws, 16);
        assert_eq!(summary.by_occupancy[0], 1);
        assert_eq!(summary.by_occupancy[1], 9);
        assert_eq!(summary.by_occupancy[2], 72);
    }

    #[test]
    fn enumeration_starts_at_root_and_is_deduplicated() {
        let root = BoardState::from_string("XOXOXO...").unwrap();
        let states = reachable_states(root).unwrap();
        assert_eq!(states[0], root);

        let unique: HashSet<_> = states.iter().collect();
        assert_eq!(unique.len(), states.len());
    }

    #[test]
    fn terminal_root_has_no_successors() {
        let root = BoardState::from_string("XXXOO....").unwrap();
        assert_eq!(reachable_states(root).unwrap(), vec![root]);
    }
}
