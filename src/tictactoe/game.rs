//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Mark};
use crate::{Error, Result, ports::Agent};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn of(board: &BoardState) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_terminal() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_state(BoardState::new())
    }

    /// Create a game that continues from `initial`
    pub fn from_state(initial: BoardState) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the game has ended and
    /// [`Error::InvalidAction`] for an occupied or off-board position; the
    /// history is left unchanged in both cases.
    pub fn play(&mut self, position: usize) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let new_state = current.make_move(position)?;

        self.moves.push(Move {
            position,
            mark: current.to_move,
        });
        self.outcome = GameOutcome::of(&new_state);

        Ok(())
    }

    /// Let `x` and `o` alternate until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates agent failures and illegal moves chosen by an agent.
    pub fn play_out(
        &mut self,
        x: &mut dyn Agent<BoardState>,
        o: &mut dyn Agent<BoardState>,
    ) -> Result<GameOutcome> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            let state = self.current_state()?;
            let position = match state.to_move {
                Mark::X => x.select_action(&state)?,
                Mark::O => o.select_action(&state)?,
            };
            self.play(position)?;
        }
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current state.
    /// This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<BoardState> {
        let mut state = self.initial;
        for m in self.moves.iter().take(end_index) {
            state = state.make_move(m.position)?;
        }
        Ok(state)
    }

    /// Get current board state
    pub fn current_state(&self) -> Result<BoardState> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, initial position first
    pub fn state_sequence(&self) -> Result<Vec<BoardState>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for m in &self.moves {
            state = state.make_move(m.position)?;
            states.push(state);
        }
        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
