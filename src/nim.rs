//! Single-pile subtraction game (Nim)
//!
//! Players alternately remove between 1 and `max_take` stones from one pile;
//! whoever takes the last stone wins. A position is lost for the side to move
//! exactly when `stones % (max_take + 1) == 0`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{GameState, Player},
};

/// Nim position with MAX moving first from the initial pile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimState {
    stones: u32,
    max_take: u32,
    to_move: Player,
}

impl NimState {
    /// Create a pile of `stones` with MAX to move.
    pub fn new(stones: u32, max_take: u32) -> Self {
        Self::with_player(stones, max_take, Player::Max)
    }

    pub fn with_player(stones: u32, max_take: u32, to_move: Player) -> Self {
        Self {
            stones,
            max_take,
            to_move,
        }
    }

    pub fn stones(&self) -> u32 {
        self.stones
    }

    pub fn max_take(&self) -> u32 {
        self.max_take
    }

    /// Whether the side to move wins with perfect play
    pub fn is_winning_for_mover(&self) -> bool {
        if self.max_take == 0 {
            return false;
        }
        match self.max_take.checked_add(1) {
            Some(period) => self.stones % period != 0,
            // Any pile can be taken in one move
            None => self.stones != 0,
        }
    }
}

impl GameState for NimState {
    type Action = u32;
    type Utility = i32;

    fn current_player(&self) -> Result<Player> {
        Ok(self.to_move)
    }

    /// Takes of 1 up to `min(max_take, stones)`, smallest first
    fn legal_actions(&self) -> Vec<u32> {
        (1..=self.max_take.min(self.stones)).collect()
    }

    fn apply(&self, action: &u32) -> Result<Self> {
        if *action == 0 || *action > self.max_take || *action > self.stones {
            return Err(Error::InvalidAction {
                action: action.to_string(),
                state: self.to_string(),
            });
        }
        Ok(Self {
            stones: self.stones - action,
            max_take: self.max_take,
            to_move: self.to_move.opponent(),
        })
    }

    /// The pile is empty, or no stone may be taken at all
    fn is_terminal(&self) -> bool {
        self.stones == 0 || self.max_take == 0
    }

    /// The side to move at a terminal position has lost
    fn utility(&self) -> Result<i32> {
        if !self.is_terminal() {
            return Err(Error::UndefinedUtility {
                state: self.to_string(),
            });
        }
        Ok(match self.to_move {
            Player::Max => -1,
            Player::Min => 1,
        })
    }
}

impl fmt::Display for NimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stones (take 1-{}), {} to move",
            self.stones, self.max_take, self.to_move
        )
    }
}
