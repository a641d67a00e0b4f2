//! Game-state abstraction shared by every concrete game
//!
//! Any finite, deterministic, perfect-information two-player zero-sum game can
//! be searched by the engine in [`crate::search`] once its position type
//! implements [`GameState`].
//!
//! # Example
//!
//! ```
//! use adversary::{GameState, Player};
//! use adversary::nim::NimState;
//!
//! let state = NimState::new(4, 3);
//! assert_eq!(state.current_player().unwrap(), Player::Max);
//! assert_eq!(state.legal_actions(), vec![1, 2, 3]);
//!
//! let next = state.apply(&3).unwrap();
//! assert_eq!(next.current_player().unwrap(), Player::Min);
//! assert_eq!(state.stones(), 4); // the original value is untouched
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// One of the two sides of a zero-sum game
///
/// Utility is always expressed from MAX's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Max => write!(f, "MAX"),
            Player::Min => write!(f, "MIN"),
        }
    }
}

/// Capability contract of a searchable game position.
///
/// Implementations must be immutable values: [`apply`](GameState::apply)
/// returns a new state and never modifies `self`.
///
/// Contract:
/// - every non-terminal state has at least one legal action
/// - applying a legal action hands the turn to the other player
/// - every sequence of actions eventually reaches a terminal state
/// - [`utility`](GameState::utility) is stable for a given terminal state
pub trait GameState: Clone + fmt::Debug {
    /// Move identifier, only meaningful relative to the state that produced it
    type Action: Clone + PartialEq + fmt::Debug;

    /// Totally ordered outcome score from MAX's perspective
    type Utility: Copy + Ord + fmt::Debug;

    /// Side to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedState`](crate::Error::MalformedState) if the
    /// state is internally inconsistent.
    fn current_player(&self) -> Result<Player>;

    /// Every legal action, in a fixed deterministic order.
    ///
    /// The order drives tie-breaking in the search, so it must not vary
    /// between calls on equal states. An empty list does not by itself mean
    /// the state is terminal; callers check [`is_terminal`](GameState::is_terminal).
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Successor state after `action`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`](crate::Error::InvalidAction) if
    /// `action` is not one of [`legal_actions`](GameState::legal_actions).
    fn apply(&self, action: &Self::Action) -> Result<Self>;

    /// Whether the game has ended
    fn is_terminal(&self) -> bool;

    /// Outcome of a terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedUtility`](crate::Error::UndefinedUtility) when
    /// the state is not terminal.
    fn utility(&self) -> Result<Self::Utility>;
}

/// A utility extended with the two infinities used as search-window bounds.
///
/// Variant order gives `NegInfinity < Finite(_) < PosInfinity`, with finite
/// values compared by the underlying utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value<U> {
    NegInfinity,
    Finite(U),
    PosInfinity,
}

impl<U: Copy> Value<U> {
    /// The finite utility, if any
    pub fn finite(self) -> Option<U> {
        match self {
            Value::Finite(u) => Some(u),
            Value::NegInfinity | Value::PosInfinity => None,
        }
    }

    /// Worst possible value for `player`, the starting point of its node
    pub fn worst_for(player: Player) -> Self {
        match player {
            Player::Max => Value::NegInfinity,
            Player::Min => Value::PosInfinity,
        }
    }

    /// Whether `candidate` is strictly better than `self` for `player`
    pub fn improved_by(self, candidate: Self, player: Player) -> bool
    where
        U: Ord,
    {
        match player {
            Player::Max => candidate > self,
            Player::Min => candidate < self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinities_bracket_every_finite_value() {
        assert!(Value::NegInfinity < Value::Finite(i32::MIN));
        assert!(Value::Finite(i32::MAX) < Value::PosInfinity);
        assert!(Value::Finite(-1) < Value::Finite(0));
    }

    #[test]
    fn improvement_is_strict() {
        let current = Value::Finite(0);
        assert!(current.improved_by(Value::Finite(1), Player::Max));
        assert!(!current.improved_by(Value::Finite(0), Player::Max));
        assert!(current.improved_by(Value::Finite(-1), Player::Min));
        assert!(!current.improved_by(Value::Finite(0), Player::Min));
    }

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::Max.opponent(), Player::Min);
        assert_eq!(Player::Min.opponent().opponent(), Player::Min);
    }
}
