//! Plain minimax without pruning
//!
//! Visits every node of the game tree. Far slower than the engine, but simple
//! enough to serve as the reference the pruned search is checked against.

use crate::{
    Error, Result,
    game::{GameState, Player},
};

/// Exact minimax value and first optimal action of a state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<A, U> {
    pub value: U,
    /// `None` for terminal states
    pub action: Option<A>,
}

/// Solve `state` by full minimax.
///
/// Ties between equally valued actions go to the earliest one in
/// `legal_actions` order, matching the engine.
pub fn solve<S: GameState>(state: &S) -> Result<Solution<S::Action, S::Utility>> {
    if state.is_terminal() {
        return Ok(Solution {
            value: state.utility()?,
            action: None,
        });
    }

    let player = state.current_player()?;
    let mut best: Option<(S::Utility, S::Action)> = None;

    for (action, value) in action_values(state)? {
        let better = match &best {
            None => true,
            Some((best_value, _)) => match player {
                Player::Max => value > *best_value,
                Player::Min => value < *best_value,
            },
        };
        if better {
            best = Some((value, action));
        }
    }

    let (value, action) = best.ok_or_else(|| Error::NoLegalActions {
        state: format!("{state:?}"),
    })?;
    Ok(Solution {
        value,
        action: Some(action),
    })
}

/// Exact minimax value of `state`
pub fn minimax_value<S: GameState>(state: &S) -> Result<S::Utility> {
    solve(state).map(|solution| solution.value)
}

/// Minimax value of the successor reached by each legal action, in
/// `legal_actions` order. Empty for terminal states.
pub fn action_values<S: GameState>(state: &S) -> Result<Vec<(S::Action, S::Utility)>> {
    if state.is_terminal() {
        return Ok(Vec::new());
    }

    state
        .legal_actions()
        .into_iter()
        .map(|action| {
            let value = minimax_value(&state.apply(&action)?)?;
            Ok((action, value))
        })
        .collect()
}
