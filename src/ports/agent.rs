//! Agent port - abstraction for anything that picks moves
//!
//! Lets a game be driven by the search engine, a random baseline, or any
//! other policy through one interface.

use crate::{Result, game::GameState};

/// Move-selection policy for a game
///
/// # Examples
///
/// ```
/// use adversary::{GameState, ports::Agent};
/// use adversary::nim::NimState;
///
/// /// Always takes a single stone
/// struct Cautious;
///
/// impl Agent<NimState> for Cautious {
///     fn select_action(&mut self, _state: &NimState) -> adversary::Result<u32> {
///         Ok(1)
///     }
///
///     fn name(&self) -> &str {
///         "cautious"
///     }
/// }
/// ```
pub trait Agent<S: GameState> {
    /// Choose an action for the side to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if `state` is terminal or the policy fails.
    fn select_action(&mut self, state: &S) -> Result<S::Action>;

    /// Human-readable name used in reports
    fn name(&self) -> &str;
}
