//! Minimax search with alpha-beta pruning
//!
//! The engine is generic over any [`GameState`]. It walks the game tree depth
//! first, keeps an `(alpha, beta)` window of the values each side can already
//! guarantee, and skips the remaining actions of a node once `beta <= alpha`.
//! Pruning never changes the decision: the returned value equals full minimax
//! and the returned action is the first one, in `legal_actions` order, that
//! reaches it.
//!
//! # Example
//!
//! ```
//! use adversary::search::{Engine, SearchConfig, Traversal, best_action};
//! use adversary::tictactoe::BoardState;
//!
//! // X to move can complete the top row
//! let board = BoardState::from_string("XX.OO....").unwrap();
//! assert_eq!(best_action(&board).unwrap(), Some(2));
//!
//! let engine = Engine::new(SearchConfig::new().with_traversal(Traversal::Iterative)).unwrap();
//! let outcome = engine.search(&board).unwrap();
//! assert_eq!(outcome.action, Some(2));
//! assert_eq!(outcome.value, Some(1));
//! assert!(outcome.complete);
//! ```

pub mod config;
pub mod exhaustive;
mod iterative;
mod recursive;
pub mod stats;

use crate::{
    Error, Result,
    game::{GameState, Player, Value},
    ports::{NullObserver, SearchObserver},
};

pub use config::{SearchConfig, Traversal};
pub use exhaustive::{Solution, action_values, minimax_value, solve};
pub use stats::SearchStats;
use stats::Tracker;

/// Result of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<A, U> {
    /// Chosen action; `None` when the root is terminal
    pub action: Option<A>,
    /// Exact root value when `complete`; otherwise the value of the chosen
    /// action among the fully searched root actions, or `None` if none finished
    pub value: Option<U>,
    /// `false` only when a node budget stopped the search early
    pub complete: bool,
    pub stats: SearchStats,
}

/// Alpha-beta search engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: SearchConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration is invalid.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Optimal action for the side to move, or `None` if `state` is terminal.
    pub fn best_action<S: GameState>(&self, state: &S) -> Result<Option<S::Action>> {
        self.search(state).map(|outcome| outcome.action)
    }

    /// Search `state` and report the decision together with its statistics.
    pub fn search<S: GameState>(&self, state: &S) -> Result<SearchOutcome<S::Action, S::Utility>> {
        self.search_observed(state, &mut NullObserver)
    }

    /// Search `state`, reporting events to `observer`.
    ///
    /// # Errors
    ///
    /// Errors raised by the game (an illegal action, an inconsistent state,
    /// a non-terminal state without actions) abort the search and are
    /// returned unchanged, as are observer errors. Running out of node budget
    /// is not an error.
    pub fn search_observed<S: GameState>(
        &self,
        state: &S,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchOutcome<S::Action, S::Utility>> {
        observer.on_search_start(&self.config)?;

        let mut tracker = Tracker::new(self.config.max_nodes, observer);
        let eval = match self.config.traversal {
            Traversal::Recursive => recursive::search(
                &mut tracker,
                state,
                Value::NegInfinity,
                Value::PosInfinity,
                0,
            )?,
            Traversal::Iterative => {
                iterative::search(&mut tracker, state, Value::NegInfinity, Value::PosInfinity)?
            }
        };
        let stats = tracker.stats;

        let mut action = eval.action;
        if !eval.complete && action.is_none() && !state.is_terminal() {
            // Budget ran out before any root action was fully searched
            action = state.legal_actions().into_iter().next();
        }

        let outcome = SearchOutcome {
            action,
            value: eval.value.finite(),
            complete: eval.complete,
            stats,
        };
        observer.on_search_end(&outcome.stats, outcome.complete)?;
        Ok(outcome)
    }
}

/// Optimal action for the side to move, using an unbounded search.
///
/// Returns `Ok(None)` when `state` is already terminal.
pub fn best_action<S: GameState>(state: &S) -> Result<Option<S::Action>> {
    Engine::default().best_action(state)
}

/// Value and action reported by a subtree search
pub(crate) struct Eval<A, U> {
    value: Value<U>,
    action: Option<A>,
    // false when the node budget interrupted this subtree
    complete: bool,
}

impl<A, U> Eval<A, U> {
    fn exact(value: Value<U>, action: Option<A>) -> Self {
        Self {
            value,
            action,
            complete: true,
        }
    }

    fn partial(value: Value<U>, action: Option<A>) -> Self {
        Self {
            value,
            action,
            complete: false,
        }
    }

    fn leaf(utility: U) -> Self {
        Self::exact(Value::Finite(utility), None)
    }

    fn halted() -> Self {
        Self::partial(Value::NegInfinity, None)
    }
}

/// What visiting a state revealed
pub(crate) enum Node<A, U> {
    /// Budget spent, the state was not visited
    Halted,
    Leaf(U),
    Inner { player: Player, actions: Vec<A> },
}

/// Visit `state`: count it, stop at terminals, otherwise enumerate its actions.
pub(crate) fn open<S: GameState>(
    tracker: &mut Tracker<'_>,
    state: &S,
    depth: usize,
) -> Result<Node<S::Action, S::Utility>> {
    if !tracker.visit(depth)? {
        return Ok(Node::Halted);
    }
    if state.is_terminal() {
        return Ok(Node::Leaf(state.utility()?));
    }

    let player = state.current_player()?;
    let actions = state.legal_actions();
    if actions.is_empty() {
        return Err(Error::NoLegalActions {
            state: format!("{state:?}"),
        });
    }
    tracker.expand(depth, player, actions.len())?;
    Ok(Node::Inner { player, actions })
}

/// Narrow the window with the running value of `player`'s node.
///
/// Returns `true` when the window has closed and the node can be pruned.
pub(crate) fn tighten<U: Copy + Ord>(
    player: Player,
    value: Value<U>,
    alpha: &mut Value<U>,
    beta: &mut Value<U>,
) -> bool {
    match player {
        Player::Max => *alpha = (*alpha).max(value),
        Player::Min => *beta = (*beta).min(value),
    }
    *beta <= *alpha
}
