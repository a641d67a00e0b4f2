//! Observer port - abstraction for search observation
//!
//! This port defines the interface for observing search events, so tracing,
//! progress reporting or metrics collection can be attached to the engine
//! without coupling the search to any output format.

use crate::{Result, game::Player, search::SearchConfig, search::SearchStats};

/// Observer trait for monitoring a search
///
/// # Event Sequence
///
/// 1. `on_search_start(config)` - Once, before the root is visited
/// 2. During the search, in tree order:
///    - `on_expand(depth, player, actions)` - For each non-terminal state
///    - `on_cutoff(depth, skipped)` - When a node's remaining actions are pruned
///    - `on_budget_exhausted(nodes)` - At most once, in budgeted mode
/// 3. `on_search_end(stats, complete)` - Once, after the decision is made
///
/// An error returned by any method aborts the search and is propagated to
/// the caller.
///
/// # Examples
///
/// ```
/// use adversary::{Player, ports::SearchObserver};
///
/// #[derive(Default)]
/// struct WidestNode {
///     widest: usize,
/// }
///
/// impl SearchObserver for WidestNode {
///     fn on_expand(&mut self, _depth: usize, _player: Player, actions: usize) -> adversary::Result<()> {
///         self.widest = self.widest.max(actions);
///         Ok(())
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called before the root is visited.
    fn on_search_start(&mut self, _config: &SearchConfig) -> Result<()> {
        Ok(())
    }

    /// Called when a non-terminal state is expanded.
    ///
    /// # Parameters
    ///
    /// * `depth` - Ply of the state (the root is 0)
    /// * `player` - Side to move in the state
    /// * `actions` - Number of legal actions enumerated
    fn on_expand(&mut self, _depth: usize, _player: Player, _actions: usize) -> Result<()> {
        Ok(())
    }

    /// Called when the window closes at `depth` and `skipped` actions are pruned.
    fn on_cutoff(&mut self, _depth: usize, _skipped: usize) -> Result<()> {
        Ok(())
    }

    /// Called once when the node budget stops the search.
    fn on_budget_exhausted(&mut self, _nodes: u64) -> Result<()> {
        Ok(())
    }

    /// Called after the search finished or was stopped by its budget.
    fn on_search_end(&mut self, _stats: &SearchStats, _complete: bool) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}
