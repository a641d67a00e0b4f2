//! Search statistics and the per-search bookkeeping shared by both traversals

use serde::{Deserialize, Serialize};

use crate::{Result, game::Player, ports::SearchObserver};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited, including the root
    pub nodes: u64,
    /// Non-terminal states whose actions were enumerated
    pub expansions: u64,
    /// Nodes where remaining actions were skipped by a cutoff
    pub cutoffs: u64,
    /// Deepest ply visited (the root is ply 0)
    pub max_depth: usize,
}

/// Mutable context of a running search: counters, budget and observer.
pub(crate) struct Tracker<'o> {
    pub(crate) stats: SearchStats,
    max_nodes: Option<u64>,
    exhausted: bool,
    observer: &'o mut dyn SearchObserver,
}

impl<'o> Tracker<'o> {
    pub(crate) fn new(max_nodes: Option<u64>, observer: &'o mut dyn SearchObserver) -> Self {
        Self {
            stats: SearchStats::default(),
            max_nodes,
            exhausted: false,
            observer,
        }
    }

    /// Account for a visit to a state at `depth`.
    ///
    /// Returns `false` without counting anything once the node budget is spent.
    pub(crate) fn visit(&mut self, depth: usize) -> Result<bool> {
        if let Some(limit) = self.max_nodes {
            if self.stats.nodes >= limit {
                if !self.exhausted {
                    self.exhausted = true;
                    self.observer.on_budget_exhausted(self.stats.nodes)?;
                }
                return Ok(false);
            }
        }

        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        Ok(true)
    }

    pub(crate) fn expand(&mut self, depth: usize, player: Player, actions: usize) -> Result<()> {
        self.stats.expansions += 1;
        self.observer.on_expand(depth, player, actions)
    }

    pub(crate) fn cutoff(&mut self, depth: usize, skipped: usize) -> Result<()> {
        self.stats.cutoffs += 1;
        self.observer.on_cutoff(depth, skipped)
    }
}
