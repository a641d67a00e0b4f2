//! Line-oriented search trace

use std::io::Write;

use crate::{
    Result,
    game::Player,
    ports::SearchObserver,
    search::{SearchConfig, SearchStats},
};

/// Writes one `key=value` line per search event.
///
/// `max_depth` limits node-level events (expansions and cutoffs) to the top
/// plies of the tree; start, budget and end events are always written.
///
/// # Examples
///
/// ```
/// use adversary::adapters::TraceObserver;
/// use adversary::nim::NimState;
/// use adversary::search::Engine;
///
/// let mut trace = TraceObserver::new(Vec::new(), 1);
/// Engine::default().search_observed(&NimState::new(5, 3), &mut trace).unwrap();
///
/// let log = String::from_utf8(trace.into_inner()).unwrap();
/// assert!(log.starts_with("search.start"));
/// assert!(log.lines().last().unwrap().starts_with("search.end"));
/// ```
pub struct TraceObserver<W: Write> {
    writer: W,
    max_depth: usize,
}

impl<W: Write> TraceObserver<W> {
    pub fn new(writer: W, max_depth: usize) -> Self {
        Self { writer, max_depth }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SearchObserver for TraceObserver<W> {
    fn on_search_start(&mut self, config: &SearchConfig) -> Result<()> {
        let budget = config
            .max_nodes
            .map_or_else(|| "none".to_string(), |n| n.to_string());
        writeln!(
            self.writer,
            "search.start traversal={} max_nodes={budget}",
            config.traversal.as_str()
        )?;
        Ok(())
    }

    fn on_expand(&mut self, depth: usize, player: Player, actions: usize) -> Result<()> {
        if depth <= self.max_depth {
            writeln!(
                self.writer,
                "{:indent$}expand depth={depth} player={player} actions={actions}",
                "",
                indent = depth * 2
            )?;
        }
        Ok(())
    }

    fn on_cutoff(&mut self, depth: usize, skipped: usize) -> Result<()> {
        if depth <= self.max_depth {
            writeln!(
                self.writer,
                "{:indent$}cutoff depth={depth} skipped={skipped}",
                "",
                indent = depth * 2
            )?;
        }
        Ok(())
    }

    fn on_budget_exhausted(&mut self, nodes: u64) -> Result<()> {
        writeln!(self.writer, "search.budget_exhausted nodes={nodes}")?;
        Ok(())
    }

    fn on_search_end(&mut self, stats: &SearchStats, complete: bool) -> Result<()> {
        writeln!(
            self.writer,
            "search.end complete={complete} nodes={} expansions={} cutoffs={} max_depth={}",
            stats.nodes, stats.expansions, stats.cutoffs, stats.max_depth
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nim::NimState, search::Engine};

    #[test]
    fn depth_filter_hides_deep_expansions() {
        let mut trace = TraceObserver::new(Vec::new(), 0);
        Engine::default()
            .search_observed(&NimState::new(6, 3), &mut trace)
            .unwrap();
        let log = String::from_utf8(trace.into_inner()).unwrap();

        let expansions: Vec<_> = log.lines().filter(|l| l.contains("expand")).collect();
        assert_eq!(expansions, vec!["expand depth=0 player=MAX actions=3"]);
    }

    #[test]
    fn budget_event_is_logged_once() {
        let engine = Engine::new(SearchConfig::new().with_max_nodes(5)).unwrap();
        let mut trace = TraceObserver::new(Vec::new(), 0);
        engine
            .search_observed(&NimState::new(12, 3), &mut trace)
            .unwrap();
        let log = String::from_utf8(trace.into_inner()).unwrap();

        assert_eq!(log.matches("search.budget_exhausted nodes=5").count(), 1);
        assert!(log.contains("search.end complete=false nodes=5"));
    }
}
