//! Search configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How the game tree is walked.
///
/// Both traversals visit nodes in the same order and return identical
/// outcomes and statistics; they differ only in where the per-node state lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// One native stack frame per ply
    #[default]
    Recursive,
    /// Explicit frame stack on the heap, for games deeper than the call stack allows
    Iterative,
}

impl Traversal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Recursive => "recursive",
            Traversal::Iterative => "iterative",
        }
    }
}

/// Configuration for [`Engine`](super::Engine).
///
/// The default is an unbounded recursive search, which always returns the
/// exact minimax decision.
///
/// # Budgeted mode
///
/// Setting [`max_nodes`](SearchConfig::max_nodes) turns on the budgeted mode:
/// once that many states have been visited the search stops and returns the
/// best root action among the root actions it finished evaluating, falling
/// back to the first legal action when none finished. The outcome is then
/// flagged as incomplete.
///
/// # Examples
///
/// ```
/// use adversary::search::{SearchConfig, Traversal};
///
/// let config = SearchConfig::new()
///     .with_traversal(Traversal::Iterative)
///     .with_max_nodes(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Tree walking strategy
    pub traversal: Traversal,
    /// Upper bound on visited states (root included); `None` searches to the end
    pub max_nodes: Option<u64>,
}

impl SearchConfig {
    /// Create an unbounded recursive configuration
    pub fn new() -> Self {
        Self {
            traversal: Traversal::default(),
            max_nodes: None,
        }
    }

    /// Set the traversal strategy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Set a node budget, enabling the budgeted mode.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Check that the configuration can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero node budget, which
    /// would not even allow the root to be visited.
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "max_nodes must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read search config '{}'", path.display()),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
