//! Agents that drive a game: the search engine and a random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    game::GameState,
    ports::Agent,
    search::{Engine, SearchOutcome},
};

/// Plays the move chosen by the alpha-beta engine
#[derive(Debug, Clone)]
pub struct EngineAgent<S: GameState> {
    name: String,
    engine: Engine,
    last: Option<SearchOutcome<S::Action, S::Utility>>,
}

impl<S: GameState> EngineAgent<S> {
    pub fn new(name: impl Into<String>, engine: Engine) -> Self {
        Self {
            name: name.into(),
            engine,
            last: None,
        }
    }

    /// Outcome of the most recent search, for reporting values and statistics
    pub fn last_outcome(&self) -> Option<&SearchOutcome<S::Action, S::Utility>> {
        self.last.as_ref()
    }
}

impl<S: GameState> Agent<S> for EngineAgent<S> {
    fn select_action(&mut self, state: &S) -> Result<S::Action> {
        let outcome = self.engine.search(state)?;
        let action = outcome.action.clone().ok_or(Error::GameOver)?;
        self.last = Some(outcome);
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a uniformly random legal action
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent seeded from the thread RNG
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn select_action(&mut self, state: &S) -> Result<S::Action> {
        if state.is_terminal() {
            return Err(Error::GameOver);
        }
        let mut actions = state.legal_actions();
        if actions.is_empty() {
            return Err(Error::NoLegalActions {
                state: format!("{state:?}"),
            });
        }
        let index = self.rng.random_range(0..actions.len());
        Ok(actions.swap_remove(index))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
