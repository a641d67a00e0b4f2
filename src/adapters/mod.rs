//! Adapters implementing the ports.
//!
//! Infrastructure-side implementations of the traits in [`crate::ports`]:
//! move-selection agents and a text trace of search events.

pub mod agents;
pub mod trace_observer;

pub use agents::{EngineAgent, RandomAgent};
pub use trace_observer::TraceObserver;
