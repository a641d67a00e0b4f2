//! Ports (trait boundaries) for external collaborators.
//!
//! The search core owns these traits; CLI-facing implementations live in
//! [`crate::adapters`].

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::{NullObserver, SearchObserver};
