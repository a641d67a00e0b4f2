//! CLI infrastructure for the `adversary` tool
//!
//! Each subcommand lives in [`commands`] as an `Args` struct plus an
//! `execute` function returning `anyhow::Result`.

pub mod commands;
pub mod config;
pub mod output;
