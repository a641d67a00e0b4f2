//! Nim command - Solve a subtraction-game position

use anyhow::{Context, Result, ensure};
use clap::Parser;

use crate::{
    cli::{
        config::SearchArgs,
        output::{print_kv, print_search_stats, print_section, print_subsection},
    },
    nim::NimState,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a Nim position (take 1..=K stones, last stone wins)")]
pub struct NimArgs {
    /// Stones on the pile
    #[arg(long, default_value_t = 12)]
    pub stones: u32,

    /// Most stones a player may take per turn
    #[arg(long, default_value_t = 3)]
    pub max_take: u32,

    #[command(flatten)]
    pub search: SearchArgs,
}

pub fn execute(args: NimArgs) -> Result<()> {
    ensure!(args.max_take > 0, "--max-take must be at least 1");

    let state = NimState::new(args.stones, args.max_take);
    let engine = args.search.engine()?;

    print_section("Nim");
    println!("{state}");

    let outcome = engine
        .search(&state)
        .with_context(|| format!("search failed for {state}"))?;

    print_subsection("Decision");
    match outcome.action {
        Some(take) => print_kv("Take", &take.to_string()),
        None => print_kv("Take", "none (pile is empty)"),
    }
    match outcome.value {
        Some(value) if value > 0 => print_kv("Value", "+1 (MAX wins)"),
        Some(_) => print_kv("Value", "-1 (MIN wins)"),
        None => print_kv("Value", "unknown"),
    }
    print_kv(
        "Closed form",
        if state.is_winning_for_mover() {
            "mover wins"
        } else {
            "mover loses"
        },
    );

    print_subsection("Search");
    print_search_stats(&outcome.stats, outcome.complete);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_take_is_solved() {
        let args = NimArgs {
            stones: 12,
            max_take: u32::MAX,
            search: SearchArgs::default(),
        };
        assert!(execute(args).is_ok());
    }

    #[test]
    fn zero_take_is_rejected() {
        let args = NimArgs {
            stones: 5,
            max_take: 0,
            search: SearchArgs::default(),
        };
        assert!(execute(args).is_err());
    }
}
