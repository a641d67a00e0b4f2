//! Verify command - Check the engine against exhaustive minimax
//!
//! Every reachable Tic-Tac-Toe position is searched three ways: plain
//! minimax, recursive alpha-beta and iterative alpha-beta. Values and actions
//! must agree everywhere, and both traversals must report identical counters.

use anyhow::{Result, bail};
use clap::Parser;
use indicatif::ProgressBar;

use crate::{
    cli::output::{create_state_progress, format_number, print_kv, print_section},
    search::{Engine, SearchConfig, Traversal, solve},
    tictactoe::{BoardState, StateSpaceSummary, reachable_states},
};

#[derive(Parser, Debug)]
#[command(about = "Check pruned search against exhaustive minimax")]
pub struct VerifyArgs {
    /// Only check the first N reachable states (breadth-first order)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// A position where the three searches disagreed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub state: String,
    pub detail: String,
}

/// Totals of a verification run
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checked: usize,
    pub pruned_nodes: u64,
    pub exhaustive_nodes: u64,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare the engine with exhaustive minimax on every state in `states`.
pub fn verify_states(states: &[BoardState], progress: Option<&ProgressBar>) -> Result<VerifyReport> {
    let recursive = Engine::new(SearchConfig::new())?;
    let iterative = Engine::new(SearchConfig::new().with_traversal(Traversal::Iterative))?;
    let mut report = VerifyReport::default();

    for state in states {
        let expected = solve(state)?;
        let rec = recursive.search(state)?;
        let iter = iterative.search(state)?;

        let mut problems = Vec::new();
        if rec.value != Some(expected.value) {
            problems.push(format!(
                "value {:?}, exhaustive {}",
                rec.value, expected.value
            ));
        }
        if rec.action != expected.action {
            problems.push(format!(
                "action {:?}, exhaustive {:?}",
                rec.action, expected.action
            ));
        }
        if rec != iter {
            problems.push(format!(
                "recursive {:?} differs from iterative {:?}",
                rec, iter
            ));
        }
        if !problems.is_empty() {
            report.mismatches.push(Mismatch {
                state: state.encode(),
                detail: problems.join("; "),
            });
        }

        report.checked += 1;
        report.pruned_nodes += rec.stats.nodes;
        report.exhaustive_nodes += count_nodes(state)?;
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    Ok(report)
}

// Size of the full game tree below `state`, root included
fn count_nodes(state: &BoardState) -> Result<u64> {
    let mut total = 1;
    for pos in state.legal_moves() {
        total += count_nodes(&state.make_move(pos)?)?;
    }
    Ok(total)
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let mut states = reachable_states(BoardState::new())?;
    let summary = StateSpaceSummary::from_states(&states);
    if let Some(limit) = args.limit {
        states.truncate(limit);
    }

    print_section("State space");
    print_kv("Reachable", &format_number(summary.total as u64));
    print_kv("Terminal", &format_number(summary.terminal as u64));
    print_kv("X wins", &format_number(summary.x_wins as u64));
    print_kv("O wins", &format_number(summary.o_wins as u64));
    print_kv("Draws", &format_number(summary.draws as u64));
    print_kv("Checking", &format_number(states.len() as u64));

    let progress = if args.no_progress {
        None
    } else {
        let pb = create_state_progress(states.len() as u64)?;
        pb.set_message("alpha-beta vs minimax");
        Some(pb)
    };
    let report = verify_states(&states, progress.as_ref())?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Verification");
    print_kv("States checked", &format_number(report.checked as u64));
    print_kv("Alpha-beta nodes", &format_number(report.pruned_nodes));
    print_kv("Minimax nodes", &format_number(report.exhaustive_nodes));
    if report.exhaustive_nodes > 0 {
        let saved = 100.0 * (1.0 - report.pruned_nodes as f64 / report.exhaustive_nodes as f64);
        print_kv("Nodes pruned", &format!("{saved:.1}%"));
    }

    if !report.is_clean() {
        for mismatch in report.mismatches.iter().take(10) {
            eprintln!("  {}: {}", mismatch.state, mismatch.detail);
        }
        bail!(
            "{} of {} states disagree with exhaustive minimax",
            report.mismatches.len(),
            report.checked
        );
    }

    println!("\n✓ All states agree");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_nodes_of_small_positions() {
        let terminal = BoardState::from_string("XXXOO....").unwrap();
        assert_eq!(count_nodes(&terminal).unwrap(), 1);

        // One empty cell left
        let last = BoardState::from_string("XOXXOOOX.").unwrap();
        assert_eq!(count_nodes(&last).unwrap(), 2);
    }

    #[test]
    fn late_positions_verify_cleanly() {
        let states = reachable_states(BoardState::from_string("XOXOX....").unwrap()).unwrap();
        let report = verify_states(&states, None).unwrap();
        assert!(report.is_clean(), "{:?}", report.mismatches);
        assert_eq!(report.checked, states.len());
        assert!(report.pruned_nodes <= report.exhaustive_nodes);
    }
}
