//! Best-move command - Search a single position

use anyhow::{Context, Result};
use clap::Parser;

use super::{describe_position, parse_board};
use crate::{
    adapters::TraceObserver,
    cli::{
        config::SearchArgs,
        output::{print_kv, print_search_stats, print_section, print_subsection},
    },
    search::action_values,
    tictactoe::{BoardState, LineAnalyzer},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move in a position")]
pub struct BestMoveArgs {
    /// Board as 9 cells of X, O or '.', optionally suffixed with _X or _O
    #[arg(long, short = 's')]
    pub state: Option<String>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Trace the top plies of the search to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Also list the exact value of every legal move and open threats
    #[arg(long)]
    pub all: bool,
}

const TRACE_DEPTH: usize = 2;

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = parse_board(args.state.as_deref())?;
    let engine = args.search.engine()?;

    print_section("Position");
    println!("{board}");
    print_kv("To move", &board.to_move.to_char().to_string());
    print_kv("Traversal", engine.config().traversal.as_str());
    if let Some(max_nodes) = engine.config().max_nodes {
        print_kv("Node budget", &max_nodes.to_string());
    }

    let result = if args.verbose {
        let mut trace = TraceObserver::new(std::io::stderr(), TRACE_DEPTH);
        engine.search_observed(&board, &mut trace)
    } else {
        engine.search(&board)
    };
    let outcome = result.with_context(|| format!("search failed for {}", board.encode()))?;

    print_subsection("Decision");
    match outcome.action {
        Some(position) => print_kv("Best move", &describe_position(position)),
        None => print_kv("Best move", "none (game is over)"),
    }
    match outcome.value {
        Some(value) => print_kv("Value", &format!("{value:+}")),
        None => print_kv("Value", "unknown"),
    }

    print_subsection("Search");
    print_search_stats(&outcome.stats, outcome.complete);

    if args.all {
        print_move_table(&board)?;
    }

    Ok(())
}

fn print_move_table(board: &BoardState) -> Result<()> {
    print_subsection("All moves (exact minimax)");
    let values = action_values(board).context("failed to evaluate moves")?;
    if values.is_empty() {
        println!("  (state is terminal)");
    }
    for (position, value) in values {
        println!("  {:28} {value:+}", describe_position(position));
    }

    let mover = board.to_move;
    let threats = LineAnalyzer::threats(&board.cells, mover);
    let blocks = LineAnalyzer::threats(&board.cells, mover.opponent());
    print_kv("Winning cells", &format!("{threats:?}"));
    print_kv("Cells to block", &format!("{blocks:?}"));
    Ok(())
}
