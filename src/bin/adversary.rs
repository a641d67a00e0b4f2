//! Adversary CLI - optimal play for two-player zero-sum games
//!
//! This CLI provides a unified interface for:
//! - Finding the best move in a Tic-Tac-Toe position
//! - Playing the engine against optimal or random opponents
//! - Verifying alpha-beta against exhaustive minimax
//! - Exporting the optimal policy
//! - Solving Nim positions

use adversary::cli::commands::{best_move, export, nim, play, verify};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adversary")]
#[command(version, about = "Minimax search with alpha-beta pruning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move in a position
    BestMove(best_move::BestMoveArgs),

    /// Play the engine against an opponent
    Play(play::PlayArgs),

    /// Check pruned search against exhaustive minimax
    Verify(verify::VerifyArgs),

    /// Export the optimal policy as JSON
    Export(export::ExportArgs),

    /// Solve a Nim position
    Nim(nim::NimArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BestMove(args) => best_move::execute(args),
        Commands::Play(args) => play::execute(args),
        Commands::Verify(args) => verify::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Nim(args) => nim::execute(args),
    }
}
