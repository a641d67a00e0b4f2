//! Export command - Write the optimal policy to JSON

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    cli::output::{create_spinner, format_number, print_kv},
    search::Engine,
    tictactoe::{BoardState, reachable_states, row_col},
};

#[derive(Parser, Debug)]
#[command(about = "Export the optimal policy for every reachable position")]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Hide the spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Optimal move for one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub position: usize,
    pub row: usize,
    pub col: usize,
    /// Minimax value from X's point of view
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyExport {
    pub description: String,
    pub total_states: usize,
    /// Keyed by [`BoardState::encode`]
    pub policy: BTreeMap<String, PolicyEntry>,
}

impl PolicyExport {
    /// Read an export written by [`export_policy`].
    pub fn load(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        serde_json::from_reader(file).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Optimal move and value for every non-terminal position reachable from the
/// empty board.
pub fn compute_policy(engine: &Engine) -> Result<PolicyExport> {
    let mut policy = BTreeMap::new();

    for state in reachable_states(BoardState::new())? {
        if state.is_terminal() {
            continue;
        }
        let outcome = engine.search(&state)?;
        let (Some(position), Some(value)) = (outcome.action, outcome.value) else {
            continue;
        };
        let (row, col) = row_col(position);
        policy.insert(
            state.encode(),
            PolicyEntry {
                position,
                row,
                col,
                value,
            },
        );
    }

    Ok(PolicyExport {
        description: "Optimal (minimax) policy for Tic-Tac-Toe".to_string(),
        total_states: policy.len(),
        policy,
    })
}

/// Compute the policy with an unbounded engine and write it as pretty JSON.
///
/// Nothing is written unless the whole policy was computed.
pub fn export_policy(path: &Path) -> Result<PolicyExport> {
    let export = compute_policy(&Engine::default())?;
    write_policy(path, &export)?;
    Ok(export)
}

/// Write `export` to `path` as pretty JSON.
pub fn write_policy(path: &Path, export: &PolicyExport) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, export)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let spinner = if args.no_progress {
        None
    } else {
        let pb = create_spinner("Computing optimal policy...")?;
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    };

    let export = export_policy(&args.output)?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    print_kv("Policy entries", &format_number(export.total_states as u64));
    println!("\nOptimal policy exported to: {}", args.output.display());
    Ok(())
}
