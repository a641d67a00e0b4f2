//! Output formatting and progress bars for CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::search::SearchStats;

/// Create a progress bar over a fixed number of states
pub fn create_state_progress(total_states: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_states);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} states ({msg})")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Create a spinner for open-ended work
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("invalid spinner template")?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the counters of a finished search
pub fn print_search_stats(stats: &SearchStats, complete: bool) {
    print_kv("Nodes", &format_number(stats.nodes));
    print_kv("Expansions", &format_number(stats.expansions));
    print_kv("Cutoffs", &format_number(stats.cutoffs));
    print_kv("Max depth", &stats.max_depth.to_string());
    print_kv("Complete", if complete { "yes" } else { "no (node budget spent)" });
}
