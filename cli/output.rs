use backend_summary_core::SummaryOutcome;
use backend_summary_core::stats::group_thousands;
use colored::*;
use std::path::Path;

pub fn print_completion(outcome: &SummaryOutcome, output_file: &Path) {
    let location = outcome
        .output_path
        .canonicalize()
        .unwrap_or_else(|_| outcome.output_path.clone());

    println!();
    println!("{} {}", "✅".green(), "Backend summary generated!".green().bold());
    println!(
        "{:<14} {}",
        "Location:".green(),
        location.display().to_string().blue()
    );
    println!(
        "{:<14} {}",
        "Files:".green(),
        outcome.stats.total_files.to_string().cyan()
    );
    println!(
        "{:<14} {}",
        "Total lines:".green(),
        group_thousands(outcome.stats.total_lines).cyan()
    );
    if !outcome.collection_errors.is_empty() {
        println!(
            "{}",
            format!(
                "({} unreadable path(s) skipped, the summary is partial)",
                outcome.collection_errors.len()
            )
            .yellow()
        );
    }
    println!("\nSee: {}\n", output_file.display());
}
