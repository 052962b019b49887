use crate::cli::AnalyzeArgs;
use crate::config::PartialAnalysisConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use proteomap::core::models::category::Category;
use proteomap::engine::progress::ProgressReporter;
use proteomap::engine::state::AnalysisReport;
use proteomap::workflows::pipeline;
use std::fmt::{self, Write};
use tracing::{info, warn};

pub fn run(args: AnalyzeArgs, show_progress: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialAnalysisConfig::from_file(path)?,
        None => PartialAnalysisConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Analyzing proteome {}...", config.input_path.display());
    let outcome = pipeline::execute(&config, &reporter)?;

    if outcome.report.proteins.is_empty() {
        warn!("No protein in the input could be analysed.");
    }
    let text = summary(&outcome.report)
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to format summary: {}", e)))?;
    print!("{}", text);
    println!(
        "✓ {} file(s) written to {}",
        outcome.written.len(),
        config.output.directory.display()
    );
    Ok(())
}

/// Human-readable account of what the run loaded, skipped and assigned.
fn summary(report: &AnalysisReport) -> std::result::Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Entries loaded:     {}", report.total_entries)?;
    writeln!(out, "Proteins analysed:  {}", report.proteins.len())?;
    writeln!(
        out,
        "Skipped:            {} malformed, {} with unsupported residues",
        report.skipped.malformed, report.skipped.unsupported_residue
    )?;
    for category in Category::ALL {
        writeln!(
            out,
            "  {:<10} {:>6} protein(s)",
            category.as_str(),
            report.composition.members(category)
        )?;
    }
    Ok(out)
}
