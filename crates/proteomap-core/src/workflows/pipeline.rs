use super::{analyze, export};
use crate::core::io::directory::DirectorySink;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::state::AnalysisReport;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    /// Files written to the output directory, in write order.
    pub written: Vec<PathBuf>,
}

/// Loads the configured input, analyses it and writes every artifact to the
/// configured output directory.
pub fn execute(
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisOutcome, EngineError> {
    let document = analyze::load(config, reporter)?;
    let report = analyze::run(&document, config, reporter)?;

    let mut sink =
        DirectorySink::create(&config.output.directory).map_err(|e| EngineError::Output {
            artifact: "output directory",
            source: Box::new(e),
        })?;
    export::write_report(&report, &mut sink, config.output.render_figures, reporter)?;
    info!(
        "Wrote {} file(s) to {:?}.",
        sink.written().len(),
        sink.directory()
    );

    Ok(AnalysisOutcome {
        report,
        written: sink.written().to_vec(),
    })
}
