use crate::core::io::traits::ReportSink;
use crate::engine::error::EngineError;
use crate::engine::progress::{Phase, ProgressReporter};
use crate::engine::state::AnalysisReport;
use tracing::{info, instrument};

fn output_error<E>(artifact: &'static str) -> impl FnOnce(E) -> EngineError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |e| EngineError::Output {
        artifact,
        source: Box::new(e),
    }
}

/// Writes the tables of `report`, then its figures when `render_figures` is set.
#[instrument(skip_all, name = "export_workflow")]
pub fn write_report<S: ReportSink>(
    report: &AnalysisReport,
    sink: &mut S,
    render_figures: bool,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    reporter.phase(Phase::Writing, || -> Result<(), EngineError> {
        sink.write_frequencies(&report.frequency_table)
            .map_err(output_error("frequency table"))?;
        sink.write_enrichment(&report.enrichment_table)
            .map_err(output_error("enrichment table"))?;
        sink.write_properties(&report.proteins)
            .map_err(output_error("protein properties"))?;
        info!("Tables written.");

        if render_figures {
            sink.render_enrichment_heatmap(&report.enrichment_table)
                .map_err(output_error("enrichment heatmap"))?;
            sink.render_property_map(&report.proteins)
                .map_err(output_error("proteome map"))?;
            sink.render_projection(&report.projection)
                .map_err(output_error("projection plot"))?;
            info!("Figures rendered.");
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composition::table::CategoryTable;
    use crate::core::io::proteome::ProteomeDocument;
    use crate::core::models::protein::ComputedProtein;
    use crate::core::projection::Projection;
    use crate::engine::config::AnalysisConfigBuilder;
    use crate::workflows::analyze;
    use std::fmt;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "refused")
        }
    }

    impl std::error::Error for Refused {}

    /// Records which artifacts were requested; fails on the one named in `fail_on`.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<&'static str>,
        fail_on: Option<&'static str>,
    }

    impl RecordingSink {
        fn record(&mut self, name: &'static str) -> Result<(), Refused> {
            if self.fail_on == Some(name) {
                return Err(Refused);
            }
            self.calls.push(name);
            Ok(())
        }
    }

    impl ReportSink for RecordingSink {
        type Error = Refused;

        fn write_frequencies(&mut self, _: &CategoryTable) -> Result<(), Refused> {
            self.record("frequencies")
        }
        fn write_enrichment(&mut self, _: &CategoryTable) -> Result<(), Refused> {
            self.record("enrichment")
        }
        fn write_properties(&mut self, _: &[ComputedProtein]) -> Result<(), Refused> {
            self.record("properties")
        }
        fn render_enrichment_heatmap(&mut self, _: &CategoryTable) -> Result<(), Refused> {
            self.record("heatmap")
        }
        fn render_property_map(&mut self, _: &[ComputedProtein]) -> Result<(), Refused> {
            self.record("property_map")
        }
        fn render_projection(&mut self, _: &Projection) -> Result<(), Refused> {
            self.record("projection")
        }
    }

    fn report() -> AnalysisReport {
        let config = AnalysisConfigBuilder::new()
            .input_path(PathBuf::from("unused.json"))
            .output_directory(PathBuf::from("unused"))
            .build()
            .unwrap();
        analyze::run(
            &ProteomeDocument::default(),
            &config,
            &ProgressReporter::new(),
        )
        .unwrap()
    }

    #[test]
    fn tables_then_figures_are_written() {
        let mut sink = RecordingSink::default();
        write_report(&report(), &mut sink, true, &ProgressReporter::new()).unwrap();
        assert_eq!(
            sink.calls,
            vec![
                "frequencies",
                "enrichment",
                "properties",
                "heatmap",
                "property_map",
                "projection"
            ]
        );
    }

    #[test]
    fn figures_can_be_disabled() {
        let mut sink = RecordingSink::default();
        write_report(&report(), &mut sink, false, &ProgressReporter::new()).unwrap();
        assert_eq!(sink.calls, vec!["frequencies", "enrichment", "properties"]);
    }

    #[test]
    fn sink_failure_names_the_artifact_and_stops() {
        let mut sink = RecordingSink {
            fail_on: Some("enrichment"),
            ..Default::default()
        };
        let err = write_report(&report(), &mut sink, true, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Output {
                artifact: "enrichment table",
                ..
            }
        ));
        assert_eq!(sink.calls, vec!["frequencies"]);
        assert_eq!(err.to_string(), "Failed to write enrichment table: refused");
    }
}
