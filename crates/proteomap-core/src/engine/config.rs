use crate::core::composition::enrichment::DEFAULT_ENRICHMENT_FLOOR;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub render_figures: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub output: OutputConfig,
    /// Lower bound on the proteome-wide frequency used as an enrichment denominator.
    pub enrichment_floor: f64,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    input_path: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    render_figures: Option<bool>,
    enrichment_floor: Option<f64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }
    pub fn output_directory(mut self, path: PathBuf) -> Self {
        self.output_directory = Some(path);
        self
    }
    pub fn render_figures(mut self, enabled: bool) -> Self {
        self.render_figures = Some(enabled);
        self
    }
    pub fn enrichment_floor(mut self, floor: f64) -> Self {
        self.enrichment_floor = Some(floor);
        self
    }

    /// Figures are rendered and the floor is [`DEFAULT_ENRICHMENT_FLOOR`] unless set.
    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let enrichment_floor = self.enrichment_floor.unwrap_or(DEFAULT_ENRICHMENT_FLOOR);
        if !enrichment_floor.is_finite() || enrichment_floor <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "enrichment_floor",
                reason: format!("must be a positive finite number, got {enrichment_floor}"),
            });
        }

        Ok(AnalysisConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            output: OutputConfig {
                directory: self
                    .output_directory
                    .ok_or(ConfigError::MissingParameter("output_directory"))?,
                render_figures: self.render_figures.unwrap_or(true),
            },
            enrichment_floor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
            .input_path(PathBuf::from("proteome.json"))
            .output_directory(PathBuf::from("results"))
    }

    #[test]
    fn defaults_apply_to_optional_parameters() {
        let config = complete().build().unwrap();
        assert_eq!(config.input_path, PathBuf::from("proteome.json"));
        assert_eq!(config.output.directory, PathBuf::from("results"));
        assert!(config.output.render_figures);
        assert_eq!(config.enrichment_floor, DEFAULT_ENRICHMENT_FLOOR);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = complete()
            .render_figures(false)
            .enrichment_floor(1e-3)
            .build()
            .unwrap();
        assert!(!config.output.render_figures);
        assert_eq!(config.enrichment_floor, 1e-3);
    }

    #[test]
    fn missing_paths_are_reported_by_name() {
        let result = AnalysisConfigBuilder::new()
            .output_directory(PathBuf::from("results"))
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("input_path")));

        let result = AnalysisConfigBuilder::new()
            .input_path(PathBuf::from("proteome.json"))
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("output_directory")));
    }

    #[test]
    fn non_positive_floor_is_rejected() {
        for floor in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            let result = complete().enrichment_floor(floor).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "enrichment_floor",
                    ..
                })
            ));
        }
    }
}
