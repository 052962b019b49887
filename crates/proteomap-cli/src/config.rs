mod defaults;

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use proteomap::engine::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialInputConfig {
    path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    directory: Option<PathBuf>,
    #[serde(rename = "render-figures")]
    render_figures: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialAnalysisSection {
    #[serde(rename = "enrichment-floor")]
    enrichment_floor: Option<f64>,
}

/// Configuration as read from a TOML file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    input: Option<PartialInputConfig>,
    output: Option<PartialOutputConfig>,
    analysis: Option<PartialAnalysisSection>,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves the final configuration. Command-line flags win over `--set` values,
    /// which win over the file, which wins over [`DefaultsConfig`].
    pub fn merge_with_cli(mut self, args: &AnalyzeArgs) -> Result<core_config::AnalysisConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let input = self.input.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();
        let analysis = self.analysis.take().unwrap_or_default();

        let input_path = args
            .input
            .clone()
            .or(input.path)
            .unwrap_or_else(|| PathBuf::from(defaults.input_path));
        let output_directory = args
            .output
            .clone()
            .or(output.directory)
            .unwrap_or_else(|| PathBuf::from(defaults.output_directory));
        let render_figures = if args.no_figures {
            false
        } else {
            output.render_figures.unwrap_or(defaults.render_figures)
        };
        let enrichment_floor = args
            .enrichment_floor
            .or(analysis.enrichment_floor)
            .unwrap_or(defaults.enrichment_floor);

        core_config::AnalysisConfigBuilder::new()
            .input_path(input_path)
            .output_directory(output_directory)
            .render_figures(render_figures)
            .enrichment_floor(enrichment_floor)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "input.path" => {
                    self.input.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value_str));
                }
                "output.directory" => {
                    self.output.get_or_insert_with(Default::default).directory =
                        Some(PathBuf::from(value_str));
                }
                "output.render-figures" => {
                    self.output
                        .get_or_insert_with(Default::default)
                        .render_figures = Some(parse_value(key, value_str, "boolean")?);
                }
                "analysis.enrichment-floor" => {
                    self.analysis
                        .get_or_insert_with(Default::default)
                        .enrichment_floor = Some(parse_value(key, value_str, "float")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            kind, key, value_str
        ))
    })
}
