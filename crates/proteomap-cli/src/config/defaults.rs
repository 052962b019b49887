use proteomap::core::composition::enrichment::DEFAULT_ENRICHMENT_FLOOR;

/// Values used when neither the command line, `--set` nor the config file provides one.
pub struct DefaultsConfig {
    pub input_path: &'static str,
    pub output_directory: &'static str,
    pub render_figures: bool,
    pub enrichment_floor: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_path: "proteome.json",
            output_directory: "results",
            render_figures: true,
            enrichment_floor: DEFAULT_ENRICHMENT_FLOOR,
        }
    }
}
