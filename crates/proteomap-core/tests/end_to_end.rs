use proteomap::core::composition::SymbolTable;
use proteomap::core::io::directory::{
    ENRICHMENT_HEATMAP_FILE, ENRICHMENT_TABLE_FILE, FREQUENCY_TABLE_FILE, PROJECTION_FILE,
    PROPERTIES_TABLE_FILE, PROPERTY_MAP_FILE,
};
use proteomap::core::io::proteome::ProteomeDocument;
use proteomap::core::models::category::Category;
use proteomap::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use proteomap::engine::error::EngineError;
use proteomap::engine::progress::ProgressReporter;
use proteomap::engine::state::AnalysisReport;
use proteomap::workflows::{analyze, pipeline};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

fn entry(name: &str, sequence: &str) -> Value {
    json!({
        "primaryAccession": "P00000",
        "proteinDescription": { "recommendedName": { "fullName": { "value": name } } },
        "sequence": { "value": sequence, "length": sequence.len() }
    })
}

fn config(input: &Path, output: &Path) -> AnalysisConfig {
    AnalysisConfigBuilder::new()
        .input_path(input.to_path_buf())
        .output_directory(output.to_path_buf())
        .build()
        .unwrap()
}

fn analyse(entries: Vec<Value>) -> AnalysisReport {
    let document = ProteomeDocument::from_entries(entries);
    let config = config(Path::new("unused.json"), Path::new("unused"));
    analyze::run(&document, &config, &ProgressReporter::new()).unwrap()
}

fn three_protein_scenario() -> Vec<Value> {
    vec![
        entry("Envelope glycoprotein", "MKV"),
        entry("Capsid protein", "MKV"),
        entry("Unknown protein X", "AAV"),
    ]
}

#[test]
fn three_protein_scenario_produces_expected_statistics() {
    let report = analyse(three_protein_scenario());

    assert_eq!(
        report.categories(),
        vec![Category::Envelope, Category::Capsid, Category::Other]
    );

    let proteome = report.composition.proteome();
    assert_eq!(proteome.get('M'), 2);
    assert_eq!(proteome.get('K'), 2);
    assert_eq!(proteome.get('V'), 3);
    assert_eq!(proteome.get('A'), 2);

    let other = report.frequencies(Category::Other).unwrap();
    assert!((other.value('A') - 2.0 / 3.0).abs() < 1e-12);
    assert!((other.value('V') - 1.0 / 3.0).abs() < 1e-12);
    assert!((other.sum() - 1.0).abs() < 1e-9);

    let enrichment = report.enrichment(Category::Other).unwrap();
    assert!(enrichment.value('A') > 1.0);
    assert!((enrichment.value('V') - 1.0).abs() < 1e-12);

    assert_eq!(report.skipped.total(), 0);
    assert_eq!(report.projection.points.len(), Category::ALL.len());
}

#[test]
fn category_counts_sum_to_proteome_counts() {
    let report = analyse(vec![
        entry("Envelope protein E", "MRVTNPKLIIVLAG"),
        entry("Membrane glycoprotein M", "MSDNGPQNQRNAPRITFGGPSDSTGSNQNGER"),
        entry("Envelope membrane fusion protein", "WYHHDC"),
        entry("Capsid protein VP1", "GGGPPQ"),
        entry("Replicase polyprotein 1ab", "RRNNTSLKAE"),
    ]);
    assert_eq!(report.composition.members(Category::Envelope), 2);
    for (symbol, total) in report.composition.proteome().iter() {
        let summed: u64 = report
            .composition
            .categories()
            .map(|(_, counts)| counts.get(symbol))
            .sum();
        assert_eq!(summed, total, "mismatch for {symbol}");
    }
}

#[test]
fn empty_input_completes_with_zero_filled_tables() {
    let report = analyse(Vec::new());
    assert!(report.proteins.is_empty());
    assert!(report.frequency_table.is_empty());
    assert!(report.enrichment_table.is_empty());
    for category in Category::ALL {
        assert!(report.frequencies(category).unwrap().is_empty());
    }
    for point in &report.projection.points {
        assert_eq!(point.coordinates, [0.0, 0.0]);
    }
}

#[test]
fn single_symbol_protein_gives_unit_frequency() {
    let report = analyse(vec![entry("Hypothetical protein", "GGGGGG")]);
    let other = report.frequencies(Category::Other).unwrap();
    assert_eq!(other.entries().len(), 1);
    assert_eq!(other.value('G'), 1.0);
}

#[test]
fn pipeline_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("proteome.json");
    fs::write(
        &input,
        json!({ "results": three_protein_scenario() }).to_string(),
    )
    .unwrap();
    let output = dir.path().join("results");

    let outcome = pipeline::execute(&config(&input, &output), &ProgressReporter::new()).unwrap();
    assert_eq!(outcome.written.len(), 6);
    for name in [
        FREQUENCY_TABLE_FILE,
        ENRICHMENT_TABLE_FILE,
        PROPERTIES_TABLE_FILE,
        ENRICHMENT_HEATMAP_FILE,
        PROPERTY_MAP_FILE,
        PROJECTION_FILE,
    ] {
        assert!(output.join(name).is_file(), "{name} missing");
    }

    let frequencies = fs::read_to_string(output.join(FREQUENCY_TABLE_FILE)).unwrap();
    let mut lines = frequencies.lines();
    assert_eq!(lines.next(), Some("amino_acid,envelope,membrane,capsid,other"));
    assert_eq!(frequencies.lines().count(), 1 + 4);

    let properties = fs::read_to_string(output.join(PROPERTIES_TABLE_FILE)).unwrap();
    assert!(properties.contains("Unknown protein X,other,3,"));
}

#[test]
fn pipeline_without_figures_writes_only_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("proteome.json");
    fs::write(&input, r#"{"results": []}"#).unwrap();
    let output = dir.path().join("results");

    let config = AnalysisConfigBuilder::new()
        .input_path(input)
        .output_directory(output.clone())
        .render_figures(false)
        .build()
        .unwrap();
    let outcome = pipeline::execute(&config, &ProgressReporter::new()).unwrap();
    assert_eq!(outcome.written.len(), 3);
    assert!(!output.join(PROJECTION_FILE).exists());
}

#[test]
fn document_without_results_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("proteome.json");
    fs::write(&input, r#"{"entries": []}"#).unwrap();

    let result = pipeline::execute(
        &config(&input, &dir.path().join("results")),
        &ProgressReporter::new(),
    );
    assert!(matches!(result, Err(EngineError::Input { .. })));
    assert!(!dir.path().join("results").exists());
}
