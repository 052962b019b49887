use crate::core::chemistry::properties::ProteinProperties;
use crate::core::composition::enrichment::EnrichmentTable;
use crate::core::composition::frequency::{FrequencyTable, normalize};
use crate::core::composition::table::CategoryTable;
use crate::core::io::proteome::ProteomeDocument;
use crate::core::models::category::Category;
use crate::core::models::protein::ComputedProtein;
use crate::core::models::record::ProteinRecord;
use crate::core::projection::Projection;
use crate::engine::aggregator::{CompositionAggregator, CompositionProfile};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Phase, Progress, ProgressReporter};
use crate::engine::state::{AnalysisReport, SkippedEntries};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Reads the proteome document named by `config.input_path`.
pub fn load(
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<ProteomeDocument, EngineError> {
    reporter.phase(Phase::Loading, || -> Result<ProteomeDocument, EngineError> {
        info!("Loading proteome from {:?}.", &config.input_path);
        let document = ProteomeDocument::read_from_path(&config.input_path).map_err(|e| {
            EngineError::Input {
                path: config.input_path.display().to_string(),
                source: e,
            }
        })?;
        info!(entries = document.len(), "Proteome loaded.");
        Ok(document)
    })
}

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    document: &ProteomeDocument,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisReport, EngineError> {
    // === Phase 1: Extract, categorize and compute properties per entry ===
    let profiled = reporter.phase(Phase::Profiling, || profile_entries(document, reporter));
    info!(
        proteins = profiled.proteins.len(),
        malformed = profiled.skipped.malformed,
        unsupported_residue = profiled.skipped.unsupported_residue,
        "Profiled {} entries.",
        document.len()
    );

    // === Phase 2: Aggregate residue counts, normalize and compute enrichment ===
    let composition = reporter.phase(Phase::Aggregating, || {
        let mut aggregator = CompositionAggregator::new();
        for (protein, sequence) in profiled.proteins.iter().zip(&profiled.sequences) {
            aggregator.add(protein.category, sequence);
        }
        aggregator.finish()
    });
    let tables = derive_tables(&composition, config.enrichment_floor);
    for category in Category::ALL {
        if composition.members(category) == 0 {
            info!("Category '{}' has no members; its tables are empty.", category);
        }
    }

    // === Phase 3: Project category frequency vectors ===
    let projection = reporter.phase(Phase::Projecting, || {
        Projection::from_frequency_table(&tables.frequency_table)
    })?;
    info!(
        pc1 = projection.explained_variance_ratio[0],
        pc2 = projection.explained_variance_ratio[1],
        "Projection complete."
    );

    Ok(AnalysisReport {
        total_entries: document.len(),
        skipped: profiled.skipped,
        proteins: profiled.proteins,
        composition,
        proteome_frequencies: tables.proteome_frequencies,
        category_frequencies: tables.category_frequencies,
        category_enrichment: tables.category_enrichment,
        frequency_table: tables.frequency_table,
        enrichment_table: tables.enrichment_table,
        projection,
    })
}

struct ProfiledEntries {
    proteins: Vec<ComputedProtein>,
    sequences: Vec<String>,
    skipped: SkippedEntries,
}

fn profile_entries(document: &ProteomeDocument, reporter: &ProgressReporter) -> ProfiledEntries {
    let mut profiled = ProfiledEntries {
        proteins: Vec::with_capacity(document.len()),
        sequences: Vec::with_capacity(document.len()),
        skipped: SkippedEntries::default(),
    };

    reporter.report(Progress::EntriesStart {
        total: document.len() as u64,
    });
    for (index, entry) in document.entries().iter().enumerate() {
        reporter.report(Progress::EntryProcessed);

        let record = match ProteinRecord::from_entry(entry) {
            Ok(record) => record,
            Err(reason) => {
                debug!(index, "Skipping entry: {}", reason);
                profiled.skipped.malformed += 1;
                continue;
            }
        };

        let category = Category::from_display_name(&record.display_name);
        match ProteinProperties::compute(&record.sequence) {
            Ok(properties) => {
                profiled
                    .proteins
                    .push(ComputedProtein::new(&record.display_name, category, properties));
                profiled.sequences.push(record.sequence);
            }
            Err(e) => {
                warn!(index, name = %record.display_name, "Skipping protein: {}", e);
                profiled.skipped.unsupported_residue += 1;
            }
        }
    }
    reporter.report(Progress::EntriesFinish);
    profiled
}

struct DerivedTables {
    proteome_frequencies: FrequencyTable,
    category_frequencies: BTreeMap<Category, FrequencyTable>,
    category_enrichment: BTreeMap<Category, EnrichmentTable>,
    frequency_table: CategoryTable,
    enrichment_table: CategoryTable,
}

fn derive_tables(composition: &CompositionProfile, floor: f64) -> DerivedTables {
    let proteome_frequencies = normalize(composition.proteome());
    let category_frequencies: BTreeMap<Category, FrequencyTable> = composition
        .categories()
        .map(|(category, counts)| (category, normalize(counts)))
        .collect();
    let category_enrichment: BTreeMap<Category, EnrichmentTable> = category_frequencies
        .iter()
        .map(|(&category, freq)| {
            (
                category,
                EnrichmentTable::compute(freq, &proteome_frequencies, floor),
            )
        })
        .collect();

    DerivedTables {
        frequency_table: CategoryTable::assemble(&category_frequencies),
        enrichment_table: CategoryTable::assemble(&category_enrichment),
        proteome_frequencies,
        category_frequencies,
        category_enrichment,
    }
}
