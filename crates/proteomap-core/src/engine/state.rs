use super::aggregator::CompositionProfile;
use crate::core::composition::enrichment::EnrichmentTable;
use crate::core::composition::frequency::FrequencyTable;
use crate::core::composition::table::CategoryTable;
use crate::core::models::category::Category;
use crate::core::models::protein::ComputedProtein;
use crate::core::projection::Projection;
use std::collections::BTreeMap;

/// Entries dropped before aggregation, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkippedEntries {
    /// Missing name or missing sequence.
    pub malformed: usize,
    /// Sequence contains a symbol outside the standard residues.
    pub unsupported_residue: usize,
}

impl SkippedEntries {
    pub fn total(&self) -> usize {
        self.malformed + self.unsupported_residue
    }
}

/// Everything one analysis run derives from its input.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub total_entries: usize,
    pub skipped: SkippedEntries,
    /// Analysed proteins in input order.
    pub proteins: Vec<ComputedProtein>,
    pub composition: CompositionProfile,
    pub proteome_frequencies: FrequencyTable,
    pub category_frequencies: BTreeMap<Category, FrequencyTable>,
    pub category_enrichment: BTreeMap<Category, EnrichmentTable>,
    /// Frequencies assembled into a symbol-by-category matrix.
    pub frequency_table: CategoryTable,
    /// Enrichment ratios assembled into a symbol-by-category matrix.
    pub enrichment_table: CategoryTable,
    pub projection: Projection,
}

impl AnalysisReport {
    /// Category of each analysed protein, in input order.
    pub fn categories(&self) -> Vec<Category> {
        self.proteins.iter().map(|p| p.category).collect()
    }

    pub fn frequencies(&self, category: Category) -> Option<&FrequencyTable> {
        self.category_frequencies.get(&category)
    }

    pub fn enrichment(&self, category: Category) -> Option<&EnrichmentTable> {
        self.category_enrichment.get(&category)
    }
}
