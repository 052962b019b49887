use super::SymbolTable;
use super::frequency::FrequencyTable;
use std::collections::BTreeMap;

/// Floor applied to the proteome-wide frequency before dividing.
pub const DEFAULT_ENRICHMENT_FLOOR: f64 = 1e-6;

/// Category frequency divided by proteome-wide frequency, per symbol.
///
/// 1.0 means the residue occurs at the proteome-average rate; above 1.0 it is
/// enriched in the category, below 1.0 depleted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentTable {
    ratios: BTreeMap<char, f64>,
}

impl EnrichmentTable {
    /// Ratios for every symbol present in `category`. The proteome frequency is clamped
    /// to at least `floor` so a symbol missing from the baseline cannot divide by zero.
    pub fn compute(category: &FrequencyTable, proteome: &FrequencyTable, floor: f64) -> Self {
        let ratios = category
            .entries()
            .iter()
            .map(|(&symbol, &freq)| (symbol, freq / proteome.value(symbol).max(floor)))
            .collect();
        Self { ratios }
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

impl SymbolTable for EnrichmentTable {
    fn entries(&self) -> &BTreeMap<char, f64> {
        &self.ratios
    }
}

pub fn enrichment(category: &FrequencyTable, proteome: &FrequencyTable) -> EnrichmentTable {
    EnrichmentTable::compute(category, proteome, DEFAULT_ENRICHMENT_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composition::counts::AminoAcidCounts;
    use crate::core::composition::frequency::normalize;

    fn freq(sequences: &[&str]) -> FrequencyTable {
        let counts: AminoAcidCounts = sequences.iter().copied().collect();
        normalize(&counts)
    }

    #[test]
    fn identical_tables_give_unit_enrichment() {
        let table = freq(&["MKVLAAGIICLLLAASSTEA", "WYHHD"]);
        let ratios = enrichment(&table, &table);
        assert_eq!(ratios.entries().len(), table.entries().len());
        for (_, ratio) in ratios.entries() {
            assert!((ratio - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn residue_unique_to_a_category_is_enriched() {
        let proteome = freq(&["MKV", "MKV", "AAV"]);
        let other = freq(&["AAV"]);
        let ratios = enrichment(&other, &proteome);
        assert!((ratios.value('A') - 3.0).abs() < 1e-12);
        // V is a third of both tables
        assert!((ratios.value('V') - 1.0).abs() < 1e-12);
        assert_eq!(ratios.value('M'), 0.0);
    }

    #[test]
    fn floor_guards_symbols_missing_from_the_baseline() {
        let proteome = freq(&["AAAA"]);
        let category = freq(&["AK"]);
        let ratios = EnrichmentTable::compute(&category, &proteome, 1e-3);
        assert!((ratios.value('K') - 0.5 / 1e-3).abs() < 1e-9);
        assert!(ratios.value('K').is_finite());
    }

    #[test]
    fn empty_category_yields_empty_enrichment() {
        let proteome = freq(&["MKV"]);
        let ratios = enrichment(&FrequencyTable::default(), &proteome);
        assert!(ratios.is_empty());
        assert_eq!(ratios.value('M'), 0.0);
    }
}
