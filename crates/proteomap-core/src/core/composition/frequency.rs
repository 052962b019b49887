use super::SymbolTable;
use super::counts::AminoAcidCounts;
use std::collections::BTreeMap;

/// Relative frequency of each symbol within one [`AminoAcidCounts`].
///
/// Values sum to 1.0 for non-empty counts. Empty counts normalize to an empty table,
/// which reads as zero for every symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    frequencies: BTreeMap<char, f64>,
}

impl FrequencyTable {
    pub fn from_counts(counts: &AminoAcidCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let total = total as f64;
        let frequencies = counts
            .iter()
            .map(|(symbol, count)| (symbol, count as f64 / total))
            .collect();
        Self { frequencies }
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.frequencies.values().sum()
    }
}

impl SymbolTable for FrequencyTable {
    fn entries(&self) -> &BTreeMap<char, f64> {
        &self.frequencies
    }
}

impl FromIterator<(char, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self {
            frequencies: iter.into_iter().collect(),
        }
    }
}

pub fn normalize(counts: &AminoAcidCounts) -> FrequencyTable {
    FrequencyTable::from_counts(counts)
}
