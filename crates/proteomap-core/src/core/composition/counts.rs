use std::collections::BTreeMap;

/// Occurrence counts per amino-acid symbol. Symbols are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AminoAcidCounts {
    counts: BTreeMap<char, u64>,
}

impl AminoAcidCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sequence(&mut self, sequence: &str) {
        for symbol in sequence.chars() {
            *self.counts.entry(symbol).or_insert(0) += 1;
        }
    }

    pub fn get(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl<'a> FromIterator<&'a str> for AminoAcidCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = Self::new();
        for sequence in iter {
            counts.add_sequence(sequence);
        }
        counts
    }
}
