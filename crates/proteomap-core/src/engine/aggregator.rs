use crate::core::composition::counts::AminoAcidCounts;
use crate::core::models::category::Category;
use std::collections::BTreeMap;

/// Accumulates residue counts per category and proteome-wide in one pass.
///
/// Every category starts with an empty count so that categories without members
/// still appear, as empty tables, in everything derived from the profile.
#[derive(Debug, Clone)]
pub struct CompositionAggregator {
    per_category: BTreeMap<Category, AminoAcidCounts>,
    members: BTreeMap<Category, usize>,
    proteome: AminoAcidCounts,
}

impl Default for CompositionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionAggregator {
    pub fn new() -> Self {
        Self {
            per_category: Category::ALL
                .iter()
                .map(|&c| (c, AminoAcidCounts::new()))
                .collect(),
            members: Category::ALL.iter().map(|&c| (c, 0)).collect(),
            proteome: AminoAcidCounts::new(),
        }
    }

    /// Adds one protein's residues to its category and to the proteome total.
    pub fn add(&mut self, category: Category, sequence: &str) {
        self.per_category
            .entry(category)
            .or_default()
            .add_sequence(sequence);
        *self.members.entry(category).or_default() += 1;
        self.proteome.add_sequence(sequence);
    }

    pub fn finish(self) -> CompositionProfile {
        CompositionProfile {
            per_category: self.per_category,
            members: self.members,
            proteome: self.proteome,
        }
    }
}

/// Frozen residue counts produced by [`CompositionAggregator::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionProfile {
    per_category: BTreeMap<Category, AminoAcidCounts>,
    members: BTreeMap<Category, usize>,
    proteome: AminoAcidCounts,
}

impl CompositionProfile {
    pub fn category(&self, category: Category) -> Option<&AminoAcidCounts> {
        self.per_category.get(&category)
    }

    /// Counts for every category, in category order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &AminoAcidCounts)> + '_ {
        self.per_category.iter().map(|(&c, counts)| (c, counts))
    }

    pub fn proteome(&self) -> &AminoAcidCounts {
        &self.proteome
    }

    /// Number of proteins aggregated into `category`.
    pub fn members(&self, category: Category) -> usize {
        self.members.get(&category).copied().unwrap_or(0)
    }

    pub fn total_members(&self) -> usize {
        self.members.values().sum()
    }
}
