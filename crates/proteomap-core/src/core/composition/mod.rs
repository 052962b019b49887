//! Amino-acid composition statistics.
//!
//! Raw residue counts ([`counts`]) are normalized into frequency tables ([`frequency`]),
//! compared against the proteome-wide baseline as enrichment ratios ([`enrichment`]),
//! and assembled into symbol-by-category matrices ([`table`]) for export and projection.

pub mod counts;
pub mod enrichment;
pub mod frequency;
pub mod table;

use std::collections::BTreeMap;

/// Read access shared by the per-symbol float tables.
pub trait SymbolTable {
    fn entries(&self) -> &BTreeMap<char, f64>;

    /// Value for `symbol`, or `0.0` when the symbol is absent.
    fn value(&self, symbol: char) -> f64 {
        self.entries().get(&symbol).copied().unwrap_or(0.0)
    }

    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries().keys().copied()
    }
}
