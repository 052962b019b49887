use super::SymbolTable;
use crate::core::models::category::Category;
use nalgebra::DMatrix;
use std::collections::{BTreeMap, BTreeSet};

/// Symbol-by-category matrix assembled from per-category symbol tables.
///
/// Rows are the sorted union of symbols across all columns, columns follow
/// [`Category::ALL`]. A symbol missing from a category reads as `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    symbols: Vec<char>,
    categories: Vec<Category>,
    values: DMatrix<f64>,
}

impl CategoryTable {
    pub fn assemble<T: SymbolTable>(columns: &BTreeMap<Category, T>) -> Self {
        let symbols: Vec<char> = columns
            .values()
            .flat_map(|table| table.symbols())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let categories = Category::ALL.to_vec();

        let values = DMatrix::from_fn(symbols.len(), categories.len(), |row, col| {
            columns
                .get(&categories[col])
                .map_or(0.0, |table| table.value(symbols[row]))
        });

        Self {
            symbols,
            categories,
            values,
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Rows are symbols, columns are categories.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    pub fn get(&self, symbol: char, category: Category) -> Option<f64> {
        let row = self.symbols.iter().position(|&s| s == symbol)?;
        let col = self.categories.iter().position(|&c| c == category)?;
        Some(self.values[(row, col)])
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        Some((self.values.min(), self.values.max()))
    }

    /// Iterates `(symbol, row values in category order)`.
    pub fn rows(&self) -> impl Iterator<Item = (char, Vec<f64>)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| (symbol, self.values.row(i).iter().copied().collect()))
    }
}
