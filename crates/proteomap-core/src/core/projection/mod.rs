//! Two-dimensional projection of per-category composition vectors.
//!
//! [`pca`] holds the general principal-component routine over a samples-by-features
//! matrix; [`Projection`] applies it to a frequency [`CategoryTable`] with one sample
//! per category.

pub mod pca;

use crate::core::composition::table::CategoryTable;
use crate::core::models::category::Category;
use pca::{PcaError, principal_components};

pub const PROJECTION_COMPONENTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub category: Category,
    pub coordinates: [f64; PROJECTION_COMPONENTS],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub points: Vec<ProjectedPoint>,
    pub explained_variance_ratio: [f64; PROJECTION_COMPONENTS],
}

impl Projection {
    /// Projects each category's frequency vector onto the top two principal components.
    pub fn from_frequency_table(table: &CategoryTable) -> Result<Self, PcaError> {
        let samples = table.values().transpose();
        let result = principal_components(&samples, PROJECTION_COMPONENTS)?;

        let points = table
            .categories()
            .iter()
            .enumerate()
            .map(|(i, &category)| ProjectedPoint {
                category,
                coordinates: [result.scores[(i, 0)], result.scores[(i, 1)]],
            })
            .collect();

        Ok(Self {
            points,
            explained_variance_ratio: [
                result.explained_variance_ratio[0],
                result.explained_variance_ratio[1],
            ],
        })
    }

    pub fn point(&self, category: Category) -> Option<&ProjectedPoint> {
        self.points.iter().find(|p| p.category == category)
    }
}
