use super::CATEGORY_PALETTE;
use super::heatmap::render_heatmap;
use super::scatter::{ScatterPlot, ScatterSeries};
use crate::core::composition::table::CategoryTable;
use crate::core::models::category::Category;
use crate::core::models::protein::ComputedProtein;
use crate::core::projection::Projection;
use std::fmt;

/// Enrichment ratio at which a residue is neither enriched nor depleted.
pub const ENRICHMENT_CENTER: f64 = 1.0;

pub fn enrichment_heatmap(table: &CategoryTable) -> Result<String, fmt::Error> {
    render_heatmap(
        table,
        "Amino Acid Enrichment per Category",
        ENRICHMENT_CENTER,
    )
}

/// Molecular weight against isoelectric point, one series per category.
pub fn property_map(proteins: &[ComputedProtein]) -> ScatterPlot {
    let series = Category::ALL
        .iter()
        .map(|&category| {
            let points = proteins
                .iter()
                .filter(|p| p.category == category)
                .map(|p| (p.isoelectric_point, p.molecular_weight))
                .collect();
            ScatterSeries::new(category.as_str(), CATEGORY_PALETTE[category.index()], points)
        })
        .collect();

    ScatterPlot {
        title: "2D Proteome Map (MW vs pI)".to_string(),
        x_label: "Isoelectric Point (pI)".to_string(),
        y_label: "Molecular Weight (Da)".to_string(),
        series,
        show_legend: true,
    }
}

pub fn projection_plot(projection: &Projection) -> ScatterPlot {
    let series = projection
        .points
        .iter()
        .map(|point| {
            let [x, y] = point.coordinates;
            ScatterSeries::new(
                point.category.as_str(),
                CATEGORY_PALETTE[point.category.index()],
                vec![(x, y)],
            )
            .with_annotations(vec![point.category.to_string()])
        })
        .collect();

    let [pc1, pc2] = projection.explained_variance_ratio;
    ScatterPlot {
        title: "PCA of Amino Acid Frequencies".to_string(),
        x_label: format!("PC1 ({:.1}%)", pc1 * 100.0),
        y_label: format!("PC2 ({:.1}%)", pc2 * 100.0),
        series,
        show_legend: true,
    }
}
