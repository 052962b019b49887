use crate::core::composition::table::CategoryTable;
use crate::core::models::protein::ComputedProtein;
use crate::core::projection::Projection;
use std::error::Error;

/// Destination for the finished analysis.
///
/// Tables are always written; figures only when rendering is enabled. Implementors
/// decide the concrete format and location, and must not leave a partially written
/// table behind when a write fails.
pub trait ReportSink {
    /// The error type for sink operations.
    type Error: Error + Send + Sync + 'static;

    /// Writes the amino-acid frequency table (symbols by categories).
    fn write_frequencies(&mut self, table: &CategoryTable) -> Result<(), Self::Error>;

    /// Writes the enrichment-ratio table (symbols by categories).
    fn write_enrichment(&mut self, table: &CategoryTable) -> Result<(), Self::Error>;

    /// Writes the per-protein property listing.
    fn write_properties(&mut self, proteins: &[ComputedProtein]) -> Result<(), Self::Error>;

    /// Renders the enrichment table as a heatmap centered at 1.0.
    fn render_enrichment_heatmap(&mut self, table: &CategoryTable) -> Result<(), Self::Error>;

    /// Renders molecular weight against isoelectric point, one series per category.
    fn render_property_map(&mut self, proteins: &[ComputedProtein]) -> Result<(), Self::Error>;

    /// Renders the two-dimensional projection of category composition vectors.
    fn render_projection(&mut self, projection: &Projection) -> Result<(), Self::Error>;
}
