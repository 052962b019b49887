use super::category::Category;
use crate::core::chemistry::properties::ProteinProperties;

/// A protein that passed extraction and property calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedProtein {
    pub display_name: String,
    pub category: Category,
    pub length: usize,
    pub molecular_weight: f64,  // Daltons
    pub isoelectric_point: f64, // pH units, within [0, 14]
}

impl ComputedProtein {
    pub fn new(display_name: &str, category: Category, properties: ProteinProperties) -> Self {
        Self {
            display_name: display_name.to_string(),
            category,
            length: properties.length,
            molecular_weight: properties.molecular_weight,
            isoelectric_point: properties.isoelectric_point,
        }
    }
}
