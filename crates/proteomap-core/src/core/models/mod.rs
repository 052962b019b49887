//! Data models shared by every stage of the analysis.
//!
//! - [`category`] - The fixed, ordered protein categories and the keyword rules that assign them
//! - [`record`] - Narrow input records extracted from loosely structured proteome entries
//! - [`protein`] - Per-protein derived properties

pub mod category;
pub mod protein;
pub mod record;
