//! Sequence-level physicochemical properties.
//!
//! - [`residues`] - Static residue mass and pKa tables for the 20 standard amino acids
//! - [`properties`] - Length, molecular weight and isoelectric point of a sequence

pub mod properties;
pub mod residues;
