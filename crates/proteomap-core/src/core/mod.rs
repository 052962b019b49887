//! # Core Module
//!
//! Stateless building blocks of the proteome analysis.
//!
//! - **Models** ([`models`]) - Categories, validated protein records and computed proteins
//! - **Chemistry** ([`chemistry`]) - Residue tables, molecular weight and isoelectric point
//! - **Composition** ([`composition`]) - Residue counts, frequency tables and enrichment ratios
//! - **Projection** ([`projection`]) - Principal-component projection of composition vectors
//! - **File I/O** ([`io`]) - Proteome JSON input, CSV tables, SVG figures and report sinks

pub mod chemistry;
pub mod composition;
pub mod io;
pub mod models;
pub mod projection;
