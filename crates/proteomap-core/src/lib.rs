//! # Proteomap Core Library
//!
//! Composition and physicochemical profiling of proteome datasets: every protein is
//! assigned to a keyword category, characterised by length, molecular weight and
//! isoelectric point, and its residues are pooled into per-category amino-acid
//! composition tables that are compared against the proteome-wide baseline.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Category`, `ProteinRecord`,
//!   `ComputedProtein`), pure calculations (molecular weight, isoelectric point,
//!   frequency normalization, enrichment, principal-component projection) and I/O
//!   utilities (proteome JSON loading, CSV tables, SVG figures).
//!
//! - **[`engine`]: The Pipeline State.** Configuration, error types, progress reporting,
//!   the composition aggregator that accumulates residue counts in a single pass, and
//!   the [`engine::state::AnalysisReport`] that carries every intermediate table.
//!
//! - **[`workflows`]: The Public API.** End-to-end entry points that run the analysis
//!   over a loaded document and hand the finished report to an output sink.

pub mod core;
pub mod engine;
pub mod workflows;
