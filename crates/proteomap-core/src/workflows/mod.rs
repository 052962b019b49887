//! # Workflows Module
//!
//! Top-level entry points of the library.
//!
//! - **Analysis** ([`analyze`]) - Loads a proteome document and runs extraction,
//!   categorization, property calculation, aggregation, enrichment and projection over
//!   it, producing an [`AnalysisReport`](crate::engine::state::AnalysisReport).
//! - **Export** ([`export`]) - Hands a finished report to any
//!   [`ReportSink`](crate::core::io::traits::ReportSink).
//! - **Pipeline** ([`pipeline`]) - Load, analyse and write to an output directory in one
//!   call, driven entirely by an [`AnalysisConfig`](crate::engine::config::AnalysisConfig).
//!
//! [`analyze::run`] never touches the file system, so it can be driven by in-memory
//! documents in tests.

pub mod analyze;
pub mod export;
pub mod pipeline;
