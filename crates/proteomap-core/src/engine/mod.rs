//! # Engine Module
//!
//! Stateful building blocks of the analysis pipeline. Everything in [`crate::core`] is a
//! pure function of its inputs; the engine owns what changes over a run.
//!
//! - **Configuration** ([`config`]) - Input/output locations, figure rendering and the
//!   enrichment floor, assembled through a validating builder
//! - **Aggregation** ([`aggregator`]) - Single-pass accumulation of residue counts per
//!   category and proteome-wide
//! - **State** ([`state`]) - The finished [`state::AnalysisReport`] with every
//!   intermediate table kept for inspection
//! - **Progress Monitoring** ([`progress`]) - Phase and per-record progress events
//! - **Error Handling** ([`error`]) - The pipeline-level error type

pub mod aggregator;
pub mod config;
pub mod error;
pub mod progress;
pub mod state;
