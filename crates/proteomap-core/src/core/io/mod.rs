//! Input and output of the analysis.
//!
//! Proteome documents are read from JSON ([`proteome`]); results leave the library
//! through the [`traits::ReportSink`] interface. [`directory::DirectorySink`] is the
//! file-system implementation, writing CSV tables ([`tables`]) and SVG figures ([`svg`]).

pub mod directory;
pub mod proteome;
pub mod svg;
pub mod tables;
pub mod traits;
