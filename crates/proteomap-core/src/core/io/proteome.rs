use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProteomeFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A proteome export: a top-level `results` array of loosely structured entries.
///
/// Entries are kept as raw JSON; only [`crate::core::models::record::ProteinRecord`]
/// extraction looks inside them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProteomeDocument {
    results: Vec<Value>,
}

impl ProteomeDocument {
    pub fn from_entries(entries: Vec<Value>) -> Self {
        Self { results: entries }
    }

    pub fn read_from(reader: impl Read) -> Result<Self, ProteomeFileError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProteomeFileError> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    pub fn from_json_str(content: &str) -> Result<Self, ProteomeFileError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn entries(&self) -> &[Value] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
