use serde_json::Value;
use thiserror::Error;

const NAME_POINTER: &str = "/proteinDescription/recommendedName/fullName/value";
const SEQUENCE_POINTER: &str = "/sequence/value";

/// The two fields of a proteome entry that the analysis consumes.
///
/// Records are validated once, at extraction: the name and sequence are both present
/// JSON strings. The sequence is upper-cased and stripped of whitespace but its symbols
/// are not checked against any alphabet here. An empty sequence is a valid record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    pub display_name: String,
    pub sequence: String,
}

/// Reason an entry was dropped before analysis.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("entry has no recommended full name")]
    MissingName,
    #[error("entry has no sequence value")]
    MissingSequence,
}

impl ProteinRecord {
    pub fn new(display_name: impl Into<String>, sequence: &str) -> Self {
        Self {
            display_name: display_name.into(),
            sequence: normalize_sequence(sequence),
        }
    }

    /// Extracts a record from a UniProt-style JSON entry.
    pub fn from_entry(entry: &Value) -> Result<Self, MalformedRecord> {
        let display_name = entry
            .pointer(NAME_POINTER)
            .and_then(Value::as_str)
            .ok_or(MalformedRecord::MissingName)?;
        let raw_sequence = entry
            .pointer(SEQUENCE_POINTER)
            .and_then(Value::as_str)
            .ok_or(MalformedRecord::MissingSequence)?;

        Ok(Self::new(display_name, raw_sequence))
    }
}

fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
