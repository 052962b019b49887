use thiserror::Error;

use crate::core::io::proteome::ProteomeFileError;
use crate::core::projection::pca::PcaError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to load proteome from '{path}': {source}")]
    Input {
        path: String,
        source: ProteomeFileError,
    },

    #[error("Projection of category frequencies failed: {source}")]
    Projection {
        #[from]
        source: PcaError,
    },

    #[error("Failed to write {artifact}: {source}")]
    Output {
        artifact: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
