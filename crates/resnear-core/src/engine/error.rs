use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::structure::StructureError;

const UNNAMED_STRUCTURE: &str = "<unnamed>";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Invalid structure '{id}': {source}")]
    InvalidStructure {
        id: String,
        #[source]
        source: StructureError,
    },
}

impl EngineError {
    pub(crate) fn structure(id: Option<&str>, source: StructureError) -> Self {
        EngineError::InvalidStructure {
            id: id.unwrap_or(UNNAMED_STRUCTURE).to_string(),
            source,
        }
    }
}
