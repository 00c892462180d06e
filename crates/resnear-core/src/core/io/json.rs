use super::traits::StructureFile;
use crate::core::models::structure::Structure;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid structure JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structures stored as a JSON object of flat arrays:
///
/// ```json
/// {
///   "structure_id": "1ABC",
///   "x_coords": [0.0, 2.0],
///   "y_coords": [0.0, 0.0],
///   "z_coords": [0.0, 0.0],
///   "chains_per_model": [1],
///   "groups_per_chain": [2],
///   "group_type_indices": [0, 1],
///   "group_types": [
///     { "name": "ALA", "atom_count": 1 },
///     { "name": "GLY", "atom_count": 1 }
///   ]
/// }
/// ```
pub struct JsonStructureFile;

impl StructureFile for JsonStructureFile {
    type Error = StructureIoError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        Ok(serde_json::from_reader(reader)?)
    }
}
