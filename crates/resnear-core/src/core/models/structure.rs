use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a structure's arrays are inconsistent with each other.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("Coordinate arrays have different lengths (x: {x}, y: {y}, z: {z})")]
    CoordinateLengthMismatch { x: usize, y: usize, z: usize },

    #[error(
        "Structure declares {declared} atoms in its first model but provides {available} coordinates"
    )]
    AtomCountMismatch { declared: usize, available: usize },

    #[error("First model declares {declared} chains but only {available} chain group counts exist")]
    ChainCountOutOfRange { declared: usize, available: usize },

    #[error("Chains reference {required} group occurrences but only {available} group types are listed")]
    GroupOccurrencesOutOfRange { required: usize, available: usize },

    #[error("Group occurrence {occurrence} references unknown group type {group_type}")]
    UnknownGroupType { occurrence: usize, group_type: usize },

    #[error("Group index has {boundaries} boundaries for {names} group names")]
    PartitionLengthMismatch { boundaries: usize, names: usize },

    #[error("Group index must start at atom 0 but starts at {0}")]
    PartitionStart(usize),

    #[error("Group index decreases at position {position}")]
    PartitionNotMonotonic { position: usize },
}

/// The data a structure must expose to be searched.
///
/// Coordinates cover the atoms of the first model only, stored as three parallel arrays.
/// The hierarchy is described the same flat way: the number of chains per model, the
/// number of groups per chain, and for every group occurrence an index into a table of
/// group types, each of which knows its name and atom count.
pub trait StructureSource {
    fn x_coords(&self) -> &[f32];
    fn y_coords(&self) -> &[f32];
    fn z_coords(&self) -> &[f32];

    fn chains_per_model(&self) -> &[usize];
    fn groups_per_chain(&self) -> &[usize];
    fn group_type_indices(&self) -> &[usize];

    /// Display name of a group type, or `None` if the type index is unknown.
    fn group_name(&self, group_type: usize) -> Option<&str>;

    /// Atom count of a group type, or `None` if the type index is unknown.
    fn num_atoms_in_group(&self, group_type: usize) -> Option<usize>;

    /// Identifier used in logs and diagnostics.
    fn structure_id(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupType {
    pub name: String,
    pub atom_count: usize,
}

impl GroupType {
    pub fn new(name: &str, atom_count: usize) -> Self {
        Self {
            name: name.to_string(),
            atom_count,
        }
    }
}

/// An owned, already-decoded structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(default)]
    structure_id: Option<String>,
    x_coords: Vec<f32>,
    y_coords: Vec<f32>,
    z_coords: Vec<f32>,
    chains_per_model: Vec<usize>,
    groups_per_chain: Vec<usize>,
    group_type_indices: Vec<usize>,
    group_types: Vec<GroupType>,
}

impl Structure {
    pub fn builder() -> StructureBuilder {
        StructureBuilder::default()
    }

    pub fn group_types(&self) -> &[GroupType] {
        &self.group_types
    }

    pub fn num_atoms(&self) -> usize {
        self.x_coords.len()
    }
}

impl StructureSource for Structure {
    fn x_coords(&self) -> &[f32] {
        &self.x_coords
    }

    fn y_coords(&self) -> &[f32] {
        &self.y_coords
    }

    fn z_coords(&self) -> &[f32] {
        &self.z_coords
    }

    fn chains_per_model(&self) -> &[usize] {
        &self.chains_per_model
    }

    fn groups_per_chain(&self) -> &[usize] {
        &self.groups_per_chain
    }

    fn group_type_indices(&self) -> &[usize] {
        &self.group_type_indices
    }

    fn group_name(&self, group_type: usize) -> Option<&str> {
        self.group_types.get(group_type).map(|t| t.name.as_str())
    }

    fn num_atoms_in_group(&self, group_type: usize) -> Option<usize> {
        self.group_types.get(group_type).map(|t| t.atom_count)
    }

    fn structure_id(&self) -> Option<&str> {
        self.structure_id.as_deref()
    }
}

/// Assembles a single-model [`Structure`] chain by chain.
///
/// Group types are indexed in the order they are registered.
#[derive(Debug, Default)]
pub struct StructureBuilder {
    structure_id: Option<String>,
    group_types: Vec<GroupType>,
    groups_per_chain: Vec<usize>,
    group_type_indices: Vec<usize>,
    x_coords: Vec<f32>,
    y_coords: Vec<f32>,
    z_coords: Vec<f32>,
}

impl StructureBuilder {
    pub fn structure_id(mut self, id: &str) -> Self {
        self.structure_id = Some(id.to_string());
        self
    }

    pub fn group_type(mut self, name: &str, atom_count: usize) -> Self {
        self.group_types.push(GroupType::new(name, atom_count));
        self
    }

    /// Appends a chain whose group occurrences reference the given group types.
    pub fn chain(mut self, group_types: &[usize]) -> Self {
        self.groups_per_chain.push(group_types.len());
        self.group_type_indices.extend_from_slice(group_types);
        self
    }

    pub fn atom(mut self, x: f32, y: f32, z: f32) -> Self {
        self.x_coords.push(x);
        self.y_coords.push(y);
        self.z_coords.push(z);
        self
    }

    pub fn coords(mut self, x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Self {
        self.x_coords = x;
        self.y_coords = y;
        self.z_coords = z;
        self
    }

    /// Finishes the structure without validating it; validation happens when it is searched.
    pub fn build(self) -> Structure {
        Structure {
            structure_id: self.structure_id,
            x_coords: self.x_coords,
            y_coords: self.y_coords,
            z_coords: self.z_coords,
            chains_per_model: vec![self.groups_per_chain.len()],
            groups_per_chain: self.groups_per_chain,
            group_type_indices: self.group_type_indices,
            group_types: self.group_types,
        }
    }
}
