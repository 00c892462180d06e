use crate::core::models::structure::{StructureError, StructureSource};
use itertools::Itertools;
use std::ops::Range;

/// Flat, contiguous atom ranges for every group occurrence of a structure's first model.
///
/// `boundaries` holds cumulative atom counts: group `i` owns the atoms in
/// `boundaries[i]..boundaries[i + 1]`. `names` is aligned with the groups and borrows the
/// structure's group-type names, so building a partition allocates two vectors and nothing
/// per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPartition<'a> {
    boundaries: Vec<usize>,
    names: Vec<&'a str>,
}

impl<'a> GroupPartition<'a> {
    /// Builds a partition from explicit boundaries and names.
    ///
    /// # Errors
    ///
    /// Fails if the lengths disagree, the first boundary is not 0, or the boundaries decrease.
    pub fn new(boundaries: Vec<usize>, names: Vec<&'a str>) -> Result<Self, StructureError> {
        if boundaries.len() != names.len() + 1 {
            return Err(StructureError::PartitionLengthMismatch {
                boundaries: boundaries.len(),
                names: names.len(),
            });
        }
        if boundaries[0] != 0 {
            return Err(StructureError::PartitionStart(boundaries[0]));
        }
        if let Some(position) = boundaries
            .iter()
            .tuple_windows()
            .position(|(lo, hi)| hi < lo)
        {
            return Err(StructureError::PartitionNotMonotonic {
                position: position + 1,
            });
        }
        Ok(Self { boundaries, names })
    }

    /// Walks the chains of the first model in order and records one range per group occurrence.
    ///
    /// A structure without models is treated as having no chains.
    pub fn from_structure<S: StructureSource + ?Sized>(
        structure: &'a S,
    ) -> Result<Self, StructureError> {
        let num_chains = structure.chains_per_model().first().copied().unwrap_or(0);
        let groups_per_chain = structure.groups_per_chain();
        if num_chains > groups_per_chain.len() {
            return Err(StructureError::ChainCountOutOfRange {
                declared: num_chains,
                available: groups_per_chain.len(),
            });
        }

        let num_groups: usize = groups_per_chain[..num_chains].iter().sum();
        let group_types = structure.group_type_indices();
        if num_groups > group_types.len() {
            return Err(StructureError::GroupOccurrencesOutOfRange {
                required: num_groups,
                available: group_types.len(),
            });
        }

        let mut boundaries = Vec::with_capacity(num_groups + 1);
        let mut names = Vec::with_capacity(num_groups);
        let mut atom_offset = 0usize;
        boundaries.push(atom_offset);

        // Occurrences of consecutive chains are stored back to back.
        for (occurrence, &group_type) in group_types[..num_groups].iter().enumerate() {
            let unknown = StructureError::UnknownGroupType {
                occurrence,
                group_type,
            };
            let name = structure.group_name(group_type).ok_or(unknown.clone())?;
            let atom_count = structure.num_atoms_in_group(group_type).ok_or(unknown)?;

            atom_offset = atom_offset.saturating_add(atom_count);
            boundaries.push(atom_offset);
            names.push(name);
        }

        Ok(Self { boundaries, names })
    }

    /// Fails unless the partition covers exactly `available` atoms.
    pub fn check_atom_count(&self, available: usize) -> Result<(), StructureError> {
        if self.num_atoms() != available {
            return Err(StructureError::AtomCountMismatch {
                declared: self.num_atoms(),
                available,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn num_atoms(&self) -> usize {
        self.boundaries[self.boundaries.len() - 1]
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    pub fn name(&self, group: usize) -> &'a str {
        self.names[group]
    }

    pub fn atoms(&self, group: usize) -> Range<usize> {
        self.boundaries[group]..self.boundaries[group + 1]
    }

    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.boundaries.iter().tuple_windows().map(|(&lo, &hi)| lo..hi)
    }

    /// Indices of every group whose name equals `name`, in enumeration order.
    pub fn occurrences<'n>(&'n self, name: &'n str) -> impl Iterator<Item = usize> + 'n {
        self.names
            .iter()
            .enumerate()
            .filter(move |(_, n)| **n == name)
            .map(|(i, _)| i)
    }

    /// The group owning `atom`, or `None` if the atom lies beyond the last group.
    pub fn group_of_atom(&self, atom: usize) -> Option<usize> {
        if atom >= self.num_atoms() {
            return None;
        }
        // First boundary strictly greater than `atom` closes the owning group.
        Some(self.boundaries.partition_point(|&b| b <= atom) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::structure::Structure;

    fn two_chain_structure() -> Structure {
        Structure::builder()
            .group_type("ALA", 5)
            .group_type("HOH", 1)
            .group_type("HEM", 43)
            .chain(&[0, 0])
            .chain(&[2, 1, 1])
            .build()
    }

    #[test]
    fn from_structure_accumulates_atom_counts_across_chains() {
        let structure = two_chain_structure();
        let partition = GroupPartition::from_structure(&structure).unwrap();
        assert_eq!(partition.boundaries(), &[0, 5, 10, 53, 54, 55]);
        assert_eq!(partition.names(), &["ALA", "ALA", "HEM", "HOH", "HOH"]);
        assert_eq!(partition.len(), 5);
        assert_eq!(partition.num_atoms(), 55);
    }

    #[test]
    fn from_structure_supports_zero_groups() {
        let structure = Structure::builder().build();
        let partition = GroupPartition::from_structure(&structure).unwrap();
        assert_eq!(partition.boundaries(), &[0]);
        assert!(partition.names().is_empty());
        assert!(partition.is_empty());
    }

    #[test]
    fn structure_without_models_has_zero_groups() {
        let structure: Structure = serde_json::from_str(
            r#"{ "x_coords": [], "y_coords": [], "z_coords": [],
                 "chains_per_model": [], "groups_per_chain": [],
                 "group_type_indices": [], "group_types": [] }"#,
        )
        .unwrap();
        let partition = GroupPartition::from_structure(&structure).unwrap();
        assert_eq!(partition.boundaries(), &[0]);
    }

    #[test]
    fn only_the_first_model_is_indexed() {
        let structure: Structure = serde_json::from_str(
            r#"{ "x_coords": [0.0], "y_coords": [0.0], "z_coords": [0.0],
                 "chains_per_model": [1, 1], "groups_per_chain": [1, 1],
                 "group_type_indices": [0, 1],
                 "group_types": [{ "name": "ALA", "atom_count": 1 },
                                 { "name": "GLY", "atom_count": 1 }] }"#,
        )
        .unwrap();
        let partition = GroupPartition::from_structure(&structure).unwrap();
        assert_eq!(partition.names(), &["ALA"]);
        assert_eq!(partition.num_atoms(), 1);
    }

    #[test]
    fn zero_atom_groups_produce_empty_ranges() {
        let structure = Structure::builder()
            .group_type("UNK", 0)
            .group_type("GLY", 2)
            .chain(&[1, 0, 1])
            .build();
        let partition = GroupPartition::from_structure(&structure).unwrap();
        let ranges: Vec<_> = partition.ranges().collect();
        assert_eq!(ranges, vec![0..2, 2..2, 2..4]);
        assert!(partition.atoms(1).is_empty());
    }

    #[test]
    fn too_many_chains_is_an_error() {
        let structure: Structure = serde_json::from_str(
            r#"{ "x_coords": [], "y_coords": [], "z_coords": [],
                 "chains_per_model": [2], "groups_per_chain": [0],
                 "group_type_indices": [], "group_types": [] }"#,
        )
        .unwrap();
        assert_eq!(
            GroupPartition::from_structure(&structure).unwrap_err(),
            StructureError::ChainCountOutOfRange {
                declared: 2,
                available: 1
            }
        );
    }

    #[test]
    fn missing_group_type_references_are_an_error() {
        let structure: Structure = serde_json::from_str(
            r#"{ "x_coords": [], "y_coords": [], "z_coords": [],
                 "chains_per_model": [1], "groups_per_chain": [3],
                 "group_type_indices": [0], "group_types": [{ "name": "ALA", "atom_count": 0 }] }"#,
        )
        .unwrap();
        assert_eq!(
            GroupPartition::from_structure(&structure).unwrap_err(),
            StructureError::GroupOccurrencesOutOfRange {
                required: 3,
                available: 1
            }
        );
    }

    #[test]
    fn unknown_group_type_is_an_error() {
        let structure = Structure::builder()
            .group_type("ALA", 1)
            .chain(&[0, 4])
            .build();
        assert_eq!(
            GroupPartition::from_structure(&structure).unwrap_err(),
            StructureError::UnknownGroupType {
                occurrence: 1,
                group_type: 4
            }
        );
    }

    #[test]
    fn new_validates_lengths_start_and_order() {
        assert_eq!(
            GroupPartition::new(vec![0, 1], vec!["A", "B"]).unwrap_err(),
            StructureError::PartitionLengthMismatch {
                boundaries: 2,
                names: 2
            }
        );
        assert_eq!(
            GroupPartition::new(vec![2, 3], vec!["A"]).unwrap_err(),
            StructureError::PartitionStart(2)
        );
        assert_eq!(
            GroupPartition::new(vec![0, 4, 3], vec!["A", "B"]).unwrap_err(),
            StructureError::PartitionNotMonotonic { position: 2 }
        );
        assert!(GroupPartition::new(vec![0, 0, 3], vec!["A", "B"]).is_ok());
    }

    #[test]
    fn check_atom_count_compares_against_last_boundary() {
        let partition = GroupPartition::new(vec![0, 2, 5], vec!["A", "B"]).unwrap();
        assert!(partition.check_atom_count(5).is_ok());
        assert_eq!(
            partition.check_atom_count(4).unwrap_err(),
            StructureError::AtomCountMismatch {
                declared: 5,
                available: 4
            }
        );
    }

    #[test]
    fn occurrences_lists_matching_groups_in_order() {
        let structure = two_chain_structure();
        let partition = GroupPartition::from_structure(&structure).unwrap();
        assert_eq!(partition.occurrences("HOH").collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(partition.occurrences("ALA").collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(partition.occurrences("ATP").count(), 0);
    }

    #[test]
    fn group_of_atom_skips_empty_groups() {
        let partition = GroupPartition::new(vec![0, 2, 2, 5], vec!["A", "B", "C"]).unwrap();
        assert_eq!(partition.group_of_atom(0), Some(0));
        assert_eq!(partition.group_of_atom(1), Some(0));
        assert_eq!(partition.group_of_atom(2), Some(2));
        assert_eq!(partition.group_of_atom(4), Some(2));
        assert_eq!(partition.group_of_atom(5), None);
    }
}
