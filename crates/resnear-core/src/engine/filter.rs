use super::indexer::GroupPartition;
use crate::core::models::coords::CoordinateView;
use crate::core::utils::geometry::BoundingBox;
use kiddo::SquaredEuclidean;
use kiddo::immutable::float::kdtree::ImmutableKdTree;

/// Coarse spatial prune: finds every group with at least one atom inside a box.
///
/// Implementations return group indices in ascending order without duplicates. The target
/// group itself is not excluded.
pub trait CandidateSearch {
    fn candidates(&self, bbox: &BoundingBox) -> Vec<usize>;
}

/// Checks the atoms of each group in turn and stops at the first one inside the box.
pub struct LinearScan<'p, 'a> {
    partition: &'p GroupPartition<'a>,
    coords: CoordinateView<'p>,
}

impl<'p, 'a> LinearScan<'p, 'a> {
    pub fn new(partition: &'p GroupPartition<'a>, coords: CoordinateView<'p>) -> Self {
        Self { partition, coords }
    }
}

impl CandidateSearch for LinearScan<'_, '_> {
    fn candidates(&self, bbox: &BoundingBox) -> Vec<usize> {
        if bbox.is_empty() {
            return Vec::new();
        }
        self.partition
            .ranges()
            .enumerate()
            .filter(|(_, atoms)| atoms.clone().any(|i| bbox.contains(&self.coords.point(i))))
            .map(|(group, _)| group)
            .collect()
    }
}

/// Queries a k-d tree over all atoms with the sphere circumscribing the box, then applies
/// the exact six-bound check to the returned atoms.
///
/// The tree is immutable and balanced at construction, so any number of atoms may share a
/// coordinate on one axis.
pub struct KdTreeSearch<'p, 'a> {
    partition: &'p GroupPartition<'a>,
    coords: CoordinateView<'p>,
    tree: Option<ImmutableKdTree<f64, u32, 3, 32>>,
}

// Relative slack on the query radius; the box check afterwards is exact.
const RADIUS_SLACK: f64 = 1e-9;

impl<'p, 'a> KdTreeSearch<'p, 'a> {
    pub fn new(partition: &'p GroupPartition<'a>, coords: CoordinateView<'p>) -> Self {
        let points: Vec<[f64; 3]> = coords.points().map(|p| [p.x, p.y, p.z]).collect();
        let tree = (!points.is_empty()).then(|| ImmutableKdTree::new_from_slice(&points));
        Self {
            partition,
            coords,
            tree,
        }
    }
}

impl CandidateSearch for KdTreeSearch<'_, '_> {
    fn candidates(&self, bbox: &BoundingBox) -> Vec<usize> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        if bbox.is_empty() {
            return Vec::new();
        }
        let center = bbox.center();
        let radius_sq = bbox.circumradius_squared() * (1.0 + RADIUS_SLACK);

        let mut groups: Vec<usize> = tree
            .within_unsorted::<SquaredEuclidean>(&[center.x, center.y, center.z], radius_sq)
            .into_iter()
            .map(|neighbour| neighbour.item as usize)
            .filter(|&atom| bbox.contains(&self.coords.point(atom)))
            .filter_map(|atom| self.partition.group_of_atom(atom))
            .collect();
        groups.sort_unstable();
        groups.dedup();
        groups
    }
}
