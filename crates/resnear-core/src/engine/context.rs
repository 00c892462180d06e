use super::assemble::assemble;
use super::config::CandidateStrategy;
use super::filter::{CandidateSearch, KdTreeSearch, LinearScan};
use super::indexer::GroupPartition;
use super::refine::refine;
use crate::core::models::coords::CoordinateView;
use crate::core::models::record::InteractionRecord;
use crate::core::models::structure::{StructureError, StructureSource};
use crate::core::utils::geometry::bounding_box;
use tracing::trace;

/// Everything derived from one structure before any target is searched.
///
/// Construction validates the structure: coordinate arrays must agree in length and the
/// group partition must cover exactly the available coordinates.
pub struct SearchContext<'s> {
    coords: CoordinateView<'s>,
    partition: GroupPartition<'s>,
    cutoff: f64,
}

impl<'s> SearchContext<'s> {
    pub fn new<S: StructureSource + ?Sized>(
        structure: &'s S,
        cutoff: f64,
    ) -> Result<Self, StructureError> {
        let coords = CoordinateView::from_source(structure)?;
        let partition = GroupPartition::from_structure(structure)?;
        partition.check_atom_count(coords.len())?;
        Ok(Self {
            coords,
            partition,
            cutoff,
        })
    }

    pub fn partition(&self) -> &GroupPartition<'s> {
        &self.partition
    }

    pub fn candidate_search(&self, strategy: CandidateStrategy) -> Box<dyn CandidateSearch + '_> {
        match strategy {
            CandidateStrategy::LinearScan => Box::new(LinearScan::new(&self.partition, self.coords)),
            CandidateStrategy::KdTree => Box::new(KdTreeSearch::new(&self.partition, self.coords)),
        }
    }

    /// Runs box, filter, refine and assemble for a single target group.
    pub fn search_target(&self, search: &dyn CandidateSearch, target: usize) -> Vec<InteractionRecord> {
        let bbox = bounding_box(&self.coords, self.partition.atoms(target), self.cutoff);
        let candidates = search.candidates(&bbox);
        let contacts = refine(
            &candidates,
            target,
            &self.coords,
            &self.partition,
            self.cutoff * self.cutoff,
        );
        trace!(
            target_group = target,
            candidates = candidates.len(),
            accepted = contacts.len(),
            "Searched target group."
        );
        assemble(&self.partition, target, &contacts)
    }
}
