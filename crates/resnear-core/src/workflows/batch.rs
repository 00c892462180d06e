use super::interactions;
use crate::core::models::record::InteractionRecord;
use crate::core::models::structure::StructureSource;
use crate::engine::config::InteractionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of searching one structure of a batch.
#[derive(Debug)]
pub struct StructureOutcome {
    pub structure_id: Option<String>,
    pub result: Result<Vec<InteractionRecord>, EngineError>,
}

/// Searches every structure independently with the same configuration.
///
/// Outcomes are returned in the order of `structures`, whether or not the search runs in
/// parallel. A failing structure does not affect the others.
#[instrument(skip_all, name = "batch_interaction_search")]
pub fn run_many<S: StructureSource + Sync>(
    structures: &[S],
    config: &InteractionConfig,
    reporter: &ProgressReporter,
) -> Vec<StructureOutcome> {
    info!(
        structures = structures.len(),
        group_name = config.group_name(),
        cutoff = config.cutoff_distance(),
        "Starting batch interaction search."
    );
    reporter.report(Progress::BatchStart {
        total_structures: structures.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = structures.iter();

    #[cfg(feature = "parallel")]
    let iterator = structures.par_iter();

    let outcomes: Vec<StructureOutcome> = iterator
        .map(|structure| {
            let result = interactions::run(structure, config, &ProgressReporter::new());
            let records = result.as_ref().map_or(0, Vec::len);
            reporter.report(Progress::StructureFinish { records });
            StructureOutcome {
                structure_id: structure.structure_id().map(str::to_string),
                result,
            }
        })
        .collect();

    reporter.report(Progress::BatchFinish);

    let failures = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failures > 0 {
        warn!(failures, "Some structures could not be searched.");
    }
    info!(
        structures = outcomes.len(),
        failures, "Batch interaction search complete."
    );
    outcomes
}

/// Concatenates the records of all outcomes in order, stopping at the first failure.
pub fn flatten_outcomes(
    outcomes: Vec<StructureOutcome>,
) -> Result<Vec<InteractionRecord>, EngineError> {
    let mut records = Vec::new();
    for outcome in outcomes {
        records.extend(outcome.result?);
    }
    Ok(records)
}
