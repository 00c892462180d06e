use crate::core::models::record::InteractionRecord;
use crate::core::models::structure::StructureSource;
use crate::engine::config::InteractionConfig;
use crate::engine::context::SearchContext;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

/// Finds every group within the cutoff of each occurrence of the configured target group.
///
/// Records are ordered by target occurrence first and partner second, both in the
/// structure's chain/group enumeration order. A target name with no occurrences yields an
/// empty result.
///
/// # Errors
///
/// Returns [`EngineError::InvalidStructure`] if the structure's arrays are inconsistent.
/// Nothing is computed in that case.
#[instrument(skip_all, name = "interaction_search")]
pub fn run<S: StructureSource + ?Sized>(
    structure: &S,
    config: &InteractionConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<InteractionRecord>, EngineError> {
    let structure_id = structure.structure_id();
    let context = SearchContext::new(structure, config.cutoff_distance())
        .map_err(|e| EngineError::structure(structure_id, e))?;

    let targets: Vec<usize> = context.partition().occurrences(config.group_name()).collect();
    info!(
        structure = structure_id.unwrap_or_default(),
        group_name = config.group_name(),
        cutoff = config.cutoff_distance(),
        groups = context.partition().len(),
        targets = targets.len(),
        "Searching for interacting groups."
    );
    reporter.report(Progress::TargetsFound {
        count: targets.len() as u64,
    });

    let mut records = Vec::new();
    if !targets.is_empty() {
        let search = context.candidate_search(config.candidate_strategy());
        debug!(strategy = %config.candidate_strategy(), "Candidate search prepared.");
        for target in targets {
            records.extend(context.search_target(search.as_ref(), target));
            reporter.report(Progress::TargetSearched);
        }
    }

    reporter.report(Progress::StructureFinish {
        records: records.len(),
    });
    info!(records = records.len(), "Interaction search complete.");
    Ok(records)
}

/// Validates `group_name` and `cutoff_distance`, then runs [`run`] without progress reporting.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] for a non-positive or non-finite cutoff,
/// before the structure is looked at.
pub fn find<S: StructureSource + ?Sized>(
    structure: &S,
    group_name: &str,
    cutoff_distance: f64,
) -> Result<Vec<InteractionRecord>, EngineError> {
    let config = InteractionConfig::new(group_name, cutoff_distance)?;
    run(structure, &config, &ProgressReporter::new())
}
