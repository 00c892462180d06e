use crate::cli::FindArgs;
use crate::config::PartialSearchConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use resnear::core::io::json::JsonStructureFile;
use resnear::core::io::records::write_records;
use resnear::core::io::traits::StructureFile;
use resnear::core::models::record::InteractionRecord;
use resnear::core::models::structure::Structure;
use resnear::engine::progress::ProgressReporter;
use resnear::workflows::batch::{self, StructureOutcome};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn run(args: FindArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSearchConfig::from_file(path)?,
        None => PartialSearchConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;
    info!(
        group_name = config.group_name(),
        cutoff = config.cutoff_distance(),
        strategy = %config.candidate_strategy(),
        "Search configuration resolved."
    );

    let structures = load_structures(&args.inputs)?;

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let outcomes = batch::run_many(&structures, &config, &reporter);

    let records = if args.keep_going {
        collect_successful(outcomes, &args.inputs)
    } else {
        batch::flatten_outcomes(outcomes)?
    };
    info!(records = records.len(), "Writing interaction records.");

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_records(&records, BufWriter::new(file))?;
            eprintln!("{} record(s) written to: {}", records.len(), path.display());
        }
        None => write_records(&records, io::stdout().lock())?,
    }
    Ok(())
}

fn load_structures(paths: &[PathBuf]) -> Result<Vec<Structure>> {
    paths
        .iter()
        .map(|path| {
            info!("Loading input structure from {:?}", path);
            JsonStructureFile::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })
        })
        .collect()
}

fn collect_successful(outcomes: Vec<StructureOutcome>, paths: &[PathBuf]) -> Vec<InteractionRecord> {
    let mut records = Vec::new();
    for (outcome, path) in outcomes.into_iter().zip(paths) {
        match outcome.result {
            Ok(found) => records.extend(found),
            Err(e) => warn!("Skipping {}: {}", display_label(outcome.structure_id.as_deref(), path), e),
        }
    }
    records
}

fn display_label(structure_id: Option<&str>, path: &Path) -> String {
    match structure_id {
        Some(id) => format!("'{}' ({})", id, path.display()),
        None => path.display().to_string(),
    }
}
