use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use resnear::core::io::json::JsonStructureFile;
use resnear::core::io::traits::StructureFile;
use resnear::core::models::coords::CoordinateView;
use resnear::core::models::structure::StructureSource;
use resnear::engine::indexer::GroupPartition;
use std::collections::BTreeMap;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Loading input structure from {:?}", &args.input);
    let structure =
        JsonStructureFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;
    print!("{}", summarize(&structure)?);
    Ok(())
}

/// Describes the first model of a structure: sizes, then occurrences per group name.
fn summarize<S: StructureSource>(structure: &S) -> Result<String> {
    let coords = CoordinateView::from_source(structure)?;
    let partition = GroupPartition::from_structure(structure)?;
    partition.check_atom_count(coords.len())?;

    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for &name in partition.names() {
        *occurrences.entry(name).or_default() += 1;
    }

    let chains = structure.chains_per_model().first().copied().unwrap_or(0);
    let mut out = format!(
        "Structure: {}\nChains:    {}\nGroups:    {}\nAtoms:     {}\n",
        structure.structure_id().unwrap_or("<unnamed>"),
        chains,
        partition.len(),
        partition.num_atoms()
    );
    for (name, count) in occurrences {
        out.push_str(&format!("  {:<6} {}\n", name, count));
    }
    Ok(out)
}
