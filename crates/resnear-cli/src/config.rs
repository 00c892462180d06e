mod defaults;

use crate::cli::FindArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use resnear::engine::config::{self as core_config, CandidateStrategy};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Search settings read from a TOML file. Every value may be overridden from the command line.
///
/// ```toml
/// group-name = "HEM"
/// cutoff-distance = 4.0
/// candidate-strategy = "kd-tree"
/// ```
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialSearchConfig {
    #[serde(rename = "group-name")]
    group_name: Option<String>,
    #[serde(rename = "cutoff-distance")]
    cutoff_distance: Option<f64>,
    #[serde(rename = "candidate-strategy")]
    candidate_strategy: Option<String>,
}

impl PartialSearchConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &FindArgs) -> Result<core_config::InteractionConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let group_name = args
            .group_name
            .as_ref()
            .or(self.group_name.as_ref())
            .ok_or_else(|| {
                CliError::Config(
                    "A value for 'group-name' is required either in the config file or via --group."
                        .to_string(),
                )
            })?;
        let cutoff_distance = args
            .cutoff_distance
            .or(self.cutoff_distance)
            .ok_or_else(|| {
                CliError::Config(
                    "A value for 'cutoff-distance' is required either in the config file or via --cutoff."
                        .to_string(),
                )
            })?;
        let candidate_strategy = match (args.strategy, self.candidate_strategy.as_deref()) {
            (Some(strategy), _) => strategy,
            (None, Some(name)) => name
                .parse::<CandidateStrategy>()
                .map_err(|e| CliError::Config(e.to_string()))?,
            (None, None) => defaults.candidate_strategy,
        };

        core_config::InteractionConfigBuilder::new()
            .group_name(group_name)
            .cutoff_distance(cutoff_distance)
            .candidate_strategy(candidate_strategy)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "group-name" => self.group_name = Some(value_str.to_string()),
                "cutoff-distance" => {
                    self.cutoff_distance = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                "candidate-strategy" => self.candidate_strategy = Some(value_str.to_string()),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
