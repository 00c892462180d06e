use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Cutoff distance must be a positive, finite number, got {0}")]
    InvalidCutoff(f64),

    #[error("Unknown candidate strategy '{0}'. Expected 'linear-scan' or 'kd-tree'")]
    UnknownStrategy(String),
}

/// How candidate groups are pruned before exact distances are computed.
///
/// Both strategies select exactly the same groups in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandidateStrategy {
    /// Scan every atom of every group against the box.
    #[default]
    LinearScan,
    /// Query a k-d tree over all atoms, built once per structure.
    KdTree,
}

impl FromStr for CandidateStrategy {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear-scan" | "linear" => Ok(CandidateStrategy::LinearScan),
            "kd-tree" | "kdtree" => Ok(CandidateStrategy::KdTree),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for CandidateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CandidateStrategy::LinearScan => "linear-scan",
                CandidateStrategy::KdTree => "kd-tree",
            }
        )
    }
}

/// Validated search parameters. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    group_name: String,
    cutoff_distance: f64,
    candidate_strategy: CandidateStrategy,
}

impl InteractionConfig {
    pub fn new(group_name: &str, cutoff_distance: f64) -> Result<Self, ConfigError> {
        InteractionConfigBuilder::new()
            .group_name(group_name)
            .cutoff_distance(cutoff_distance)
            .build()
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn cutoff_distance(&self) -> f64 {
        self.cutoff_distance
    }

    pub fn cutoff_squared(&self) -> f64 {
        self.cutoff_distance * self.cutoff_distance
    }

    pub fn candidate_strategy(&self) -> CandidateStrategy {
        self.candidate_strategy
    }
}

#[derive(Default)]
pub struct InteractionConfigBuilder {
    group_name: Option<String>,
    cutoff_distance: Option<f64>,
    candidate_strategy: Option<CandidateStrategy>,
}

impl InteractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_name(mut self, name: &str) -> Self {
        self.group_name = Some(name.to_string());
        self
    }
    pub fn cutoff_distance(mut self, distance: f64) -> Self {
        self.cutoff_distance = Some(distance);
        self
    }
    pub fn candidate_strategy(mut self, strategy: CandidateStrategy) -> Self {
        self.candidate_strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Result<InteractionConfig, ConfigError> {
        let group_name = self
            .group_name
            .ok_or(ConfigError::MissingParameter("group_name"))?;
        let cutoff_distance = self
            .cutoff_distance
            .ok_or(ConfigError::MissingParameter("cutoff_distance"))?;
        if !(cutoff_distance.is_finite() && cutoff_distance > 0.0) {
            return Err(ConfigError::InvalidCutoff(cutoff_distance));
        }
        Ok(InteractionConfig {
            group_name,
            cutoff_distance,
            candidate_strategy: self.candidate_strategy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_succeeds_with_required_parameters() {
        let config = InteractionConfigBuilder::new()
            .group_name("HEM")
            .cutoff_distance(4.0)
            .build()
            .unwrap();
        assert_eq!(config.group_name(), "HEM");
        assert_eq!(config.cutoff_distance(), 4.0);
        assert_eq!(config.cutoff_squared(), 16.0);
        assert_eq!(config.candidate_strategy(), CandidateStrategy::LinearScan);
    }

    #[test]
    fn builder_keeps_explicit_strategy() {
        let config = InteractionConfigBuilder::new()
            .group_name("ATP")
            .cutoff_distance(5.0)
            .candidate_strategy(CandidateStrategy::KdTree)
            .build()
            .unwrap();
        assert_eq!(config.candidate_strategy(), CandidateStrategy::KdTree);
    }

    #[test]
    fn builder_reports_missing_parameters() {
        let err = InteractionConfigBuilder::new()
            .cutoff_distance(4.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("group_name"));

        let err = InteractionConfigBuilder::new()
            .group_name("HEM")
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("cutoff_distance"));
    }

    #[test]
    fn non_positive_cutoff_is_rejected() {
        assert_eq!(
            InteractionConfig::new("HEM", 0.0).unwrap_err(),
            ConfigError::InvalidCutoff(0.0)
        );
        assert_eq!(
            InteractionConfig::new("HEM", -1.5).unwrap_err(),
            ConfigError::InvalidCutoff(-1.5)
        );
    }

    #[test]
    fn non_finite_cutoff_is_rejected() {
        assert!(matches!(
            InteractionConfig::new("HEM", f64::NAN),
            Err(ConfigError::InvalidCutoff(_))
        ));
        assert!(matches!(
            InteractionConfig::new("HEM", f64::INFINITY),
            Err(ConfigError::InvalidCutoff(_))
        ));
    }

    #[test]
    fn strategy_round_trips_through_strings() {
        for strategy in [CandidateStrategy::LinearScan, CandidateStrategy::KdTree] {
            assert_eq!(strategy.to_string().parse::<CandidateStrategy>(), Ok(strategy));
        }
        assert_eq!("KDTREE".parse(), Ok(CandidateStrategy::KdTree));
        assert_eq!(
            "octree".parse::<CandidateStrategy>(),
            Err(ConfigError::UnknownStrategy("octree".to_string()))
        );
    }
}
