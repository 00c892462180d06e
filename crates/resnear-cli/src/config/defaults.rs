use resnear::engine::config::CandidateStrategy;

pub struct DefaultsConfig {
    pub candidate_strategy: CandidateStrategy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            candidate_strategy: CandidateStrategy::LinearScan,
        }
    }
}
