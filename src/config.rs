use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration, populated by the CLI argument parser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of normal (non-anomalous) rows to generate
    pub rows: usize,
    /// Width of the time window in days, ending at the run's "now" reference
    pub days: i64,
    /// Seed for the deterministic randomness source
    pub seed: u64,
    /// Destination for the output table
    pub out: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            rows: 1200,
            days: 7,
            seed: 1337,
            out: PathBuf::from("data/sample_auth_logs.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.rows, 1200);
        assert_eq!(config.days, 7);
        assert_eq!(config.seed, 1337);
        assert_eq!(config.out, PathBuf::from("data/sample_auth_logs.csv"));
    }
}
