//! Executor configuration

use graphlens_normalize::LargeIntegerPolicy;
use serde::{Deserialize, Serialize};

/// Executor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// How integers beyond the safe range are rendered
    pub large_integers: LargeIntegerPolicy,

    /// Executions slower than this are logged as warnings
    pub slow_query_threshold_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            large_integers: LargeIntegerPolicy::String,
            slow_query_threshold_ms: 5_000,
        }
    }
}

impl ExecutorConfig {
    /// Create a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the large integer policy
    pub fn large_integers(mut self, policy: LargeIntegerPolicy) -> Self {
        self.large_integers = policy;
        self
    }

    /// Builder: set the slow query threshold
    pub fn slow_query_threshold_ms(mut self, ms: u64) -> Self {
        self.slow_query_threshold_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExecutorConfig::default();
        assert_eq!(config.large_integers, LargeIntegerPolicy::String);
        assert_eq!(config.slow_query_threshold_ms, 5_000);
    }

    #[test]
    fn test_builder() {
        let config = ExecutorConfig::new()
            .large_integers(LargeIntegerPolicy::LossyFloat)
            .slow_query_threshold_ms(250);

        assert_eq!(config.large_integers, LargeIntegerPolicy::LossyFloat);
        assert_eq!(config.slow_query_threshold_ms, 250);
    }

    #[test]
    fn test_partial_json() {
        let config: ExecutorConfig =
            serde_json::from_str(r#"{"large_integers": "lossy_float"}"#).unwrap();
        assert_eq!(config.large_integers, LargeIntegerPolicy::LossyFloat);
        assert_eq!(config.slow_query_threshold_ms, 5_000);
    }
}
