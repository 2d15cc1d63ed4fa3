use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitepatchConfig {
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Timing knobs for the operation runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Milliseconds between polling rounds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Rounds allowed after the deadline condition is first satisfied.
    #[serde(default = "default_extra_tries")]
    pub extra_tries: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            extra_tries: default_extra_tries(),
        }
    }
}

impl RunnerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_interval_ms() -> u64 {
    100
}

fn default_extra_tries() -> u32 {
    3
}
