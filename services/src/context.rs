use common::config::Config;
use std::time::Duration;
use store::paths::StorageRoot;

/// Explicit bundle of the knobs the workflows need, passed as a parameter
/// instead of read from globals.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Where submissions land and where the oracle files live.
    pub storage: StorageRoot,
    /// Length of the capability token minted per attempt.
    pub token_length: usize,
    /// Suggested pause between sweeps for embedders that drive the
    /// sweeper on a timer.
    pub sweep_interval: Duration,
}

impl ServiceContext {
    pub fn new(storage: StorageRoot, token_length: usize, sweep_interval: Duration) -> Self {
        Self {
            storage,
            token_length,
            sweep_interval,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            storage: StorageRoot::new(&config.submission_dir, &config.secret_dir),
            token_length: config.token_length,
            sweep_interval: Duration::from_secs(config.sweep_interval_secs),
        }
    }
}
