use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;

/// Process-wide configuration for the judge, sourced from the environment.
///
/// Every field has a sensible default so a bare test environment works
/// without an env file.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    /// Root directory for contestant-uploaded output/source files.
    pub submission_dir: String,
    /// Root directory for the secret oracle input/output files.
    pub secret_dir: String,
    /// Interval, in seconds, between timeout sweeps when the embedder
    /// drives the sweeper on a timer instead of per-request.
    pub sweep_interval_secs: u64,
    /// Length of the per-attempt download capability token.
    pub token_length: usize,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(Self::from_env)
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }

    fn from_env() -> Self {
        let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "judge-core".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/judge.log".into());
        let submission_dir =
            env::var("SUBMISSION_DIR").unwrap_or_else(|_| "data/submissions".into());
        let secret_dir = env::var("SECRET_DIR").unwrap_or_else(|_| "data/secret".into());
        let sweep_interval_secs = env::var("SWEEP_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let token_length = env::var("TOKEN_LENGTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(16);

        Config {
            project_name,
            log_level,
            log_file,
            submission_dir,
            secret_dir,
            sweep_interval_secs,
            token_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        let config = Config::from_env();
        assert_eq!(config.token_length, 16);
        assert_eq!(config.sweep_interval_secs, 30);
        assert!(!config.submission_dir.is_empty());
        assert!(!config.secret_dir.is_empty());
    }
}
