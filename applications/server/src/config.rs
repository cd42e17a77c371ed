/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_trending")]
    pub trending: TrendingSettings,

    #[serde(default = "default_log")]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrendingSettings {
    /// Seconds between ranking runs
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Trailing window for the momentum signal, in days
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Candidate set size (top tracks by all-time plays)
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,

    /// How many ranked tracks get published
    #[serde(default = "default_publish_limit")]
    pub publish_limit: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables, e.g.
        // VERSE_TRENDING__INTERVAL_SECS. The double underscore separates
        // sections so snake_case keys survive the split.
        settings = settings.add_source(
            config::Environment::with_prefix("VERSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.trending.interval_secs == 0 {
            return Err(ServerError::Config(
                "trending interval must be positive".to_string(),
            ));
        }
        if self.trending.window_days < 1 {
            return Err(ServerError::Config(
                "trending window must be at least one day".to_string(),
            ));
        }
        if self.trending.publish_limit > self.trending.candidate_limit {
            return Err(ServerError::Config(
                "publish limit cannot exceed the candidate limit".to_string(),
            ));
        }
        Ok(())
    }

    /// Translate the trending section into engine knobs
    pub fn trending_config(&self) -> verse_trending::TrendingConfig {
        verse_trending::TrendingConfig {
            window: chrono::Duration::days(self.trending.window_days),
            candidate_limit: self.trending.candidate_limit,
            publish_limit: self.trending.publish_limit,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            trending: default_trending(),
            log: default_log(),
        }
    }
}

// Default values
fn default_trending() -> TrendingSettings {
    TrendingSettings {
        interval_secs: default_interval_secs(),
        window_days: default_window_days(),
        candidate_limit: default_candidate_limit(),
        publish_limit: default_publish_limit(),
    }
}

fn default_interval_secs() -> u64 {
    6 * 60 * 60
}

fn default_window_days() -> i64 {
    7
}

fn default_candidate_limit() -> usize {
    50
}

fn default_publish_limit() -> usize {
    30
}

fn default_log() -> LogSettings {
    LogSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "verse_server=info,verse_trending=info,verse_playback=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_system() {
        let config = ServerConfig::default();
        assert_eq!(config.trending.interval_secs, 21_600);
        assert_eq!(config.trending.window_days, 7);
        assert_eq!(config.trending.candidate_limit, 50);
        assert_eq!(config.trending.publish_limit, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_override_reaches_nested_keys() {
        std::env::set_var("VERSE_TRENDING__INTERVAL_SECS", "120");
        let config = ServerConfig::load().unwrap();
        std::env::remove_var("VERSE_TRENDING__INTERVAL_SECS");
        assert_eq!(config.trending.interval_secs, 120);
    }

    #[test]
    fn publish_limit_above_candidate_limit_is_rejected() {
        let mut config = ServerConfig::default();
        config.trending.publish_limit = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = ServerConfig::default();
        config.trending.interval_secs = 0;
        assert!(config.validate().is_err());
    }
}
