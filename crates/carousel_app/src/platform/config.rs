//! Static configuration, loaded once at startup from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use carousel_core::{CoreSettings, Palette, DEFAULT_SAMPLE_INTERVAL};
use carousel_engine::{FeedRequest, FetchSettings, DEFAULT_FEED_BASE_URL};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub app_locale: String,
    pub app_id: String,
    #[serde(default)]
    pub happy_mode: bool,
    /// Seconds between feed refreshes.
    pub cache_timer: f64,
    /// Seconds each slide stays on screen.
    pub transition_speed: f64,
    pub backgrounds: [String; 5],
    #[serde(default = "default_progress_sample_ms")]
    pub progress_sample_ms: u64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: f64,
    #[serde(default = "default_feed_base_url")]
    pub feed_base_url: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_progress_sample_ms() -> u64 {
    DEFAULT_SAMPLE_INTERVAL.as_millis() as u64
}

fn default_fetch_timeout_secs() -> f64 {
    10.0
}

fn default_feed_base_url() -> String {
    DEFAULT_FEED_BASE_URL.to_string()
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::Invalid("appId must not be empty".into()));
        }
        if self.app_locale.trim().is_empty() {
            return Err(ConfigError::Invalid("appLocale must not be empty".into()));
        }
        for (name, secs) in [
            ("cacheTimer", self.cache_timer),
            ("transitionSpeed", self.transition_speed),
            ("fetchTimeoutSecs", self.fetch_timeout_secs),
        ] {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number of seconds, got {secs}"
                )));
            }
        }
        if self.progress_sample_ms == 0 {
            return Err(ConfigError::Invalid("progressSampleMs must be positive".into()));
        }
        Ok(())
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs_f64(self.cache_timer)
    }

    pub fn transition_period(&self) -> Duration {
        Duration::from_secs_f64(self.transition_speed)
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.progress_sample_ms)
    }

    pub fn core_settings(&self) -> CoreSettings {
        CoreSettings {
            happy_mode: self.happy_mode,
            palette: Palette::new(self.backgrounds.clone()),
            transition_period: self.transition_period(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.feed_base_url.clone(),
            request_timeout: Duration::from_secs_f64(self.fetch_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn feed_request(&self) -> FeedRequest {
        FeedRequest::new(self.app_locale.clone(), self.app_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r##"{
        "appLocale": "gb",
        "appId": "284882215",
        "happyMode": true,
        "cacheTimer": 600,
        "transitionSpeed": 12.5,
        "backgrounds": ["#111", "#222", "#333", "#444", "#555"]
    }"##;

    #[test]
    fn loads_file_and_applies_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.app_locale, "gb");
        assert!(config.happy_mode);
        assert_eq!(config.progress_sample_ms, 5);
        assert_eq!(config.feed_base_url, DEFAULT_FEED_BASE_URL);
        assert_eq!(config.refresh_period(), Duration::from_secs(600));
        assert_eq!(config.transition_period(), Duration::from_millis(12_500));
        assert_eq!(config.fetch_settings().request_timeout, Duration::from_secs(10));

        let settings = config.core_settings();
        assert_eq!(settings.palette.colors()[4], "#555");
        assert!(settings.happy_mode);
    }

    #[test]
    fn rejects_wrong_palette_size() {
        let text = MINIMAL.replace(r##""#555""##, r##""#555", "#666""##);
        assert!(matches!(AppConfig::from_json(&text), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_non_positive_timers() {
        let text = MINIMAL.replace("\"cacheTimer\": 600", "\"cacheTimer\": 0");
        let err = AppConfig::from_json(&text).unwrap_err();
        assert!(err.to_string().contains("cacheTimer"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
