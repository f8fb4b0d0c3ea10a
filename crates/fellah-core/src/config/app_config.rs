//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Configuration de l'application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Flow timing knobs
    pub timing: TimingConfig,

    /// Cosmetic offline banner flag; carried as data, no sync behavior
    pub offline_mode: bool,
}

/// Timing configuration for the two flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Splash auto-advance delay in milliseconds
    pub splash_delay_ms: u64,

    /// Simulated analysis provider delay in milliseconds
    pub analysis_delay_ms: u64,

    /// Upper bound on one analysis attempt before it fails with a timeout
    pub analysis_timeout_ms: u64,

    /// Simulated authentication provider delay in milliseconds
    pub auth_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig {
                splash_delay_ms: 1200,
                analysis_delay_ms: 3000,
                analysis_timeout_ms: 10_000,
                auth_delay_ms: 1500,
            },
            offline_mode: false,
        }
    }
}

impl AppConfig {
    /// Maps a TOML value onto the config, field by field; a missing key
    /// keeps its default.
    pub fn from_toml(value: &toml::Value) -> Self {
        let defaults = AppConfig::default();

        let timing_ms = |key: &str, default: u64| -> u64 {
            value
                .get("timing")
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_integer())
                .map(|v| v as u64)
                .unwrap_or(default)
        };

        Self {
            timing: TimingConfig {
                splash_delay_ms: timing_ms("splash_delay_ms", defaults.timing.splash_delay_ms),
                analysis_delay_ms: timing_ms(
                    "analysis_delay_ms",
                    defaults.timing.analysis_delay_ms,
                ),
                analysis_timeout_ms: timing_ms(
                    "analysis_timeout_ms",
                    defaults.timing.analysis_timeout_ms,
                ),
                auth_delay_ms: timing_ms("auth_delay_ms", defaults.timing.auth_delay_ms),
            },
            offline_mode: value
                .get("flags")
                .and_then(|f| f.get("offline_mode"))
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.offline_mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_product_delays() {
        let config = AppConfig::default();

        assert_eq!(config.timing.splash_delay_ms, 1200);
        assert_eq!(config.timing.analysis_delay_ms, 3000);
        assert_eq!(config.timing.auth_delay_ms, 1500);
        assert!(config.timing.analysis_timeout_ms > config.timing.analysis_delay_ms);
        assert!(!config.offline_mode);
    }

    #[test]
    fn from_toml_overrides_only_the_present_keys() {
        let value: toml::Value = r#"
            [timing]
            splash_delay_ms = 500

            [flags]
            offline_mode = true
        "#
        .parse()
        .unwrap();

        let config = AppConfig::from_toml(&value);

        assert_eq!(config.timing.splash_delay_ms, 500);
        assert!(config.offline_mode);
        assert_eq!(
            config.timing.analysis_delay_ms,
            AppConfig::default().timing.analysis_delay_ms
        );
    }
}
