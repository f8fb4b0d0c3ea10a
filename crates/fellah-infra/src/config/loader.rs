//! TOML configuration loading.
//!
//! A missing file, an empty file, or a missing key all fall back to the
//! defaults field by field; configuration values are facts, not
//! something to validate here.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use fellah_core::config::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "fellah.toml";

/// Loads the app configuration from `path`, falling back to defaults.
pub async fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file missing, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    let value: toml::Value = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse config file: {}", e))?;
    Ok(AppConfig::from_toml(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(&temp_dir.path().join("nonexistent.toml"))
            .await
            .unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn empty_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "  \n").unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn partial_file_overrides_only_the_present_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(
            &path,
            r#"
                [timing]
                splash_delay_ms = 500

                [flags]
                offline_mode = true
            "#,
        )
        .unwrap();

        let config = load_config(&path).await.unwrap();

        assert_eq!(config.timing.splash_delay_ms, 500);
        assert!(config.offline_mode);
        // Untouched keys keep their defaults.
        assert_eq!(
            config.timing.analysis_delay_ms,
            AppConfig::default().timing.analysis_delay_ms
        );
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "timing = {").unwrap();

        assert!(load_config(&path).await.is_err());
    }
}
