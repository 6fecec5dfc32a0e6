use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::feedback::{FeedbackLabels, FeedbackOptions, RevertPolicy};
use crate::generator::UuidFormat;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_revert_delay_ms")]
    pub revert_delay_ms: u64,

    #[serde(default = "default_copy_label")]
    pub copy_label: String,

    #[serde(default = "default_copied_label")]
    pub copied_label: String,

    #[serde(default)]
    pub revert_policy: RevertPolicy,

    #[serde(default = "default_true")]
    pub optimistic_feedback: bool,

    #[serde(default)]
    pub format: UuidFormat,

    #[serde(default)]
    pub uppercase: bool,

    #[serde(default = "default_history_size")]
    pub history_size: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_revert_delay_ms() -> u64 {
    2000
}

fn default_copy_label() -> String {
    "Copy".to_string()
}

fn default_copied_label() -> String {
    "Copied!".to_string()
}

fn default_true() -> bool {
    true
}

fn default_history_size() -> usize {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            revert_delay_ms: default_revert_delay_ms(),
            copy_label: default_copy_label(),
            copied_label: default_copied_label(),
            revert_policy: RevertPolicy::default(),
            optimistic_feedback: default_true(),
            format: UuidFormat::default(),
            uppercase: false,
            history_size: default_history_size(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        config.history_size = config.history_size.max(1);

        if config.copy_label == config.copied_label {
            bail!(
                "Invalid config file {}: copy_label and copied_label must differ (both are '{}')",
                path.display(),
                config.copy_label
            );
        }

        Ok(config)
    }

    pub fn feedback_options(&self) -> FeedbackOptions {
        FeedbackOptions {
            labels: FeedbackLabels {
                idle: self.copy_label.clone(),
                copied: self.copied_label.clone(),
            },
            revert_delay: Duration::from_millis(self.revert_delay_ms),
            policy: self.revert_policy,
            optimistic: self.optimistic_feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.revert_delay_ms, 2000);
        assert_eq!(config.copy_label, "Copy");
        assert_eq!(config.copied_label, "Copied!");
        assert_eq!(config.revert_policy, RevertPolicy::Redundant);
        assert!(config.optimistic_feedback);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("theme"));
        assert!(toml_str.contains("revert_policy = \"redundant\""));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        theme = "dark"
        revert_delay_ms = 750
        revert_policy = "debounce"
        format = "braced"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.revert_delay_ms, 750);
        assert_eq!(config.revert_policy, RevertPolicy::Debounce);
        assert_eq!(config.format, UuidFormat::Braced);
        assert_eq!(config.copy_label, "Copy");
    }

    #[test]
    fn test_feedback_options_from_config() {
        let config = Config {
            revert_delay_ms: 500,
            copied_label: "Done".to_string(),
            optimistic_feedback: false,
            ..Config::default()
        };

        let options = config.feedback_options();
        assert_eq!(options.revert_delay, Duration::from_millis(500));
        assert_eq!(options.labels.copied, "Done");
        assert_eq!(options.labels.idle, "Copy");
        assert!(!options.optimistic);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.history_size, 20);
    }

    #[test]
    fn test_load_from_file_clamps_history() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "history_size = 0\nuppercase = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.history_size, 1);
        assert!(config.uppercase);
    }

    #[test]
    fn test_load_rejects_identical_labels() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "copy_label = \"Copy\"\ncopied_label = \"Copy\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "revert_policy = \"sometimes\"").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
