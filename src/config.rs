//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Environment variables: `RSTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Unified configuration for rstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Keys inserted into the tree when the menu starts (default: 5 7 3 9 1)
    pub seed_keys: Vec<i64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_keys: vec![5, 7, 3, 9, 1],
        }
    }
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
}

fn load_file(path: &Path) -> Result<Settings, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| AppError::Config(format!("parse {}: {}", path.display(), e)))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// 1. Compiled defaults
    /// 2. Global config file, if present (replaces defaults)
    /// 3. `RSTREE_*` environment variables (explicit overrides)
    pub fn load() -> Result<Self, AppError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = load_file(&global_path)?;
            }
        }

        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply RSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, AppError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("RSTREE")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("seed_keys"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get::<Vec<i64>>("seed_keys") {
            settings.seed_keys = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(format!("serialize config: {e}")))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rstree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rstree/rstree.toml
#   Env:    RSTREE_* environment variables (e.g. RSTREE_SEED_KEYS="5,7,3,9,1")

# Keys inserted into the tree when the interactive menu starts
# seed_keys = [5, 7, 3, 9, 1]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> AppError {
    AppError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_default_seed_keys() {
        let settings = Settings::load().expect("load defaults");
        assert!(!settings.seed_keys.is_empty());
    }

    #[test]
    fn given_default_settings_when_rendered_then_roundtrips_through_toml() {
        let settings = Settings::default();
        let rendered = settings.to_toml().expect("serialize");
        let parsed: Settings = toml::from_str(&rendered).expect("parse");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_generated_then_mentions_seed_keys() {
        assert!(Settings::template().contains("seed_keys"));
    }
}
