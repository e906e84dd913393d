//! Runtime configuration.
//!
//! Defaults, overlaid by a JSON file named in `VISION_DASH_CONFIG`, with
//! `VISION_DASH_DATA` taking the final say over the data directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::YearRange;
use crate::i18n::Language;

pub const CONFIG_ENV: &str = "VISION_DASH_CONFIG";
pub const DATA_DIR_ENV: &str = "VISION_DASH_DATA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Directory holding one table per pillar.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub language: Language,
    /// Replaces the built-in benchmark table when set.
    #[serde(default)]
    pub benchmarks_path: Option<PathBuf>,
    /// Initial slider selection; clamped to the data on load.
    #[serde(default)]
    pub initial_range: Option<YearRange>,
    /// TrueType/OpenType font with Arabic glyphs, added as a fallback to
    /// egui's built-in fonts.
    #[serde(default)]
    pub arabic_font: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            language: Language::default(),
            benchmarks_path: None,
            initial_range: None,
            arabic_font: None,
        }
    }
}

impl DashboardConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        let file = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let data_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve(file.as_deref(), data_dir)
    }

    /// Defaults, then `file` if given, then the `data_dir` override.
    pub fn resolve(file: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        if let Some(dir) = data_dir {
            log::debug!("data directory overridden by {DATA_DIR_ENV}: {}", dir.display());
            config.data_dir = dir;
        }
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: DashboardConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let config = DashboardConfig::resolve(None, None).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"language": "arabic", "initial_range": {{"min": 2018, "max": 2022}}}}"#).unwrap();

        let config = DashboardConfig::resolve(Some(file.path()), None).unwrap();
        assert_eq!(config.language, Language::Arabic);
        assert_eq!(config.initial_range, Some(YearRange { min: 2018, max: 2022 }));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.benchmarks_path.is_none());
    }

    #[test]
    fn data_dir_override_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data_dir": "from_file"}}"#).unwrap();

        let config =
            DashboardConfig::resolve(Some(file.path()), Some(PathBuf::from("from_env"))).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("from_env"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardConfig::resolve(Some(&dir.path().join("nope.json")), None).unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
    }
}
