//! Catalog configuration
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! uksi_path = "data/uksi.db"
//! observations_path = "data/observations.db"
//!
//! [search]
//! oversample_factor = 3
//! recent_window_days = 30
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uksi_core::SearchConfig;

use crate::error::{Result, SqliteError};

/// Where the databases live and how search behaves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// UKSI reference extract (`uksi.db`); required
    pub uksi_path: PathBuf,

    /// Observations database used for ranking; ranking is skipped when absent
    #[serde(default)]
    pub observations_path: Option<PathBuf>,

    #[serde(default)]
    pub search: SearchConfig,
}

impl CatalogConfig {
    pub fn new(uksi_path: impl Into<PathBuf>) -> Self {
        Self {
            uksi_path: uksi_path.into(),
            observations_path: None,
            search: SearchConfig::default(),
        }
    }

    pub fn with_observations(mut self, path: impl Into<PathBuf>) -> Self {
        self.observations_path = Some(path.into());
        self
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Reject settings that would make every search empty or unbounded.
    pub fn validate(&self) -> Result<()> {
        if self.uksi_path.as_os_str().is_empty() {
            return Err(SqliteError::Config("uksi_path must not be empty".into()));
        }
        if self.search.oversample_factor == 0 {
            return Err(SqliteError::Config(
                "search.oversample_factor must be at least 1".into(),
            ));
        }
        if self.search.max_hierarchy_depth == 0 {
            return Err(SqliteError::Config(
                "search.max_hierarchy_depth must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_search_defaults() {
        let config = CatalogConfig::from_toml(r#"uksi_path = "uksi.db""#).unwrap();
        assert_eq!(config.uksi_path, PathBuf::from("uksi.db"));
        assert_eq!(config.observations_path, None);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = CatalogConfig::from_toml(
            r#"
            uksi_path = "data/uksi.db"
            observations_path = "data/observations.db"

            [search]
            oversample_factor = 4
            recent_window_days = 14
            "#,
        )
        .unwrap();
        assert_eq!(
            config.observations_path,
            Some(PathBuf::from("data/observations.db"))
        );
        assert_eq!(config.search.oversample_factor, 4);
        assert_eq!(config.search.recent_window_days, 14);
        assert_eq!(config.search.min_query_chars, 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            CatalogConfig::from_toml("observations_path = \"o.db\""),
            Err(SqliteError::Toml(_))
        ));
        assert!(matches!(
            CatalogConfig::from_toml("uksi_path = \"u.db\"\n[search]\noversample_factor = 0"),
            Err(SqliteError::Config(_))
        ));
    }
}
