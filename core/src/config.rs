//! # Planner Configuration
//!
//! Loads planner settings from a `divetables.toml` file: where the reference
//! tables come from and which group a repetitive dive assumes when the caller
//! has no prior group.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::TableError;
use crate::models::GroupLetter;
use crate::planner::{DivePlanner, FEET_PER_METER};
use crate::tables::ReferenceTables;

pub const DEFAULT_CONFIG_FILE: &str = "divetables.toml";

/// Planner configuration loaded from divetables.toml
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub tables: TablesConfig,
    pub planning: PlanningConfig,
}

/// Reference table source
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TablesConfig {
    /// TOML table file replacing the embedded Rev 7 tables
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Group assumed for a repetitive dive without a prior group
    pub baseline_group: GroupLetter,
    /// Conversion factor for depths entered in meters
    pub feet_per_meter: f64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        PlanningConfig {
            baseline_group: GroupLetter::BASELINE,
            feet_per_meter: FEET_PER_METER,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from divetables.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<PlannerConfig>(&contents) {
                Ok(mut config) => {
                    let factor = config.planning.feet_per_meter;
                    if !factor.is_finite() || factor <= 0.0 {
                        warn!(path = %path.display(), factor, "invalid feet_per_meter, using default");
                        config.planning.feet_per_meter = FEET_PER_METER;
                    }
                    info!(path = %path.display(), "loaded planner configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config file, using defaults");
                Self::default()
            }
        }
    }

    /// Tables named by the configuration, or the embedded Rev 7 tables.
    ///
    /// A configured table file that fails to load is an error: planning must not
    /// silently switch to different tables.
    pub fn reference_tables(&self) -> Result<ReferenceTables, TableError> {
        match &self.tables.path {
            Some(path) => ReferenceTables::load_from_path(path),
            None => Ok(ReferenceTables::usn_rev7()),
        }
    }

    /// Planner over `tables` using this configuration's baseline group and
    /// metric conversion factor.
    pub fn planner<'a>(&self, tables: &'a ReferenceTables) -> DivePlanner<'a> {
        DivePlanner::new(tables)
            .with_baseline(self.planning.baseline_group)
            .with_feet_per_meter(self.planning.feet_per_meter)
    }

    pub fn to_toml_string(&self) -> Result<String, TableError> {
        toml::to_string_pretty(self).map_err(|e| TableError::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::SurfaceInterval;
    use crate::planner::DiveParameters;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.tables.path, None);
        assert_eq!(config.planning.baseline_group, GroupLetter::A);
        assert_eq!(config.planning.feet_per_meter, FEET_PER_METER);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = PlannerConfig {
            tables: TablesConfig {
                path: Some(PathBuf::from("/etc/divetables/rev7.toml")),
            },
            planning: PlanningConfig {
                baseline_group: GroupLetter::B,
                feet_per_meter: 3.3,
            },
        };
        let toml_str = config.to_toml_string().unwrap();
        let parsed: PlannerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: PlannerConfig = toml::from_str("[planning]\nbaseline_group = \"C\"\n").unwrap();
        assert_eq!(parsed.planning.baseline_group, GroupLetter::C);
        assert_eq!(parsed.planning.feet_per_meter, FEET_PER_METER);
        assert_eq!(parsed.tables.path, None);
    }

    #[test]
    fn test_feet_per_meter_reaches_planner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[planning]\nfeet_per_meter = 3.3\n").unwrap();

        let config = PlannerConfig::load_from_path(&path);
        assert_eq!(config.planning.feet_per_meter, 3.3);

        let tables = config.reference_tables().unwrap();
        let planner = config.planner(&tables);
        assert_eq!(planner.feet_per_meter(), 3.3);
        let params = planner.parameters_from_meters(10.0, 20, 0.0);
        assert!((params.depth_ft - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_feet_per_meter_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[planning]\nbaseline_group = \"B\"\nfeet_per_meter = 0.0\n").unwrap();

        let config = PlannerConfig::load_from_path(&path);
        assert_eq!(config.planning.baseline_group, GroupLetter::B);
        assert_eq!(config.planning.feet_per_meter, FEET_PER_METER);
    }

    #[test]
    fn test_load_directory_path_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlannerConfig::load_from_path(dir.path());
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = PlannerConfig::load_from_path("/nonexistent/path");
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[planning]\nbaseline_group = \"Q\"\n").unwrap();
        let config = PlannerConfig::load_from_path(&path);
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_reference_tables_from_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let tables_path = dir.path().join("tables.toml");
        let mut tables = ReferenceTables::usn_rev7();
        tables.safety.no_fly_hours_no_decompression = 18;
        fs::write(&tables_path, tables.to_toml_string().unwrap()).unwrap();

        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config_text = format!("[tables]\npath = {:?}\n", tables_path.display().to_string());
        fs::write(&config_path, config_text).unwrap();

        let config = PlannerConfig::load_from_path(&config_path);
        let loaded = config.reference_tables().unwrap();
        assert_eq!(loaded.safety.no_fly_hours_no_decompression, 18);
    }

    #[test]
    fn test_missing_table_file_is_an_error() {
        let config = PlannerConfig {
            tables: TablesConfig {
                path: Some(PathBuf::from("/nonexistent/tables.toml")),
            },
            ..PlannerConfig::default()
        };
        assert!(matches!(config.reference_tables(), Err(TableError::Io(_))));
    }

    #[test]
    fn test_planner_uses_configured_baseline() {
        let config = PlannerConfig {
            planning: PlanningConfig {
                baseline_group: GroupLetter::C,
                ..PlanningConfig::default()
            },
            ..PlannerConfig::default()
        };
        let tables = config.reference_tables().unwrap();
        let params = DiveParameters {
            depth_ft: 40.0,
            bottom_time_min: 10,
            altitude_ft: 0.0,
        };
        let plan = config
            .planner(&tables)
            .plan_repetitive_dive(None, SurfaceInterval::from_minutes(10), &params)
            .unwrap();
        assert_eq!(plan.group_after_interval, GroupLetter::C);
    }
}
