//! Read-only reference tables.
//!
//! A [`ReferenceTables`] value is built once (from the embedded US Navy Rev 7
//! data or from a TOML file) and never mutated afterwards, so one instance can be
//! shared by any number of concurrent callers.

mod usn_rev7;

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TableError;
use crate::lookup::is_strictly_ascending;
use crate::models::{
    AltitudeFactor, DecoDepth, DepthClass, ResidualNitrogenRow, SafetyRules, SurfaceIntervalRule,
    UNLIMITED_MINUTES,
};

/// Every table the lookup engine queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub safety: SafetyRules,
    /// Depth classes ascending, each with its NDL and group ranges.
    pub depth_classes: Vec<DepthClass>,
    /// Decompression rows per depth class, ascending.
    pub decompression: Vec<DecoDepth>,
    pub surface_intervals: Vec<SurfaceIntervalRule>,
    pub residual_nitrogen: Vec<ResidualNitrogenRow>,
    /// Altitude thresholds ascending.
    pub altitude_factors: Vec<AltitudeFactor>,
}

impl ReferenceTables {
    /// Embedded US Navy Diving Manual Rev 7 air tables.
    pub fn usn_rev7() -> Self {
        usn_rev7::build()
    }

    /// Process-wide instance of the embedded tables, built on first use.
    pub fn shared() -> &'static ReferenceTables {
        static SHARED: OnceLock<ReferenceTables> = OnceLock::new();
        SHARED.get_or_init(Self::usn_rev7)
    }

    /// Decode and validate tables from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, TableError> {
        let tables: ReferenceTables =
            toml::from_str(contents).map_err(|e| TableError::Parse(e.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load and validate tables from a TOML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| TableError::Io(format!("{}: {}", path.display(), e)))?;
        let tables = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            depth_classes = tables.depth_classes.len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    pub fn to_toml_string(&self) -> Result<String, TableError> {
        toml::to_string_pretty(self).map_err(|e| TableError::Encode(e.to_string()))
    }

    /// Check the ordering and contiguity the lookups rely on.
    pub fn validate(&self) -> Result<(), TableError> {
        self.validate_depth_classes()?;
        self.validate_decompression()?;
        self.validate_surface_intervals()?;
        self.validate_residual_nitrogen()?;
        self.validate_altitude_factors()
    }

    fn validate_depth_classes(&self) -> Result<(), TableError> {
        const TABLE: &str = "no-decompression";
        if self.depth_classes.is_empty() {
            return Err(TableError::Empty { table: TABLE });
        }
        ascending(TABLE, &self.depth_classes, |c| c.depth_ft)?;
        for class in &self.depth_classes {
            let bounds: Vec<(u32, u32)> =
                class.groups.iter().map(|g| (g.from_min, g.to_min)).collect();
            contiguous(TABLE, &class.depth_ft.to_string(), &bounds)?;
        }
        Ok(())
    }

    fn validate_decompression(&self) -> Result<(), TableError> {
        const TABLE: &str = "decompression";
        ascending(TABLE, &self.decompression, |d| d.depth_ft)?;
        for depth in &self.decompression {
            if depth.entries.is_empty() {
                return Err(TableError::Empty { table: TABLE });
            }
            ascending(TABLE, &depth.entries, |e| e.bottom_time_min)?;
        }
        Ok(())
    }

    fn validate_surface_intervals(&self) -> Result<(), TableError> {
        const TABLE: &str = "surface interval";
        for rule in &self.surface_intervals {
            let bounds: Vec<(u32, u32)> =
                rule.ranges.iter().map(|r| (r.from_min, r.to_min)).collect();
            contiguous(TABLE, &rule.group.to_string(), &bounds)?;
        }
        Ok(())
    }

    fn validate_residual_nitrogen(&self) -> Result<(), TableError> {
        const TABLE: &str = "residual nitrogen";
        for row in &self.residual_nitrogen {
            if row.depths.is_empty() {
                return Err(TableError::Empty { table: TABLE });
            }
            ascending(TABLE, &row.depths, |e| e.depth_ft)?;
        }
        Ok(())
    }

    fn validate_altitude_factors(&self) -> Result<(), TableError> {
        const TABLE: &str = "altitude";
        if self.altitude_factors.is_empty() {
            return Err(TableError::Empty { table: TABLE });
        }
        ascending(TABLE, &self.altitude_factors, |a| a.altitude_ft)?;
        match self
            .altitude_factors
            .iter()
            .find(|a| !a.factor.is_finite() || a.factor < 1.0)
        {
            Some(bad) => Err(TableError::InvalidFactor {
                altitude_ft: bad.altitude_ft,
                factor: bad.factor,
            }),
            None => Ok(()),
        }
    }
}

fn ascending<T, K, F>(table: &'static str, items: &[T], key: F) -> Result<(), TableError>
where
    K: PartialOrd + ToString,
    F: Fn(&T) -> K,
{
    if is_strictly_ascending(items, &key) {
        return Ok(());
    }
    let offending = items
        .windows(2)
        .find(|pair| !(key(&pair[0]) < key(&pair[1])))
        .map(|pair| key(&pair[1]).to_string())
        .unwrap_or_default();
    Err(TableError::Unsorted {
        table,
        key: offending,
    })
}

/// Inclusive `(from, to)` ranges must start at zero and follow each other without
/// gaps. Only the last range may be open-ended.
fn contiguous(table: &'static str, key: &str, bounds: &[(u32, u32)]) -> Result<(), TableError> {
    if bounds.is_empty() {
        return Err(TableError::Empty { table });
    }
    let mut expected_from = 0u32;
    for (i, &(from, to)) in bounds.iter().enumerate() {
        let open_ended_too_early = to == UNLIMITED_MINUTES && i + 1 < bounds.len();
        if from != expected_from || to < from || open_ended_too_early {
            return Err(TableError::NonContiguous {
                table,
                key: key.to_string(),
            });
        }
        expected_from = to.saturating_add(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupLetter;

    #[test]
    fn test_embedded_tables_validate() {
        let tables = ReferenceTables::usn_rev7();
        assert_eq!(tables.validate(), Ok(()));
        assert_eq!(tables.depth_classes.len(), 24);
        assert_eq!(tables.surface_intervals.len(), GroupLetter::ALL.len());
        assert_eq!(tables.residual_nitrogen.len(), GroupLetter::ALL.len());
        assert_eq!(tables.altitude_factors.len(), 10);
    }

    #[test]
    fn test_embedded_group_columns() {
        let tables = ReferenceTables::usn_rev7();

        let shallow = &tables.depth_classes[0];
        assert_eq!(shallow.depth_ft, 10.0);
        assert_eq!(shallow.no_decompression_limit_min, UNLIMITED_MINUTES);
        let last = shallow.groups.last().unwrap();
        assert_eq!(last.group, GroupLetter::F);
        assert_eq!(last.from_min, 427);
        assert_eq!(last.to_min, UNLIMITED_MINUTES);

        // A sixteenth column is the Z designator.
        let thirty = tables
            .depth_classes
            .iter()
            .find(|c| c.depth_ft == 30.0)
            .unwrap();
        assert_eq!(thirty.groups.len(), 16);
        assert_eq!(thirty.groups[14].group, GroupLetter::O);
        assert_eq!(thirty.groups[15].group, GroupLetter::Z);
        assert_eq!(thirty.groups[15].to_min, thirty.no_decompression_limit_min);
    }

    #[test]
    fn test_limited_classes_end_at_ndl() {
        let tables = ReferenceTables::usn_rev7();
        for class in &tables.depth_classes {
            let last = class.groups.last().unwrap();
            assert_eq!(
                last.to_min, class.no_decompression_limit_min,
                "class {} fsw",
                class.depth_ft
            );
        }
    }

    #[test]
    fn test_first_deco_row_is_the_ndl() {
        let tables = ReferenceTables::usn_rev7();
        for deco in &tables.decompression {
            let class = tables
                .depth_classes
                .iter()
                .find(|c| c.depth_ft == deco.depth_ft)
                .unwrap();
            let first = &deco.entries[0];
            assert_eq!(first.bottom_time_min, class.no_decompression_limit_min);
            assert_eq!(first.schedule().total_stop_time(), 0);
        }
    }

    #[test]
    fn test_shared_is_one_instance() {
        let a = ReferenceTables::shared();
        let b = ReferenceTables::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, &ReferenceTables::usn_rev7());
    }

    #[test]
    fn test_toml_roundtrip() {
        let tables = ReferenceTables::usn_rev7();
        let text = tables.to_toml_string().unwrap();
        let parsed = ReferenceTables::from_toml_str(&text).unwrap();
        assert_eq!(parsed, tables);
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.toml");
        let text = ReferenceTables::usn_rev7().to_toml_string().unwrap();
        std::fs::write(&path, text).unwrap();

        let tables = ReferenceTables::load_from_path(&path).unwrap();
        assert_eq!(tables.depth_classes.len(), 24);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ReferenceTables::load_from_path("/nonexistent/tables.toml");
        assert!(matches!(result, Err(TableError::Io(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = ReferenceTables::from_toml_str("depth_classes = 3");
        assert!(matches!(result, Err(TableError::Parse(_))));
    }

    #[test]
    fn test_rejects_unsorted_depths() {
        let mut tables = ReferenceTables::usn_rev7();
        tables.depth_classes.swap(3, 4);
        assert!(matches!(
            tables.validate(),
            Err(TableError::Unsorted {
                table: "no-decompression",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_gap_in_group_ranges() {
        let mut tables = ReferenceTables::usn_rev7();
        tables.depth_classes[5].groups[2].from_min += 1;
        assert!(matches!(
            tables.validate(),
            Err(TableError::NonContiguous { .. })
        ));
    }

    #[test]
    fn test_rejects_surface_interval_not_from_zero() {
        let mut tables = ReferenceTables::usn_rev7();
        tables.surface_intervals[2].ranges[0].from_min = 10;
        assert_eq!(
            tables.validate(),
            Err(TableError::NonContiguous {
                table: "surface interval",
                key: "C".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_shrinking_altitude_factor() {
        let mut tables = ReferenceTables::usn_rev7();
        tables.altitude_factors[0].factor = 0.9;
        assert!(matches!(
            tables.validate(),
            Err(TableError::InvalidFactor { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_altitude_table() {
        let mut tables = ReferenceTables::usn_rev7();
        tables.altitude_factors.clear();
        assert_eq!(
            tables.validate(),
            Err(TableError::Empty { table: "altitude" })
        );
    }
}
