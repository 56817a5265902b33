use thiserror::Error;

use crate::models::GroupLetter;

/// Error type for dive planning requests.
///
/// A dive outside the tables' safe envelope is not an error: the lookups report
/// it with the `Z` group, a zero limit or an absent schedule. These variants
/// cover malformed input and plans the composed planner refuses to produce.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("{query} is beyond the last class of the {table} table")]
    OutOfTableRange { table: String, query: f64 },

    #[error("malformed surface interval '{input}': {reason}")]
    MalformedInterval { input: String, reason: String },

    #[error("malformed oxygen percentage '{input}'")]
    MalformedPercentage { input: String },

    #[error("invalid depth: {value}")]
    MalformedDepth { value: f64 },

    #[error("unknown repetitive group '{input}'")]
    UnknownGroup { input: String },

    #[error("no decompression schedule for {depth_ft} fsw / {bottom_time_min} min")]
    NoScheduleAvailable { depth_ft: f64, bottom_time_min: u32 },

    #[error("no residual nitrogen time for group {group} at {depth_ft} fsw")]
    ResidualNitrogenUnavailable { group: GroupLetter, depth_ft: f64 },
}

/// Error type for loading and validating reference tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("cannot read table file: {0}")]
    Io(String),

    #[error("table decode error: {0}")]
    Parse(String),

    #[error("table encode error: {0}")]
    Encode(String),

    #[error("{table} table is empty")]
    Empty { table: &'static str },

    #[error("{table} table keys are not strictly ascending at {key}")]
    Unsorted { table: &'static str, key: String },

    #[error("{table} table ranges are not contiguous from zero at {key}")]
    NonContiguous { table: &'static str, key: String },

    #[error("altitude factor {factor} at {altitude_ft} ft must be finite and at least 1.0")]
    InvalidFactor { altitude_ft: f64, factor: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_error_display() {
        let err = PlanError::OutOfTableRange {
            table: "no-decompression".to_string(),
            query: 200.0,
        };
        assert_eq!(
            err.to_string(),
            "200 is beyond the last class of the no-decompression table"
        );

        let err = PlanError::MalformedInterval {
            input: "1h".to_string(),
            reason: "expected HH:MM".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed surface interval '1h': expected HH:MM"
        );

        let err = PlanError::ResidualNitrogenUnavailable {
            group: GroupLetter::K,
            depth_ft: 130.0,
        };
        assert_eq!(
            err.to_string(),
            "no residual nitrogen time for group K at 130 fsw"
        );
    }

    #[test]
    fn test_table_error_display() {
        let err = TableError::NonContiguous {
            table: "surface interval",
            key: "C".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "surface interval table ranges are not contiguous from zero at C"
        );

        let err = TableError::Empty { table: "altitude" };
        assert_eq!(err.to_string(), "altitude table is empty");
    }
}
