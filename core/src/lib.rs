//! Stateless US Navy air table engine for dive planning.
//!
//! Reference tables are static data; every lookup and plan is a pure function
//! of the tables and the caller's parameters.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod interval;
pub mod lookup;
pub mod models;
pub mod planner;
pub mod tables;

uniffi::include_scaffolding!("divetables");

pub use api::{
    altitude_correction, deco_schedule, group_after_surface_interval, group_letter, no_deco_limit,
    no_fly_time, parse_oxygen_percent, parse_surface_interval, plan_dive, plan_repetitive_dive,
    residual_nitrogen_time,
};
pub use config::PlannerConfig;
pub use error::{PlanError, TableError};
pub use interval::SurfaceInterval;
pub use models::{
    AltitudeFactor, DecoDepth, DecoEntry, DecoSchedule, DecoStop, DepthClass, GroupLetter,
    GroupRange, IntervalRange, ResidualNitrogenEntry, ResidualNitrogenRow, SafetyRules,
    SurfaceIntervalRule, UNLIMITED_MINUTES,
};
pub use planner::{
    feet_from_meters, DiveOutcome, DiveParameters, DivePlan, DivePlanner, RepetitivePlan,
    FEET_PER_METER,
};
pub use tables::ReferenceTables;
