//! Foreign-function surface over the shared embedded tables.
//!
//! These free functions are exported through the `divetables.udl` scaffolding
//! and mirror the lookup engine one-to-one, plus the composed planners.

use std::time::Duration;

use crate::error::PlanError;
use crate::interval::{self, SurfaceInterval};
use crate::models::{DecoSchedule, GroupLetter};
use crate::planner::{DiveParameters, DivePlan, DivePlanner, RepetitivePlan};
use crate::tables::ReferenceTables;

fn tables() -> &'static ReferenceTables {
    ReferenceTables::shared()
}

pub fn altitude_correction(depth_ft: f64, altitude_ft: f64) -> f64 {
    tables().altitude_correction(depth_ft, altitude_ft)
}

pub fn no_deco_limit(equivalent_depth_ft: f64) -> u32 {
    tables().no_deco_limit(equivalent_depth_ft)
}

pub fn deco_schedule(equivalent_depth_ft: f64, bottom_time_min: u32) -> Option<DecoSchedule> {
    tables().deco_schedule(equivalent_depth_ft, bottom_time_min)
}

pub fn group_letter(equivalent_depth_ft: f64, bottom_time_min: u32) -> GroupLetter {
    tables().group_letter(equivalent_depth_ft, bottom_time_min)
}

pub fn group_after_surface_interval(group: GroupLetter, interval_min: u32) -> GroupLetter {
    tables().group_after_surface_interval(group, interval_min)
}

pub fn residual_nitrogen_time(equivalent_depth_ft: f64, group: GroupLetter) -> Option<u32> {
    tables().residual_nitrogen_time(equivalent_depth_ft, group)
}

pub fn no_fly_time(was_deco_dive: bool) -> Duration {
    tables().no_fly_time(was_deco_dive)
}

/// Surface interval in minutes from `HH:MM` text.
pub fn parse_surface_interval(text: String) -> Result<u32, PlanError> {
    SurfaceInterval::parse(&text).map(|interval| interval.minutes())
}

pub fn parse_oxygen_percent(text: String) -> Result<u8, PlanError> {
    interval::parse_oxygen_percent(&text)
}

pub fn plan_dive(params: DiveParameters) -> Result<DivePlan, PlanError> {
    DivePlanner::new(tables()).plan_dive(&params)
}

pub fn plan_repetitive_dive(
    prior_group: Option<GroupLetter>,
    surface_interval_min: u32,
    params: DiveParameters,
) -> Result<RepetitivePlan, PlanError> {
    DivePlanner::new(tables()).plan_repetitive_dive(
        prior_group,
        SurfaceInterval::from_minutes(surface_interval_min),
        &params,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_match_engine() {
        let engine = ReferenceTables::usn_rev7();
        assert_eq!(no_deco_limit(65.6), engine.no_deco_limit(65.6));
        assert_eq!(group_letter(65.6, 30), engine.group_letter(65.6, 30));
        assert_eq!(deco_schedule(60.0, 75), engine.deco_schedule(60.0, 75));
        assert_eq!(
            residual_nitrogen_time(49.2, GroupLetter::A),
            engine.residual_nitrogen_time(49.2, GroupLetter::A)
        );
        assert_eq!(altitude_correction(33.0, 0.0), 33.0);
        assert!(altitude_correction(33.0, f64::NAN).is_nan());
        assert_eq!(no_fly_time(true), engine.no_fly_time(true));
    }

    #[test]
    fn test_surface_interval_text_flow() {
        let minutes = parse_surface_interval("01:00".to_string()).unwrap();
        assert_eq!(minutes, 60);
        let group = group_after_surface_interval(GroupLetter::A, minutes);
        assert_eq!(group, GroupLetter::A);
        assert!(parse_surface_interval("one hour".to_string()).is_err());
    }

    #[test]
    fn test_plan_exports() {
        let first = plan_dive(DiveParameters::from_meters(20.0, 30, 0.0)).unwrap();
        let repeat = plan_repetitive_dive(
            Some(first.end_group()),
            parse_surface_interval("02:00".to_string()).unwrap(),
            DiveParameters::from_meters(15.0, 20, 0.0),
        )
        .unwrap();
        assert!(repeat.group_after_interval <= first.end_group());
        assert_eq!(
            repeat.total_bottom_time_min,
            repeat.residual_nitrogen_time_min + 20
        );
        assert_eq!(parse_oxygen_percent("32".to_string()), Ok(32));
    }
}
