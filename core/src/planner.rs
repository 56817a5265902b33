//! Dive planning built from the table lookups.
//!
//! A first dive runs altitude correction, then the no-decompression limit,
//! then either the group letter or the decompression schedule. A repetitive
//! dive first credits the surface interval, then adds residual nitrogen time to
//! the planned bottom time, and only then makes the same NDL/decompression
//! decision with the total time.
//!
//! The planner keeps no state between calls. The group a dive ends in is
//! returned to the caller, who passes it back for the next dive.

use std::time::Duration;

use tracing::debug;

use crate::error::PlanError;
use crate::interval::SurfaceInterval;
use crate::models::{DecoSchedule, GroupLetter};
use crate::tables::ReferenceTables;

pub const FEET_PER_METER: f64 = 3.28084;

pub fn feet_from_meters(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Raw parameters of a planned dive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiveParameters {
    /// Actual maximum depth (feet of seawater).
    pub depth_ft: f64,
    pub bottom_time_min: u32,
    /// Dive site altitude, 0 at sea level.
    pub altitude_ft: f64,
}

impl DiveParameters {
    pub fn from_meters(depth_m: f64, bottom_time_min: u32, altitude_ft: f64) -> Self {
        Self::from_meters_with(depth_m, FEET_PER_METER, bottom_time_min, altitude_ft)
    }

    /// Metric depth converted with an explicit feet-per-meter factor.
    pub fn from_meters_with(
        depth_m: f64,
        feet_per_meter: f64,
        bottom_time_min: u32,
        altitude_ft: f64,
    ) -> Self {
        Self {
            depth_ft: depth_m * feet_per_meter,
            bottom_time_min,
            altitude_ft,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DiveOutcome {
    NoDecompression { group: GroupLetter },
    Decompression { schedule: DecoSchedule },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DivePlan {
    pub equivalent_depth_ft: f64,
    pub no_decompression_limit_min: u32,
    pub outcome: DiveOutcome,
}

impl DivePlan {
    pub fn requires_decompression(&self) -> bool {
        matches!(self.outcome, DiveOutcome::Decompression { .. })
    }

    /// Group the diver surfaces in, carried into the next surface interval.
    pub fn end_group(&self) -> GroupLetter {
        match &self.outcome {
            DiveOutcome::NoDecompression { group } => *group,
            DiveOutcome::Decompression { schedule } => schedule.final_group,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepetitivePlan {
    pub group_after_interval: GroupLetter,
    pub residual_nitrogen_time_min: u32,
    /// Residual nitrogen time plus planned bottom time.
    pub total_bottom_time_min: u32,
    pub plan: DivePlan,
}

/// Composes the lookup engine into first-dive and repetitive-dive plans.
#[derive(Clone, Copy, Debug)]
pub struct DivePlanner<'a> {
    tables: &'a ReferenceTables,
    baseline: GroupLetter,
    feet_per_meter: f64,
}

impl<'a> DivePlanner<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self {
            tables,
            baseline: GroupLetter::BASELINE,
            feet_per_meter: FEET_PER_METER,
        }
    }

    /// Group assumed when a repetitive dive is planned without a prior group.
    pub fn with_baseline(mut self, baseline: GroupLetter) -> Self {
        self.baseline = baseline;
        self
    }

    /// Conversion factor used for metric depths.
    pub fn with_feet_per_meter(mut self, feet_per_meter: f64) -> Self {
        self.feet_per_meter = feet_per_meter;
        self
    }

    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    pub fn feet_per_meter(&self) -> f64 {
        self.feet_per_meter
    }

    /// Dive parameters from a metric depth, converted with this planner's factor.
    pub fn parameters_from_meters(
        &self,
        depth_m: f64,
        bottom_time_min: u32,
        altitude_ft: f64,
    ) -> DiveParameters {
        DiveParameters::from_meters_with(depth_m, self.feet_per_meter, bottom_time_min, altitude_ft)
    }

    pub fn plan_dive(&self, params: &DiveParameters) -> Result<DivePlan, PlanError> {
        let equivalent_depth_ft = self.equivalent_depth(params)?;
        self.plan_at_equivalent_depth(equivalent_depth_ft, params.bottom_time_min)
    }

    /// Plan a dive following an earlier one.
    ///
    /// `prior_group` is the group the previous dive ended in; `None` falls back
    /// to the planner's baseline.
    pub fn plan_repetitive_dive(
        &self,
        prior_group: Option<GroupLetter>,
        interval: SurfaceInterval,
        params: &DiveParameters,
    ) -> Result<RepetitivePlan, PlanError> {
        let prior_group = prior_group.unwrap_or_else(|| {
            debug!(baseline = %self.baseline, "no prior group, assuming baseline");
            self.baseline
        });
        let equivalent_depth_ft = self.equivalent_depth(params)?;

        let group_after_interval = self
            .tables
            .group_after_surface_interval(prior_group, interval.minutes());

        let residual_nitrogen_time_min = self
            .tables
            .residual_nitrogen_time(equivalent_depth_ft, group_after_interval)
            .ok_or(PlanError::ResidualNitrogenUnavailable {
                group: group_after_interval,
                depth_ft: equivalent_depth_ft,
            })?;

        let total_bottom_time_min =
            residual_nitrogen_time_min.saturating_add(params.bottom_time_min);
        let plan = self.plan_at_equivalent_depth(equivalent_depth_ft, total_bottom_time_min)?;

        Ok(RepetitivePlan {
            group_after_interval,
            residual_nitrogen_time_min,
            total_bottom_time_min,
            plan,
        })
    }

    pub fn no_fly_time(&self, plan: &DivePlan) -> Duration {
        self.tables.no_fly_time(plan.requires_decompression())
    }

    fn equivalent_depth(&self, params: &DiveParameters) -> Result<f64, PlanError> {
        if !params.depth_ft.is_finite() || params.depth_ft < 0.0 {
            return Err(PlanError::MalformedDepth {
                value: params.depth_ft,
            });
        }
        if !params.altitude_ft.is_finite() {
            return Err(PlanError::MalformedDepth {
                value: params.altitude_ft,
            });
        }
        Ok(self
            .tables
            .altitude_correction(params.depth_ft, params.altitude_ft))
    }

    fn plan_at_equivalent_depth(
        &self,
        equivalent_depth_ft: f64,
        bottom_time_min: u32,
    ) -> Result<DivePlan, PlanError> {
        let class = self
            .tables
            .depth_class(equivalent_depth_ft)
            .ok_or_else(|| PlanError::OutOfTableRange {
                table: "no-decompression".to_string(),
                query: equivalent_depth_ft,
            })?;
        let no_decompression_limit_min = class.no_decompression_limit_min;

        let outcome = if bottom_time_min <= no_decompression_limit_min {
            DiveOutcome::NoDecompression {
                group: self.tables.group_letter(equivalent_depth_ft, bottom_time_min),
            }
        } else {
            let schedule = self
                .tables
                .deco_schedule(equivalent_depth_ft, bottom_time_min)
                .ok_or(PlanError::NoScheduleAvailable {
                    depth_ft: equivalent_depth_ft,
                    bottom_time_min,
                })?;
            DiveOutcome::Decompression { schedule }
        };

        Ok(DivePlan {
            equivalent_depth_ft,
            no_decompression_limit_min,
            outcome,
        })
    }
}
