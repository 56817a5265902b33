//! Table lookup engine.
//!
//! Pure queries over [`ReferenceTables`]. Every depth-, time- and
//! altitude-keyed lookup rounds up to the next tabulated class; what happens
//! past the last class depends on the table:
//!
//! - no-decompression, group and decompression tables report "out of range"
//!   (limit 0, group `Z`, no schedule);
//! - the altitude table clamps to its highest threshold;
//! - a surface interval past the last range resets the diver to group `A`;
//! - a residual nitrogen depth past the last class has no answer.

use std::time::Duration;

use tracing::debug;

use crate::lookup::round_up;
use crate::models::{DecoEntry, DecoSchedule, DepthClass, GroupLetter};
use crate::tables::ReferenceTables;

const SECONDS_PER_HOUR: u64 = 3600;

impl ReferenceTables {
    /// Convert actual depth at a site altitude to sea-level equivalent depth.
    ///
    /// At or below sea level the depth is returned unchanged. Above the highest
    /// tabulated threshold the highest factor applies. A NaN altitude yields a
    /// NaN depth, which every depth lookup treats as out of range.
    pub fn altitude_correction(&self, depth_ft: f64, altitude_ft: f64) -> f64 {
        if altitude_ft.is_nan() {
            debug!(depth_ft, "altitude is not a number");
            return f64::NAN;
        }
        if altitude_ft <= 0.0 {
            return depth_ft;
        }
        let entry = round_up(&self.altitude_factors, altitude_ft, |a| a.altitude_ft).or_else(
            || {
                debug!(altitude_ft, "altitude beyond table, clamping to highest factor");
                self.altitude_factors.last()
            },
        );
        match entry {
            Some(entry) => depth_ft * entry.factor,
            None => depth_ft,
        }
    }

    /// Depth class for an equivalent depth.
    pub fn depth_class(&self, equivalent_depth_ft: f64) -> Option<&DepthClass> {
        round_up(&self.depth_classes, equivalent_depth_ft, |c| c.depth_ft)
    }

    /// No-decompression limit in minutes; 0 when the depth is beyond the table,
    /// meaning any bottom time requires decompression.
    pub fn no_deco_limit(&self, equivalent_depth_ft: f64) -> u32 {
        match self.depth_class(equivalent_depth_ft) {
            Some(class) => class.no_decompression_limit_min,
            None => {
                debug!(equivalent_depth_ft, "depth beyond no-decompression table");
                0
            }
        }
    }

    /// Repetitive group after a no-decompression dive, `Z` when either the depth
    /// or the bottom time is outside the table.
    pub fn group_letter(&self, equivalent_depth_ft: f64, bottom_time_min: u32) -> GroupLetter {
        self.depth_class(equivalent_depth_ft)
            .and_then(|class| class.group_for(bottom_time_min))
            .unwrap_or_else(|| {
                debug!(
                    equivalent_depth_ft,
                    bottom_time_min, "dive outside group table, using sentinel group"
                );
                GroupLetter::SENTINEL
            })
    }

    /// Decompression table row for the (depth, bottom time) classes.
    pub fn deco_entry(&self, equivalent_depth_ft: f64, bottom_time_min: u32) -> Option<&DecoEntry> {
        let depth = round_up(&self.decompression, equivalent_depth_ft, |d| d.depth_ft)?;
        round_up(&depth.entries, bottom_time_min, |e| e.bottom_time_min)
    }

    /// Decompression schedule, `None` when no tabulated row covers the dive.
    ///
    /// Callers must treat `None` as "this dive cannot be planned", never as a
    /// dive without stops.
    pub fn deco_schedule(
        &self,
        equivalent_depth_ft: f64,
        bottom_time_min: u32,
    ) -> Option<DecoSchedule> {
        let schedule = self
            .deco_entry(equivalent_depth_ft, bottom_time_min)
            .map(DecoEntry::schedule);
        if schedule.is_none() {
            debug!(
                equivalent_depth_ft,
                bottom_time_min, "no decompression schedule tabulated"
            );
        }
        schedule
    }

    /// Group reached after spending `interval_min` on the surface.
    ///
    /// An interval beyond the last range means the diver has off-gassed and
    /// returns to the baseline group. A starting group the table does not list
    /// is returned unchanged.
    pub fn group_after_surface_interval(
        &self,
        group: GroupLetter,
        interval_min: u32,
    ) -> GroupLetter {
        let Some(rule) = self.surface_intervals.iter().find(|r| r.group == group) else {
            debug!(%group, "group has no surface interval credit row");
            return group;
        };
        match rule.ranges.iter().find(|r| r.contains(interval_min)) {
            Some(range) => range.group,
            None => {
                debug!(%group, interval_min, "surface interval beyond table, diver off-gassed");
                GroupLetter::BASELINE
            }
        }
    }

    /// Residual nitrogen time in minutes for a group and the equivalent depth
    /// of the upcoming dive; `None` when the depth is beyond the group's row.
    pub fn residual_nitrogen_time(
        &self,
        equivalent_depth_ft: f64,
        group: GroupLetter,
    ) -> Option<u32> {
        let row = self.residual_nitrogen.iter().find(|r| r.group == group)?;
        let entry = round_up(&row.depths, equivalent_depth_ft, |e| e.depth_ft);
        if entry.is_none() {
            debug!(%group, equivalent_depth_ft, "no residual nitrogen time tabulated");
        }
        entry.map(|e| e.minutes)
    }

    /// Minimum surface interval before flying.
    pub fn no_fly_time(&self, was_deco_dive: bool) -> Duration {
        let hours = if was_deco_dive {
            self.safety.no_fly_hours_decompression
        } else {
            self.safety.no_fly_hours_no_decompression
        };
        Duration::from_secs(u64::from(hours) * SECONDS_PER_HOUR)
    }
}
