//! Reference-table records and the values exchanged with callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Minutes value standing for "no limit" in a tabulated bound.
pub const UNLIMITED_MINUTES: u32 = u32::MAX;

/// Repetitive group designator describing residual nitrogen after a dive.
///
/// `A` is the baseline of a diver with no residual loading. `Z` is the
/// sentinel for "beyond every tabulated range".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    Z,
}

impl GroupLetter {
    /// Every designator in table column order.
    pub const ALL: [GroupLetter; 16] = [
        GroupLetter::A,
        GroupLetter::B,
        GroupLetter::C,
        GroupLetter::D,
        GroupLetter::E,
        GroupLetter::F,
        GroupLetter::G,
        GroupLetter::H,
        GroupLetter::I,
        GroupLetter::J,
        GroupLetter::K,
        GroupLetter::L,
        GroupLetter::M,
        GroupLetter::N,
        GroupLetter::O,
        GroupLetter::Z,
    ];

    pub const BASELINE: GroupLetter = GroupLetter::A;
    pub const SENTINEL: GroupLetter = GroupLetter::Z;

    /// Column position in the no-decompression table.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_char(self) -> char {
        match self {
            GroupLetter::A => 'A',
            GroupLetter::B => 'B',
            GroupLetter::C => 'C',
            GroupLetter::D => 'D',
            GroupLetter::E => 'E',
            GroupLetter::F => 'F',
            GroupLetter::G => 'G',
            GroupLetter::H => 'H',
            GroupLetter::I => 'I',
            GroupLetter::J => 'J',
            GroupLetter::K => 'K',
            GroupLetter::L => 'L',
            GroupLetter::M => 'M',
            GroupLetter::N => 'N',
            GroupLetter::O => 'O',
            GroupLetter::Z => 'Z',
        }
    }

    /// Case-insensitive parse of a single designator character.
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|g| g.as_char() == upper)
    }
}

impl fmt::Display for GroupLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for GroupLetter {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let group = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        group.ok_or_else(|| PlanError::UnknownGroup {
            input: s.to_string(),
        })
    }
}

/// Bottom-time range (inclusive, minutes) assigned to one group within a depth class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupRange {
    pub from_min: u32,
    pub to_min: u32,
    pub group: GroupLetter,
}

impl GroupRange {
    pub fn contains(&self, minutes: u32) -> bool {
        self.from_min <= minutes && minutes <= self.to_min
    }
}

/// A tabulated depth bucket: every depth above the previous class and at or
/// below `depth_ft` uses this row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthClass {
    pub depth_ft: f64,
    /// No-decompression limit, `UNLIMITED_MINUTES` for shallow classes.
    pub no_decompression_limit_min: u32,
    pub groups: Vec<GroupRange>,
}

impl DepthClass {
    pub fn group_for(&self, bottom_time_min: u32) -> Option<GroupLetter> {
        self.groups
            .iter()
            .find(|range| range.contains(bottom_time_min))
            .map(|range| range.group)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoStop {
    pub depth_ft: u32,
    pub minutes: u32,
}

/// Decompression stops for one (depth, bottom time) class and the group on surfacing.
///
/// A stop with zero minutes is tabulated but not required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecoSchedule {
    pub stops: Vec<DecoStop>,
    pub final_group: GroupLetter,
}

impl DecoSchedule {
    /// All tabulated stops, deepest first.
    pub fn stops_descending(&self) -> Vec<DecoStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| b.depth_ft.cmp(&a.depth_ft));
        stops
    }

    /// Stops the diver must actually perform, deepest first.
    pub fn required_stops(&self) -> Vec<DecoStop> {
        self.stops_descending()
            .into_iter()
            .filter(|stop| stop.minutes > 0)
            .collect()
    }

    pub fn total_stop_time(&self) -> u32 {
        self.stops.iter().map(|stop| stop.minutes).sum()
    }
}

/// One bottom-time row of the decompression table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecoEntry {
    pub bottom_time_min: u32,
    pub stops: Vec<DecoStop>,
    pub final_group: GroupLetter,
}

impl DecoEntry {
    pub fn schedule(&self) -> DecoSchedule {
        DecoSchedule {
            stops: self.stops.clone(),
            final_group: self.final_group,
        }
    }
}

/// Decompression rows for one depth class, ascending by bottom time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecoDepth {
    pub depth_ft: f64,
    pub entries: Vec<DecoEntry>,
}

/// Surface-interval range (inclusive, minutes) and the group reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalRange {
    pub from_min: u32,
    pub to_min: u32,
    pub group: GroupLetter,
}

impl IntervalRange {
    pub fn contains(&self, minutes: u32) -> bool {
        self.from_min <= minutes && minutes <= self.to_min
    }
}

/// Surface-interval credit for one starting group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceIntervalRule {
    pub group: GroupLetter,
    pub ranges: Vec<IntervalRange>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResidualNitrogenEntry {
    pub depth_ft: f64,
    pub minutes: u32,
}

/// Residual nitrogen times for one group, ascending by depth class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResidualNitrogenRow {
    pub group: GroupLetter,
    pub depths: Vec<ResidualNitrogenEntry>,
}

/// Altitude threshold and the factor applied to actual depth at or below it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AltitudeFactor {
    pub altitude_ft: f64,
    pub factor: f64,
}

/// Minimum surface intervals before flying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRules {
    pub no_fly_hours_no_decompression: u32,
    pub no_fly_hours_decompression: u32,
}
