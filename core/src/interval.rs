//! Parsing of caller-entered planning values.
//!
//! Input that does not parse is reported, never replaced by a default.

use std::fmt;
use std::str::FromStr;

use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res, opt},
    sequence::{delimited, separated_pair, terminated},
    IResult, Parser,
};

use crate::error::PlanError;

const MINUTES_PER_HOUR: u32 = 60;

/// Time spent on the surface between two dives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceInterval {
    minutes: u32,
}

impl SurfaceInterval {
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Parse `HH:MM` notation, e.g. `"01:00"` or `"2:35"`.
    pub fn parse(input: &str) -> Result<Self, PlanError> {
        let malformed = |reason: &str| PlanError::MalformedInterval {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(malformed("empty input"));
        }

        let (_, (hours, minutes)) = all_consuming(hours_minutes)
            .parse(trimmed)
            .map_err(|_| malformed("expected HH:MM"))?;
        if minutes >= MINUTES_PER_HOUR {
            return Err(malformed("minutes must be below 60"));
        }

        hours
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|m| m.checked_add(minutes))
            .map(Self::from_minutes)
            .ok_or_else(|| malformed("interval too long"))
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl FromStr for SurfaceInterval {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SurfaceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}",
            self.minutes / MINUTES_PER_HOUR,
            self.minutes % MINUTES_PER_HOUR
        )
    }
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>()).parse(input)
}

fn hours_minutes(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(number, char(':'), number).parse(input)
}

fn percentage(input: &str) -> IResult<&str, u32> {
    delimited(space0, terminated(number, opt(char('%'))), space0).parse(input)
}

/// Parse an oxygen fraction given as a whole percentage (`"32"` or `"32%"`).
///
/// The caller decides whether a failure skips the dependent checks or rejects
/// the plan.
pub fn parse_oxygen_percent(input: &str) -> Result<u8, PlanError> {
    let malformed = || PlanError::MalformedPercentage {
        input: input.to_string(),
    };
    let (_, value) = all_consuming(percentage)
        .parse(input)
        .map_err(|_| malformed())?;
    match u8::try_from(value) {
        Ok(percent) if (1..=100).contains(&percent) => Ok(percent),
        _ => Err(malformed()),
    }
}
