//! Temporal state resolution for the four calendar variants.
//!
//! Every variant keeps its own not-started/completed policy: the year and life
//! grids are always in progress, the goal grid derives its state from the
//! position of "today", and a journey only knows whether it has arrived.

use chrono::NaiveDate;

use crate::{
    foundation::math::{percent_of, round_tenth},
    geo::coords::{Coordinates, haversine_km},
    timeline::calendar::{days_between, days_in_year, year_start},
};

/// Life expectancy (years) shown by the life-in-weeks grid.
pub const LIFE_EXPECTANCY_YEARS: u32 = 90;
/// Weeks drawn per year of life.
pub const WEEKS_PER_YEAR: u32 = 52;
/// Total week dots in the life grid.
pub const TOTAL_WEEKS: u32 = LIFE_EXPECTANCY_YEARS * WEEKS_PER_YEAR;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Completion state of a unit timeline.
pub enum ProgressState {
    /// "Today" is before the first unit.
    NotStarted,
    /// "Today" falls on one of the units.
    InProgress,
    /// "Today" is after the last unit.
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Discrete progress through `total_units` units (days or weeks).
///
/// `current_unit` is 1-based and always clamped to `[0, total_units]`.
pub struct Timeline {
    total_units: u32,
    current_unit: u32,
    state: ProgressState,
}

impl Timeline {
    /// Timeline whose state follows the raw 1-based `position` of today:
    /// `< 1` is not started, `> total_units` is completed.
    ///
    /// Panics when `total_units == 0`; callers validate ranges first.
    pub fn from_position(total_units: u32, position: i64) -> Self {
        assert!(total_units >= 1, "timeline needs at least one unit");
        let state = if position < 1 {
            ProgressState::NotStarted
        } else if position > i64::from(total_units) {
            ProgressState::Completed
        } else {
            ProgressState::InProgress
        };
        Self {
            total_units,
            current_unit: clamp_position(total_units, position),
            state,
        }
    }

    /// Timeline that is in progress regardless of where `position` falls.
    pub fn in_progress(total_units: u32, position: i64) -> Self {
        assert!(total_units >= 1, "timeline needs at least one unit");
        Self {
            total_units,
            current_unit: clamp_position(total_units, position),
            state: ProgressState::InProgress,
        }
    }

    /// Number of units in the grid.
    pub fn total_units(&self) -> u32 {
        self.total_units
    }

    /// 1-based unit holding "today", or 0 when nothing has started.
    pub fn current_unit(&self) -> u32 {
        self.current_unit
    }

    /// Completion state.
    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Units remaining after the current one.
    pub fn units_left(&self) -> u32 {
        self.total_units - self.current_unit
    }
}

fn clamp_position(total_units: u32, position: i64) -> u32 {
    position.clamp(0, i64::from(total_units)) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Timeline definition, one arm per calendar variant.
pub enum TimelineVariant {
    /// Days of a calendar year.
    Year {
        /// Referenced year.
        year: i32,
    },
    /// Inclusive day countdown from `start` to `goal`.
    Goal {
        /// First day of the goal.
        start: NaiveDate,
        /// Last day of the goal.
        goal: NaiveDate,
    },
    /// Weeks of a 90-year life.
    Life {
        /// Date of birth.
        birthday: NaiveDate,
    },
    /// Travel from `origin` to `destination`, arriving on `target`.
    Journey {
        /// Arrival date.
        target: NaiveDate,
        /// Departure point.
        origin: Coordinates,
        /// Arrival point.
        destination: Coordinates,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Year progress.
pub struct YearProgress {
    /// Referenced year.
    pub year: i32,
    /// One unit per day.
    pub timeline: Timeline,
    /// Days after today until year end.
    pub days_left: u32,
    /// Rounded percentage of the year done.
    pub percent: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Goal countdown progress.
pub struct GoalProgress {
    /// One unit per day, `start..=goal`.
    pub timeline: Timeline,
    /// Days until the goal starts (0 once started).
    pub days_until_start: u32,
    /// Days from today until the goal date (0 once completed).
    pub days_left: u32,
    /// Rounded percentage, 0 before the start and capped at 100.
    pub percent: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Life-in-weeks progress.
pub struct LifeProgress {
    /// One unit per week, [`TOTAL_WEEKS`] units.
    pub timeline: Timeline,
    /// Whole weeks since birth.
    pub weeks_lived: u32,
    /// Percentage of [`TOTAL_WEEKS`] lived, one decimal.
    pub percent: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Which end of a journey is shown.
pub enum JourneyStop {
    /// Before arrival.
    Origin,
    /// On or after the arrival date.
    Destination,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Journey state; there is no unit grid.
pub struct JourneyProgress {
    /// `today >= target`.
    pub arrived: bool,
    /// Signed days from today until the arrival date.
    pub days_left: i64,
    /// Great-circle origin-destination distance.
    pub distance_km: f64,
    /// Location whose imagery is rendered.
    pub display: JourneyStop,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Resolved state, mirroring [`TimelineVariant`].
pub enum Resolution {
    /// Year progress.
    Year(YearProgress),
    /// Goal progress.
    Goal(GoalProgress),
    /// Life progress.
    Life(LifeProgress),
    /// Journey progress.
    Journey(JourneyProgress),
}

impl Resolution {
    /// Unit timeline for grid-based variants.
    pub fn timeline(&self) -> Option<&Timeline> {
        match self {
            Resolution::Year(p) => Some(&p.timeline),
            Resolution::Goal(p) => Some(&p.timeline),
            Resolution::Life(p) => Some(&p.timeline),
            Resolution::Journey(_) => None,
        }
    }
}

/// Resolve `variant` against a fixed `today`.
///
/// Pure: the same inputs always produce the same resolution.
#[tracing::instrument(level = "debug")]
pub fn resolve(variant: &TimelineVariant, today: NaiveDate) -> Resolution {
    let resolution = match *variant {
        TimelineVariant::Year { year } => Resolution::Year(resolve_year(year, today)),
        TimelineVariant::Goal { start, goal } => Resolution::Goal(resolve_goal(start, goal, today)),
        TimelineVariant::Life { birthday } => Resolution::Life(resolve_life(birthday, today)),
        TimelineVariant::Journey {
            target,
            origin,
            destination,
        } => Resolution::Journey(resolve_journey(target, origin, destination, today)),
    };
    tracing::debug!(?resolution, "resolved timeline");
    resolution
}

fn resolve_year(year: i32, today: NaiveDate) -> YearProgress {
    let total = days_in_year(year);
    let position = days_between(year_start(year), today) + 1;
    let timeline = Timeline::in_progress(total, position);
    YearProgress {
        year,
        timeline,
        days_left: timeline.units_left(),
        percent: percent_of(timeline.current_unit(), total),
    }
}

fn resolve_goal(start: NaiveDate, goal: NaiveDate, today: NaiveDate) -> GoalProgress {
    let span = days_between(start, goal) + 1;
    let total = u32::try_from(span).unwrap_or(0);

    let position = if today < start {
        0
    } else {
        days_between(start, today) + 1
    };
    let timeline = Timeline::from_position(total, position);

    let (days_until_start, days_left, percent) = match timeline.state() {
        ProgressState::NotStarted => (
            days_between(today, start) as u32,
            days_between(today, goal).max(0) as u32,
            0,
        ),
        ProgressState::Completed => (0, 0, 100),
        ProgressState::InProgress => (
            0,
            days_between(today, goal).max(0) as u32,
            percent_of(timeline.current_unit(), total).min(100),
        ),
    };

    GoalProgress {
        timeline,
        days_until_start,
        days_left,
        percent,
    }
}

fn resolve_life(birthday: NaiveDate, today: NaiveDate) -> LifeProgress {
    let weeks = days_between(birthday, today).div_euclid(7);
    // A birthday after today leaves position 0: no current week.
    let timeline = Timeline::in_progress(TOTAL_WEEKS, weeks + 1);
    let weeks_lived = weeks.max(0);
    LifeProgress {
        timeline,
        weeks_lived: weeks_lived as u32,
        percent: round_tenth(weeks_lived as f64 / f64::from(TOTAL_WEEKS) * 100.0),
    }
}

fn resolve_journey(
    target: NaiveDate,
    origin: Coordinates,
    destination: Coordinates,
    today: NaiveDate,
) -> JourneyProgress {
    let arrived = today >= target;
    JourneyProgress {
        arrived,
        days_left: days_between(today, target),
        distance_km: haversine_km(origin, destination),
        display: if arrived {
            JourneyStop::Destination
        } else {
            JourneyStop::Origin
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolver.rs"]
mod tests;
