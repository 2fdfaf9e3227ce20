//! Status line wording. Each variant has its own small state machine.

use crate::timeline::resolver::{
    GoalProgress, JourneyProgress, LIFE_EXPECTANCY_YEARS, LifeProgress, ProgressState,
    Resolution, YearProgress,
};

/// `"{days}d left - {percent}%"`.
pub fn year_status(p: &YearProgress) -> String {
    format!("{}d left - {}%", p.days_left, p.percent)
}

/// Goal countdown status.
pub fn goal_status(p: &GoalProgress) -> String {
    match p.timeline.state() {
        ProgressState::NotStarted => format!("Goal starts in {}d", p.days_until_start),
        ProgressState::Completed => "Goal completed!".to_string(),
        ProgressState::InProgress => format!("{}d left - {}%", p.days_left, p.percent),
    }
}

/// `"{percent}% to 90"`, percent with at most one decimal.
pub fn life_status(p: &LifeProgress) -> String {
    format!("{}% to {}", p.percent, LIFE_EXPECTANCY_YEARS)
}

/// Journey status. The result is plain text; escape it before embedding.
pub fn journey_status(p: &JourneyProgress, destination: &str) -> String {
    if p.arrived {
        format!("Arrived at {destination}")
    } else if p.days_left == 1 {
        format!("Tomorrow - {destination}")
    } else {
        format!("{}d until {destination}", p.days_left)
    }
}

/// Status for any resolution. `destination` is only read for journeys.
pub fn status_text(resolution: &Resolution, destination: &str) -> String {
    match resolution {
        Resolution::Year(p) => year_status(p),
        Resolution::Goal(p) => goal_status(p),
        Resolution::Life(p) => life_status(p),
        Resolution::Journey(p) => journey_status(p, destination),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/status.rs"]
mod tests;
