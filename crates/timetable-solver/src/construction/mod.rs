//! Construction heuristics that fill an empty schedule before search.
//!
//! - [`GreedyConstructor`]: places subjects largest first, relaxing the
//!   unavailable day and the daily cap only when nothing fits
//! - [`RandomConstructor`]: places every subject on random free hours

mod greedy;
mod random;


use std::fmt::Debug;
use std::time::Duration;

use rand::Rng;
use timetable_core::ScheduleState;

pub use greedy::GreedyConstructor;
pub use random::RandomConstructor;

/// Builds a starting schedule through the state's own mutators.
pub trait Constructor: Debug {
    fn name(&self) -> &'static str;

    /// Fills missing hours of `state`. Hours already assigned are kept.
    fn construct<R: Rng>(&self, state: &mut ScheduleState<'_>, rng: &mut R) -> ConstructionReport;
}

/// Outcome of a construction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstructionReport {
    /// Hours assigned by this run.
    pub placed_hours: usize,
    /// Required hours that could not be placed.
    pub unplaced_hours: usize,
    /// Times a professor was allowed onto their unavailable day.
    pub unavailability_relaxations: usize,
    /// Times the daily subject cap was raised by one hour.
    pub daily_cap_relaxations: usize,
    pub duration: Duration,
}

impl ConstructionReport {
    /// Returns true if every required hour was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced_hours == 0
    }
}

// Hours still missing over all classes and subjects.
fn required_hours(state: &ScheduleState<'_>) -> usize {
    let problem = state.problem();
    problem
        .classes()
        .flat_map(|c| problem.subjects().map(move |s| (c, s)))
        .map(|(c, s)| state.weekly_subject_residual_hours(c, s).max(0) as usize)
        .sum()
}
