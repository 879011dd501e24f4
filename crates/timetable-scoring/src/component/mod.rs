//! The five cost components of a weekly timetable.
//!
//! Every component counts violation units from a [`ScheduleState`], explains
//! them one record at a time, and computes the exact change in units caused by
//! a list of slot changes without rescanning the grid.

mod complete;
mod contiguity;
mod daily_cap;
mod unavailability;
mod weekly_cap;


use std::fmt::{self, Debug};
use std::str::FromStr;

use thiserror::Error;
use timetable_core::{ScheduleState, SlotChange};

use crate::analysis::Violation;

pub use complete::SolutionComplete;
pub use contiguity::ScheduleContiguity;
pub use daily_cap::MaxSubjectHoursPerDay;
pub use unavailability::ProfessorUnavailability;
pub use weekly_cap::ProfessorMaxWeeklyHours;

/// Identifies a cost component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    ProfessorUnavailability,
    MaxSubjectHoursPerDay,
    ProfessorMaxWeeklyHours,
    ScheduleContiguity,
    SolutionComplete,
}

impl ComponentKind {
    /// All components, soft ones first.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::ProfessorUnavailability,
        ComponentKind::MaxSubjectHoursPerDay,
        ComponentKind::ProfessorMaxWeeklyHours,
        ComponentKind::ScheduleContiguity,
        ComponentKind::SolutionComplete,
    ];

    /// Snake-case name used in configuration files and reports.
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::ProfessorUnavailability => "professor_unavailability",
            ComponentKind::MaxSubjectHoursPerDay => "max_subject_hours_per_day",
            ComponentKind::ProfessorMaxWeeklyHours => "professor_max_weekly_hours",
            ComponentKind::ScheduleContiguity => "schedule_contiguity",
            ComponentKind::SolutionComplete => "solution_complete",
        }
    }

    pub const fn is_hard(self) -> bool {
        matches!(self, ComponentKind::SolutionComplete)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown component name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cost component: {0}")]
pub struct ParseComponentError(pub String);

impl FromStr for ComponentKind {
    type Err = ParseComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ParseComponentError(s.to_string()))
    }
}

/// A weighted requirement evaluated over a schedule.
///
/// `delta_violations(state, changes)` must equal
/// `violations(after) - violations(state)` where `after` is `state` with the
/// slot changes applied.
pub trait CostComponent: Send + Sync + Debug {
    fn kind(&self) -> ComponentKind;

    /// Cost per violation unit.
    fn weight(&self) -> i64;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn is_hard(&self) -> bool {
        self.kind().is_hard()
    }

    /// Counts violation units by scanning the whole schedule.
    fn violations(&self, state: &ScheduleState<'_>) -> i64;

    /// One record per violation, with units summing to [`violations`](Self::violations).
    fn explain_violations(&self, state: &ScheduleState<'_>) -> Vec<Violation>;

    /// Change in violation units caused by `changes`.
    fn delta_violations(&self, state: &ScheduleState<'_>, changes: &[SlotChange]) -> i64;

    /// Weighted cost of the current schedule.
    fn compute_cost(&self, state: &ScheduleState<'_>) -> i64 {
        self.violations(state) * self.weight()
    }

    /// Weighted change in cost caused by `changes`.
    fn delta_cost(&self, state: &ScheduleState<'_>, changes: &[SlotChange]) -> i64 {
        self.delta_violations(state, changes) * self.weight()
    }
}
