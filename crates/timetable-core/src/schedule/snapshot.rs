//! Plain occupancy grid for saving and restoring a schedule.

use super::ScheduleState;
use crate::error::{Result, TimetableError};
use crate::problem::{ProblemDefinition, ProfId};

/// Class-indexed occupancy, `classes[c][d][h]`.
///
/// Restoring replays [`ScheduleState::assign_hour`] so that every derived
/// index is rebuilt rather than trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleSnapshot {
    pub classes: Vec<Vec<Vec<Option<ProfId>>>>,
}

impl ScheduleSnapshot {
    pub(super) fn capture(state: &ScheduleState<'_>) -> Self {
        let problem = state.problem();
        let classes = problem
            .classes()
            .map(|c| {
                (0..problem.days())
                    .map(|d| {
                        (0..problem.hours_per_day())
                            .map(|h| state.class_schedule(c, d, h))
                            .collect()
                    })
                    .collect()
            })
            .collect();
        Self { classes }
    }

    /// Rebuilds a schedule for `problem`.
    ///
    /// # Errors
    ///
    /// [`TimetableError::Config`] when the grid shape or a professor id does
    /// not match `problem`; [`TimetableError::InvalidMutation`] when an
    /// assignment collides with an earlier one.
    pub fn restore<'a>(&self, problem: &'a ProblemDefinition) -> Result<ScheduleState<'a>> {
        if self.classes.len() != problem.class_count() {
            return Err(TimetableError::Config(format!(
                "snapshot has {} classes, problem has {}",
                self.classes.len(),
                problem.class_count()
            )));
        }

        let mut state = ScheduleState::new(problem);
        for (c, days) in self.classes.iter().enumerate() {
            if days.len() != problem.days()
                || days.iter().any(|hours| hours.len() != problem.hours_per_day())
            {
                return Err(TimetableError::Config(format!(
                    "snapshot grid of class {} is not {}x{}",
                    problem.class_name(c),
                    problem.days(),
                    problem.hours_per_day()
                )));
            }
            for (d, hours) in days.iter().enumerate() {
                for (h, slot) in hours.iter().enumerate() {
                    let Some(p) = *slot else { continue };
                    if p >= problem.professor_count() {
                        return Err(TimetableError::Config(format!(
                            "snapshot references unknown professor {}",
                            p
                        )));
                    }
                    if !state.assign_hour(c, d, h, p) {
                        return Err(TimetableError::InvalidMutation(format!(
                            "cannot assign prof {} to class {} on {} at hour {}",
                            problem.professor_name(p),
                            problem.class_name(c),
                            problem.day_name(d),
                            h + 1
                        )));
                    }
                }
            }
        }
        Ok(state)
    }
}
