use timetable_core::{ScheduleState, SlotChange};

use super::{ComponentKind, CostComponent};
use crate::analysis::Violation;
use crate::delta::{excess, Tally};

/// Hours a professor teaches beyond the weekly cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessorMaxWeeklyHours {
    weight: i64,
}

impl ProfessorMaxWeeklyHours {
    pub fn new(weight: i64) -> Self {
        Self { weight }
    }
}

impl CostComponent for ProfessorMaxWeeklyHours {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ProfessorMaxWeeklyHours
    }

    fn weight(&self) -> i64 {
        self.weight
    }

    fn violations(&self, state: &ScheduleState<'_>) -> i64 {
        let problem = state.problem();
        let cap = problem.prof_max_weekly_hours();
        problem
            .professors()
            .map(|p| excess(state.prof_weekly_hours(p) as i64, cap))
            .sum()
    }

    fn explain_violations(&self, state: &ScheduleState<'_>) -> Vec<Violation> {
        let problem = state.problem();
        let cap = problem.prof_max_weekly_hours();
        problem
            .professors()
            .filter_map(|p| {
                let units = excess(state.prof_weekly_hours(p) as i64, cap);
                (units > 0).then(|| {
                    Violation::new(
                        self.kind(),
                        units,
                        format!(
                            "To prof {} assigned {} extra hours",
                            problem.professor_name(p),
                            units
                        ),
                    )
                })
            })
            .collect()
    }

    fn delta_violations(&self, state: &ScheduleState<'_>, changes: &[SlotChange]) -> i64 {
        let cap = state.problem().prof_max_weekly_hours();
        let mut tally = Tally::new();
        for ch in changes {
            if let Some(p) = ch.before {
                tally.add(p, -1);
            }
            if let Some(p) = ch.after {
                tally.add(p, 1);
            }
        }

        tally
            .iter()
            .map(|(p, shift)| {
                let hours = state.prof_weekly_hours(p) as i64;
                excess(hours + shift, cap) - excess(hours, cap)
            })
            .sum()
    }
}
