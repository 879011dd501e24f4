use timetable_core::{ScheduleState, SlotChange};

use super::{ComponentKind, CostComponent};
use crate::analysis::Violation;
use crate::delta::{excess, Tally};

/// Hours of a subject a class gets on one day beyond the daily cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSubjectHoursPerDay {
    weight: i64,
}

impl MaxSubjectHoursPerDay {
    pub fn new(weight: i64) -> Self {
        Self { weight }
    }
}

impl CostComponent for MaxSubjectHoursPerDay {
    fn kind(&self) -> ComponentKind {
        ComponentKind::MaxSubjectHoursPerDay
    }

    fn weight(&self) -> i64 {
        self.weight
    }

    fn violations(&self, state: &ScheduleState<'_>) -> i64 {
        let problem = state.problem();
        let cap = problem.subject_max_hours_per_day();
        let mut total = 0;
        for c in problem.classes() {
            for d in 0..problem.days() {
                for s in problem.subjects() {
                    total += excess(state.daily_subject_hours(c, d, s) as i64, cap);
                }
            }
        }
        total
    }

    fn explain_violations(&self, state: &ScheduleState<'_>) -> Vec<Violation> {
        let problem = state.problem();
        let cap = problem.subject_max_hours_per_day();
        let mut out = Vec::new();
        for c in problem.classes() {
            for d in 0..problem.days() {
                for s in problem.subjects() {
                    let hours = state.daily_subject_hours(c, d, s);
                    let units = excess(hours as i64, cap);
                    if units > 0 {
                        out.push(Violation::new(
                            self.kind(),
                            units,
                            format!(
                                "To subject {} in class {} assigned {} hours instead of {} on {}",
                                problem.subject_name(s),
                                problem.class_name(c),
                                hours,
                                cap,
                                problem.day_name(d)
                            ),
                        ));
                    }
                }
            }
        }
        out
    }

    fn delta_violations(&self, state: &ScheduleState<'_>, changes: &[SlotChange]) -> i64 {
        let problem = state.problem();
        let cap = problem.subject_max_hours_per_day();
        let mut tally = Tally::new();
        for ch in changes {
            if let Some(p) = ch.before {
                tally.add((ch.class, ch.day, problem.professor_subject(p)), -1);
            }
            if let Some(p) = ch.after {
                tally.add((ch.class, ch.day, problem.professor_subject(p)), 1);
            }
        }

        tally
            .iter()
            .map(|((c, d, s), shift)| {
                let hours = state.daily_subject_hours(c, d, s) as i64;
                excess(hours + shift, cap) - excess(hours, cap)
            })
            .sum()
    }
}
