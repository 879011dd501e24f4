use timetable_core::{
    ClassId, Day, Hour, ProblemDefinition, ProfId, ScheduleState, SlotChange, SubjectId,
};

use super::{ComponentKind, CostComponent};
use crate::analysis::Violation;
use crate::delta::{projected_class_slot, Tally};

/// Gaps between consecutive hours of the same subject within a class day.
///
/// Each pair of consecutive hours of a subject that are not adjacent counts
/// one unit. Days with fewer than three hours cannot have meaningful gaps, so
/// the component is inactive there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleContiguity {
    weight: i64,
}

impl ScheduleContiguity {
    pub fn new(weight: i64) -> Self {
        Self { weight }
    }

    fn active(problem: &ProblemDefinition) -> bool {
        problem.hours_per_day() >= 3
    }
}

// Calls `on_gap(last, hour)` for every non-adjacent pair of consecutive hours
// of `subject` in one day row.
fn for_each_gap(
    problem: &ProblemDefinition,
    subject: SubjectId,
    occupant: impl Fn(Hour) -> Option<ProfId>,
    mut on_gap: impl FnMut(Hour, Hour),
) {
    let mut last: Option<Hour> = None;
    for h in 0..problem.hours_per_day() {
        if occupant(h).is_some_and(|p| problem.professor_subject(p) == subject) {
            if let Some(prev) = last {
                if h - prev > 1 {
                    on_gap(prev, h);
                }
            }
            last = Some(h);
        }
    }
}

fn count_gaps(
    problem: &ProblemDefinition,
    subject: SubjectId,
    occupant: impl Fn(Hour) -> Option<ProfId>,
) -> i64 {
    let mut gaps = 0;
    for_each_gap(problem, subject, occupant, |_, _| gaps += 1);
    gaps
}

impl CostComponent for ScheduleContiguity {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ScheduleContiguity
    }

    fn weight(&self) -> i64 {
        self.weight
    }

    fn violations(&self, state: &ScheduleState<'_>) -> i64 {
        let problem = state.problem();
        if !Self::active(problem) {
            return 0;
        }
        let mut total = 0;
        for c in problem.classes() {
            for d in 0..problem.days() {
                for s in problem.subjects() {
                    total += count_gaps(problem, s, |h| state.class_schedule(c, d, h));
                }
            }
        }
        total
    }

    fn explain_violations(&self, state: &ScheduleState<'_>) -> Vec<Violation> {
        let problem = state.problem();
        let mut out = Vec::new();
        if !Self::active(problem) {
            return out;
        }
        for c in problem.classes() {
            for s in problem.subjects() {
                for d in 0..problem.days() {
                    for_each_gap(
                        problem,
                        s,
                        |h| state.class_schedule(c, d, h),
                        |from, to| {
                            out.push(Violation::new(
                                self.kind(),
                                1,
                                format!(
                                    "Contiguity violation in class {} for subject {} on {} between hours {} - {}",
                                    problem.class_name(c),
                                    problem.subject_name(s),
                                    problem.day_name(d),
                                    from + 1,
                                    to + 1
                                ),
                            ))
                        },
                    );
                }
            }
        }
        out
    }

    fn delta_violations(&self, state: &ScheduleState<'_>, changes: &[SlotChange]) -> i64 {
        let problem = state.problem();
        if !Self::active(problem) {
            return 0;
        }

        let mut rows: Tally<(ClassId, Day, SubjectId)> = Tally::new();
        for ch in changes {
            for p in [ch.before, ch.after].into_iter().flatten() {
                rows.add((ch.class, ch.day, problem.professor_subject(p)), 0);
            }
        }

        rows.iter()
            .map(|((c, d, s), _)| {
                let before = count_gaps(problem, s, |h| state.class_schedule(c, d, h));
                let after = count_gaps(problem, s, |h| {
                    projected_class_slot(state, changes, c, d, h)
                });
                after - before
            })
            .sum()
    }
}
