use timetable_core::{ScheduleState, SlotChange};

use super::{ComponentKind, CostComponent};
use crate::analysis::Violation;

/// Hard requirement: every class slot holds a professor. One unit per empty
/// slot, weight fixed at 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionComplete;

impl SolutionComplete {
    pub fn new() -> Self {
        Self
    }
}

impl CostComponent for SolutionComplete {
    fn kind(&self) -> ComponentKind {
        ComponentKind::SolutionComplete
    }

    fn weight(&self) -> i64 {
        1
    }

    fn violations(&self, state: &ScheduleState<'_>) -> i64 {
        state.empty_slot_count() as i64
    }

    fn explain_violations(&self, state: &ScheduleState<'_>) -> Vec<Violation> {
        let problem = state.problem();
        let mut out = Vec::new();
        for c in problem.classes() {
            for (d, h) in problem.slots() {
                if state.is_class_hour_free(c, d, h) {
                    out.push(Violation::new(
                        self.kind(),
                        1,
                        format!(
                            "Free hour for class {} on {} at hour {}",
                            problem.class_name(c),
                            problem.day_name(d),
                            h + 1
                        ),
                    ));
                }
            }
        }
        out
    }

    fn delta_violations(&self, _state: &ScheduleState<'_>, changes: &[SlotChange]) -> i64 {
        changes
            .iter()
            .filter(|ch| ch.flips_occupancy())
            .map(|ch| if ch.after.is_none() { 1 } else { -1 })
            .sum()
    }
}
