use smallvec::SmallVec;
use timetable_core::{ProfId, ScheduleState, SlotChange};

use super::{ComponentKind, CostComponent};
use crate::analysis::Violation;

/// One unit per professor whose day off is not their declared unavailable
/// day, including professors left without any day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessorUnavailability {
    weight: i64,
}

impl ProfessorUnavailability {
    pub fn new(weight: i64) -> Self {
        Self { weight }
    }
}

impl CostComponent for ProfessorUnavailability {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ProfessorUnavailability
    }

    fn weight(&self) -> i64 {
        self.weight
    }

    fn violations(&self, state: &ScheduleState<'_>) -> i64 {
        let problem = state.problem();
        problem
            .professors()
            .filter(|&p| {
                state.prof_assigned_day_off(p) != Some(problem.professor_unavailable_day(p))
            })
            .count() as i64
    }

    fn explain_violations(&self, state: &ScheduleState<'_>) -> Vec<Violation> {
        let problem = state.problem();
        problem
            .professors()
            .filter_map(|p| {
                let unavailable = problem.professor_unavailable_day(p);
                let message = match state.prof_assigned_day_off(p) {
                    Some(d) if d == unavailable => return None,
                    Some(d) => format!(
                        "To prof {} assigned day off on {} instead of {}",
                        problem.professor_name(p),
                        problem.day_name(d),
                        problem.day_name(unavailable)
                    ),
                    None => format!("Prof {} has no day off", problem.professor_name(p)),
                };
                Some(Violation::new(self.kind(), 1, message))
            })
            .collect()
    }

    // The day off equals the unavailable day exactly when that day holds no
    // hour of the professor, so only the unavailable-day load matters.
    fn delta_violations(&self, state: &ScheduleState<'_>, changes: &[SlotChange]) -> i64 {
        let problem = state.problem();
        let mut profs: SmallVec<[ProfId; 4]> = SmallVec::new();
        for p in changes.iter().flat_map(|ch| [ch.before, ch.after]).flatten() {
            if !profs.contains(&p) {
                profs.push(p);
            }
        }

        profs
            .into_iter()
            .map(|p| {
                let unavailable = problem.professor_unavailable_day(p);
                let load = state.prof_daily_hours(p, unavailable) as i64;
                let shift: i64 = changes
                    .iter()
                    .filter(|ch| ch.day == unavailable)
                    .map(|ch| (ch.after == Some(p)) as i64 - (ch.before == Some(p)) as i64)
                    .sum();
                ((load + shift > 0) as i64) - ((load > 0) as i64)
            })
            .sum()
    }
}
