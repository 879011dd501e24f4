use std::time::Instant;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use timetable_core::{ClassId, Day, Hour, ProfId, ScheduleState, SubjectId};
use tracing::info;

use super::{required_hours, ConstructionReport, Constructor};

/// Places every missing hour on a random free slot.
///
/// Each subject of a class goes to the professor already teaching it there,
/// else to a random professor still under the weekly cap, else to any of its
/// professors. No soft requirement is considered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomConstructor;

impl RandomConstructor {
    pub fn new() -> Self {
        Self
    }
}

fn pick_professor<R: Rng>(
    state: &ScheduleState<'_>,
    class: ClassId,
    subject: SubjectId,
    rng: &mut R,
) -> Option<ProfId> {
    if let Some(p) = state.subject_prof(class, subject) {
        return Some(p);
    }
    let problem = state.problem();
    let profs = problem.subject_professors(subject);
    let under_cap: Vec<ProfId> = profs
        .iter()
        .copied()
        .filter(|&p| state.prof_weekly_hours(p) < problem.prof_max_weekly_hours())
        .collect();
    under_cap
        .choose(rng)
        .or_else(|| profs.choose(rng))
        .copied()
}

impl Constructor for RandomConstructor {
    fn name(&self) -> &'static str {
        "random"
    }

    fn construct<R: Rng>(&self, state: &mut ScheduleState<'_>, rng: &mut R) -> ConstructionReport {
        let start = Instant::now();
        let problem = state.problem();
        info!(
            event = "construction_start",
            constructor = self.name(),
            classes = problem.class_count() as u64,
            required_hours = required_hours(state) as u64,
        );

        let mut report = ConstructionReport::default();
        for c in problem.classes() {
            let mut subjects: Vec<SubjectId> = problem.subjects().collect();
            subjects.shuffle(rng);

            for s in subjects {
                let needed = state.weekly_subject_residual_hours(c, s).max(0) as usize;
                if needed == 0 {
                    continue;
                }
                let Some(p) = pick_professor(state, c, s, rng) else {
                    report.unplaced_hours += needed;
                    continue;
                };

                let mut slots: Vec<(Day, Hour)> = problem
                    .slots()
                    .filter(|&(d, h)| {
                        state.is_class_hour_free(c, d, h) && state.is_prof_hour_free(p, d, h)
                    })
                    .collect();
                slots.shuffle(rng);

                let mut placed = 0;
                for (d, h) in slots.into_iter().take(needed) {
                    if state.assign_hour(c, d, h, p) {
                        placed += 1;
                    }
                }
                report.placed_hours += placed;
                report.unplaced_hours += needed - placed;
            }
        }

        report.duration = start.elapsed();
        info!(
            event = "construction_end",
            constructor = self.name(),
            duration_ms = report.duration.as_millis() as u64,
            placed_hours = report.placed_hours as u64,
            unplaced_hours = report.unplaced_hours as u64,
        );
        report
    }
}
