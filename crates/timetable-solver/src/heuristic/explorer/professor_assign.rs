//! Neighborhood of professor assignments to empty class hours.

use rand::Rng;
use timetable_config::SearchConfig;
use timetable_core::{ClassId, ProfId, Result, ScheduleState};

use super::{
    empty, rejection_sample, slot_at_or_after, NeighborhoodExplorer,
    DEFAULT_MAX_SAMPLING_ATTEMPTS,
};
use crate::heuristic::r#move::{is_candidate, Move, ProfessorAssignMove};

/// Enumerates [`ProfessorAssignMove`]s: class, day, hour, then candidate
/// professor, all ascending.
///
/// A professor is a candidate for a class when their subject still misses
/// hours there and either nobody teaches it to the class yet or they already
/// do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessorAssignExplorer {
    max_sampling_attempts: u64,
}

impl Default for ProfessorAssignExplorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfessorAssignExplorer {
    pub fn new() -> Self {
        Self {
            max_sampling_attempts: DEFAULT_MAX_SAMPLING_ATTEMPTS,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new().with_max_sampling_attempts(config.max_sampling_attempts)
    }

    pub fn with_max_sampling_attempts(mut self, attempts: u64) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    /// Candidate professors for `class`, ascending by id.
    pub fn candidate_professors(&self, state: &ScheduleState<'_>, class: ClassId) -> Vec<ProfId> {
        state
            .problem()
            .professors()
            .filter(|&p| is_candidate(state, class, p))
            .collect()
    }
}

impl NeighborhoodExplorer for ProfessorAssignExplorer {
    type Move = ProfessorAssignMove;

    fn name(&self) -> &'static str {
        "professor_assign"
    }

    fn candidates<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
    ) -> impl Iterator<Item = ProfessorAssignMove> + 'a {
        let problem = state.problem();
        let hours = problem.hours_per_day();
        let slots = problem.slots_per_week();
        problem.classes().flat_map(move |c| {
            let profs = self.candidate_professors(state, c);
            let n = profs.len();
            (0..slots * n).map(move |k| {
                let slot = k / n;
                ProfessorAssignMove::new(c, slot / hours, slot % hours, profs[k % n])
            })
        })
    }

    fn candidates_from<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
        from: ProfessorAssignMove,
    ) -> impl Iterator<Item = ProfessorAssignMove> + 'a {
        let problem = state.problem();
        let hours = problem.hours_per_day();
        let slots = problem.slots_per_week();
        let c0 = from.class();
        let (slot0, exact) = slot_at_or_after(from.slot().0, from.slot().1, hours);
        (c0..problem.class_count()).flat_map(move |c| {
            let profs = self.candidate_professors(state, c);
            let n = profs.len();
            let start = if c != c0 {
                0
            } else if exact {
                let skip = profs.partition_point(|&p| p < from.professor());
                slot0.saturating_mul(n).saturating_add(skip)
            } else {
                slot0.saturating_mul(n)
            };
            (start..slots * n).map(move |k| {
                let slot = k / n;
                ProfessorAssignMove::new(c, slot / hours, slot % hours, profs[k % n])
            })
        })
    }

    fn random_move<R: Rng>(
        &self,
        state: &ScheduleState<'_>,
        rng: &mut R,
    ) -> Result<ProfessorAssignMove> {
        let problem = state.problem();
        // flattened (class, candidate) pairs so every feasible move is equally likely
        let pairs: Vec<(ClassId, ProfId)> = problem
            .classes()
            .flat_map(|c| {
                self.candidate_professors(state, c)
                    .into_iter()
                    .map(move |p| (c, p))
            })
            .collect();
        if pairs.is_empty() {
            return empty(self.name());
        }

        rejection_sample(self.name(), self.max_sampling_attempts, || {
            let (c, p) = pairs[rng.random_range(0..pairs.len())];
            let mv = ProfessorAssignMove::new(
                c,
                rng.random_range(0..problem.days()),
                rng.random_range(0..problem.hours_per_day()),
                p,
            );
            mv.is_doable(state).then_some(mv)
        })
    }
}
