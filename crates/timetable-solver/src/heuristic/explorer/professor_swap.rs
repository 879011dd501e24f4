//! Neighborhood of professor exchanges between classes.

use rand::Rng;
use timetable_config::SearchConfig;
use timetable_core::{Result, ScheduleState};

use super::{empty, rejection_sample, NeighborhoodExplorer, DEFAULT_MAX_SAMPLING_ATTEMPTS};
use crate::heuristic::r#move::{Move, ProfessorSwapMove};

/// Enumerates [`ProfessorSwapMove`]s: subject, first class, second class,
/// all ascending, with the second class after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessorSwapExplorer {
    max_sampling_attempts: u64,
}

impl Default for ProfessorSwapExplorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfessorSwapExplorer {
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
}

impl NeighborhoodExplorer for ProfessorSwapExplorer {
    type Move = ProfessorSwapMove;

    fn name(&self) -> &'static str {
        "professor_swap"
    }

    fn candidates<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
    ) -> impl Iterator<Item = ProfessorSwapMove> + 'a {
        let problem = state.problem();
        let classes = problem.class_count();
        problem.subjects().flat_map(move |s| {
            (0..classes).flat_map(move |c1| {
                (c1 + 1..classes).map(move |c2| ProfessorSwapMove::new(s, c1, c2))
            })
        })
    }

    fn candidates_from<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
        from: ProfessorSwapMove,
    ) -> impl Iterator<Item = ProfessorSwapMove> + 'a {
        let problem = state.problem();
        let classes = problem.class_count();
        let s0 = from.subject();
        let (a0, b0) = from.classes();
        (s0..problem.subject_count()).flat_map(move |s| {
            let first = if s == s0 { a0 } else { 0 };
            (first..classes).flat_map(move |c1| {
                let second = if s == s0 && c1 == a0 {
                    b0.max(c1 + 1)
                } else {
                    c1 + 1
                };
                (second..classes).map(move |c2| ProfessorSwapMove::new(s, c1, c2))
            })
        })
    }

    fn random_move<R: Rng>(
        &self,
        state: &ScheduleState<'_>,
        rng: &mut R,
    ) -> Result<ProfessorSwapMove> {
        let problem = state.problem();
        // a swap needs two classes and a subject with two professors
        if problem.class_count() < 2
            || problem
                .subjects()
                .all(|s| problem.subject_professors(s).len() < 2)
        {
            return empty(self.name());
        }

        rejection_sample(self.name(), self.max_sampling_attempts, || {
            let s = rng.random_range(0..problem.subject_count());
            let c1 = rng.random_range(0..problem.class_count());
            let c2 = rng.random_range(0..problem.class_count());
            let mv = ProfessorSwapMove::new(s, c1, c2);
            mv.is_doable(state).then_some(mv)
        })
    }
}
