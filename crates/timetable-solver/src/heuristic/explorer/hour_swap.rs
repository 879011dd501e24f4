//! Neighborhood of hour swaps within a class.

use rand::Rng;
use timetable_config::SearchConfig;
use timetable_core::{Result, ScheduleState};

use super::{
    empty, rejection_sample, slot_at_or_after, NeighborhoodExplorer,
    DEFAULT_MAX_SAMPLING_ATTEMPTS,
};
use crate::heuristic::r#move::{HourSwapMove, Move};

/// Enumerates [`HourSwapMove`]s: class ascending, then the first slot, then
/// the second slot strictly after it, both in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourSwapExplorer {
    max_sampling_attempts: u64,
}

impl Default for HourSwapExplorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HourSwapExplorer {
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

impl NeighborhoodExplorer for HourSwapExplorer {
    type Move = HourSwapMove;

    fn name(&self) -> &'static str {
        "hour_swap"
    }

    fn candidates<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
    ) -> impl Iterator<Item = HourSwapMove> + 'a {
        let problem = state.problem();
        let slots = problem.slots_per_week();
        let hours = problem.hours_per_day();
        problem.classes().flat_map(move |c| {
            (0..slots).flat_map(move |i| {
                (i + 1..slots)
                    .map(move |j| HourSwapMove::new(c, i / hours, i % hours, j / hours, j % hours))
            })
        })
    }

    fn candidates_from<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
        from: HourSwapMove,
    ) -> impl Iterator<Item = HourSwapMove> + 'a {
        let problem = state.problem();
        let slots = problem.slots_per_week();
        let hours = problem.hours_per_day();
        let c0 = from.class();
        let (i0, exact) = slot_at_or_after(from.first().0, from.first().1, hours);
        let (j0, _) = slot_at_or_after(from.second().0, from.second().1, hours);
        (c0..problem.class_count()).flat_map(move |c| {
            let first = if c == c0 { i0 } else { 0 };
            (first..slots).flat_map(move |i| {
                let second = if c == c0 && i == i0 && exact {
                    j0.max(i + 1)
                } else {
                    i + 1
                };
                (second..slots)
                    .map(move |j| HourSwapMove::new(c, i / hours, i % hours, j / hours, j % hours))
            })
        })
    }

    fn random_move<R: Rng>(&self, state: &ScheduleState<'_>, rng: &mut R) -> Result<HourSwapMove> {
        let problem = state.problem();
        let total = problem.class_count() * problem.slots_per_week();
        // needs at least one occupied slot and something different to swap with
        if state.empty_slot_count() == total || problem.slots_per_week() < 2 {
            return empty(self.name());
        }

        rejection_sample(self.name(), self.max_sampling_attempts, || {
            let c = rng.random_range(0..problem.class_count());
            let mv = HourSwapMove::new(
                c,
                rng.random_range(0..problem.days()),
                rng.random_range(0..problem.hours_per_day()),
                rng.random_range(0..problem.days()),
                rng.random_range(0..problem.hours_per_day()),
            );
            mv.is_doable(state).then_some(mv)
        })
    }
}
