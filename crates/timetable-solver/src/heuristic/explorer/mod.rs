//! Neighborhood explorers.
//!
//! An explorer owns no schedule data. Given a [`ScheduleState`] it can:
//! - enumerate its feasible moves lazily in a fixed total order
//!   ([`iter_moves`](NeighborhoodExplorer::iter_moves),
//!   [`first_move`](NeighborhoodExplorer::first_move),
//!   [`next_move`](NeighborhoodExplorer::next_move))
//! - draw a uniformly random feasible move by rejection sampling
//! - test and apply single moves
//! - report the exact cost change of a move per cost component

mod hour_swap;
mod professor_assign;
mod professor_swap;


use std::fmt::Debug;

use rand::Rng;
use timetable_core::{HardSoftCost, Result, ScheduleState, TimetableError};
use timetable_scoring::{CostComponent, CostModel};
use tracing::{debug, trace};

use crate::heuristic::r#move::Move;

pub use hour_swap::HourSwapExplorer;
pub use professor_assign::ProfessorAssignExplorer;
pub use professor_swap::ProfessorSwapExplorer;

/// Draws a random move sampler makes before giving up.
pub const DEFAULT_MAX_SAMPLING_ATTEMPTS: u64 = 100_000;

/// One move family over a schedule.
///
/// # Type Parameters
/// * `Move` - the move descriptor this neighborhood produces
pub trait NeighborhoodExplorer: Send + Sync + Debug {
    type Move: Move;

    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Every move of the raw move space worth testing, in enumeration order.
    ///
    /// May yield infeasible moves; [`iter_moves`](Self::iter_moves) filters
    /// them out.
    fn candidates<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
    ) -> impl Iterator<Item = Self::Move> + 'a;

    /// The candidates not less than `from`, in enumeration order.
    ///
    /// Resumes the enumeration at `from` instead of restarting it, so a
    /// [`first_move`](Self::first_move)/[`next_move`](Self::next_move) walk
    /// visits each candidate once.
    fn candidates_from<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
        from: Self::Move,
    ) -> impl Iterator<Item = Self::Move> + 'a;

    /// Draws a uniformly random feasible move.
    ///
    /// # Errors
    ///
    /// [`TimetableError::EmptyNeighborhood`] when no feasible move was found
    /// within the sampling bound.
    fn random_move<R: Rng>(&self, state: &ScheduleState<'_>, rng: &mut R) -> Result<Self::Move>;

    /// Feasible moves in enumeration order.
    fn iter_moves<'a>(
        &'a self,
        state: &'a ScheduleState<'a>,
    ) -> impl Iterator<Item = Self::Move> + 'a {
        self.candidates(state).filter(move |m| self.feasible_move(state, m))
    }

    /// The first feasible move, or `None` for an empty neighborhood.
    fn first_move(&self, state: &ScheduleState<'_>) -> Option<Self::Move> {
        self.iter_moves(state).next()
    }

    /// The feasible move following `current`, or `None` once exhausted.
    fn next_move(&self, state: &ScheduleState<'_>, current: &Self::Move) -> Option<Self::Move> {
        self.candidates_from(state, *current)
            .filter(|m| m > current)
            .find(|m| self.feasible_move(state, m))
    }

    fn feasible_move(&self, state: &ScheduleState<'_>, mv: &Self::Move) -> bool {
        mv.is_doable(state)
    }

    /// Applies `mv`. Returns false and leaves `state` unchanged when the move
    /// is not feasible.
    fn make_move(&self, state: &mut ScheduleState<'_>, mv: &Self::Move) -> bool {
        let applied = mv.do_move(state);
        trace!(
            event = "make_move",
            neighborhood = self.name(),
            mv = %mv,
            applied,
        );
        applied
    }

    /// Weighted change in `component` if `mv` were applied.
    fn delta_cost(
        &self,
        state: &ScheduleState<'_>,
        mv: &Self::Move,
        component: &dyn CostComponent,
    ) -> i64 {
        component.delta_cost(state, &mv.slot_changes(state))
    }

    /// Change in total cost if `mv` were applied.
    fn delta(&self, state: &ScheduleState<'_>, mv: &Self::Move, model: &CostModel) -> HardSoftCost {
        model.delta(state, &mv.slot_changes(state))
    }

    /// Number of feasible moves. Walks the whole neighborhood.
    fn size(&self, state: &ScheduleState<'_>) -> usize {
        self.iter_moves(state).count()
    }
}

/// Repeats `draw` until it yields a move or `max_attempts` draws failed.
pub(crate) fn rejection_sample<M: Move>(
    neighborhood: &'static str,
    max_attempts: u64,
    mut draw: impl FnMut() -> Option<M>,
) -> Result<M> {
    for attempt in 0..max_attempts {
        if let Some(mv) = draw() {
            trace!(event = "sampled", neighborhood, attempt, mv = %mv);
            return Ok(mv);
        }
    }
    debug!(
        event = "neighborhood_empty",
        neighborhood,
        attempts = max_attempts
    );
    Err(TimetableError::EmptyNeighborhood { neighborhood })
}

/// Row-major index of the first valid slot at or after `(day, hour)`, and
/// whether it is that exact slot.
pub(crate) fn slot_at_or_after(day: usize, hour: usize, hours_per_day: usize) -> (usize, bool) {
    if hour < hours_per_day {
        (day.saturating_mul(hours_per_day).saturating_add(hour), true)
    } else {
        (day.saturating_add(1).saturating_mul(hours_per_day), false)
    }
}

/// Reports a neighborhood known to be empty without sampling.
pub(crate) fn empty<M>(neighborhood: &'static str) -> Result<M> {
    debug!(event = "neighborhood_empty", neighborhood, attempts = 0u64);
    Err(TimetableError::EmptyNeighborhood { neighborhood })
}
