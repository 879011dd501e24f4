//! Move types for timetable local search.
//!
//! A move is a small `Copy` descriptor. It never owns schedule data; it is
//! checked, described and applied against a [`ScheduleState`] passed in.
//!
//! # Move Types
//!
//! - [`HourSwapMove`]: exchanges two hours of one class
//! - [`ProfessorAssignMove`]: puts a professor in an empty class hour
//! - [`ProfessorSwapMove`]: exchanges the professors of a subject between two classes

mod hour_swap;
mod professor_assign;
mod professor_swap;

#[cfg(test)]
mod tests;

use std::fmt::{Debug, Display};

use timetable_core::{ScheduleState, SlotChanges};

pub use hour_swap::HourSwapMove;
pub use professor_assign::{is_candidate, ProfessorAssignMove};
pub use professor_swap::ProfessorSwapMove;

/// A move over a [`ScheduleState`].
///
/// The derived `Ord` of every move type is the order its neighborhood
/// enumerates in.
pub trait Move: Copy + Debug + Display + Eq + Ord + Send + Sync {
    /// Returns true if this move can be applied to `state`.
    fn is_doable(&self, state: &ScheduleState<'_>) -> bool;

    /// Applies this move. Returns false, leaving `state` unchanged, when the
    /// move is not doable.
    fn do_move(&self, state: &mut ScheduleState<'_>) -> bool;

    /// The class slots this move would change in `state`.
    fn slot_changes(&self, state: &ScheduleState<'_>) -> SlotChanges;
}
