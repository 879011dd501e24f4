//! Timetable Core - Problem data and schedule state for weekly timetabling
//!
//! This crate provides the foundation the scoring and search crates build on:
//! - [`ProblemDefinition`]: the read-only instance (grid, subjects, professors, caps, weights)
//! - [`ScheduleState`]: the mutable timetable with mirrored class/professor views
//! - [`SlotChange`]: the slot-level effect of a move, used for incremental costs
//! - [`HardSoftCost`]: the two-level cost being minimized

pub mod cost;
pub mod error;
pub mod problem;
pub mod schedule;

pub use cost::HardSoftCost;
pub use error::{Result, TimetableError};
pub use problem::{
    ClassId, CostWeights, Day, Hour, ProblemBuilder, ProblemDefinition, ProfId, Professor,
    Subject, SubjectId,
};
pub use schedule::{ScheduleSnapshot, ScheduleState, SlotChange, SlotChanges};
