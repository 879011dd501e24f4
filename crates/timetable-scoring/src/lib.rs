//! Timetable Scoring - Cost components and incremental evaluation
//!
//! Each soft or hard requirement of a timetable is a [`CostComponent`] that
//! can count its violations from scratch, explain them, and compute the exact
//! change a set of [`SlotChange`](timetable_core::SlotChange)s would cause.
//! [`CostModel`] composes the five components into a
//! [`HardSoftCost`](timetable_core::HardSoftCost).
//!
//! # Example
//!
//! ```
//! use timetable_core::{ProblemDefinition, ScheduleState, SlotChange};
//! use timetable_scoring::CostModel;
//!
//! let problem = ProblemDefinition::builder(5, 4)
//!     .class("1A")
//!     .subject("math", 2)
//!     .professor("Rossi", "math", 0)
//!     .build()
//!     .unwrap();
//! let state = ScheduleState::new(&problem);
//! let model = CostModel::new(&problem);
//!
//! // every slot of the empty grid is a hard violation
//! assert_eq!(model.evaluate(&state).hard(), 20);
//!
//! let fill = [SlotChange::new(0, 1, 0, None, Some(0))];
//! assert_eq!(model.delta(&state, &fill).hard(), -1);
//! ```

pub mod analysis;
pub mod component;
mod delta;
pub mod model;
pub mod weight_overrides;

pub use analysis::{ComponentAnalysis, CostExplanation, Violation};
pub use component::{
    ComponentKind, CostComponent, MaxSubjectHoursPerDay, ParseComponentError,
    ProfessorMaxWeeklyHours, ProfessorUnavailability, ScheduleContiguity, SolutionComplete,
};
pub use model::CostModel;
pub use weight_overrides::ComponentWeightOverrides;
