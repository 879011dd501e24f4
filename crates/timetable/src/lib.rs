//! Timetable - Local-search core for weekly class timetabling
//!
//! Describe the week, the classes, subjects and professors, build a starting
//! schedule, then explore its neighborhoods with exact incremental costs.
//!
//! # Example
//!
//! ```rust
//! use timetable::prelude::*;
//!
//! let problem = ProblemDefinition::builder(5, 4)
//!     .class("1A")
//!     .class("1B")
//!     .subject("math", 4)
//!     .subject("art", 2)
//!     .professor("Rossi", "math", 0)
//!     .professor("Verdi", "art", 4)
//!     .build()
//!     .unwrap();
//!
//! let config = SearchConfig::new().with_random_seed(1);
//! let scope = timetable::construct_schedule_with(&problem, config).unwrap();
//!
//! // every required hour is placed; the other 28 class hours stay free
//! assert_eq!(scope.cost().hard(), 28);
//! println!("{}", scope.explain());
//! ```

// Problem data and schedule state
pub use timetable_core::{
    ClassId, CostWeights, Day, HardSoftCost, Hour, ProblemBuilder, ProblemDefinition, ProfId,
    Professor, Result, ScheduleSnapshot, ScheduleState, SlotChange, SlotChanges, Subject,
    SubjectId, TimetableError,
};

// Cost components and explanations
pub use timetable_scoring::{
    ComponentAnalysis, ComponentKind, ComponentWeightOverrides, CostComponent, CostExplanation,
    CostModel, Violation,
};

// Configuration files
pub use timetable_config::{ConfigError, GreedyConfig, ProblemConfig, SearchConfig};

// Construction and neighborhoods
pub use timetable_solver::{
    ConstructionReport, Constructor, GreedyConstructor, HourSwapExplorer, HourSwapMove, Move,
    NeighborhoodExplorer, ProfessorAssignExplorer, ProfessorAssignMove, ProfessorSwapExplorer,
    ProfessorSwapMove, RandomConstructor, SearchScope,
};

#[cfg(feature = "console")]
pub use timetable_console as console;

mod construct;
pub use construct::{construct_schedule, construct_schedule_with};

pub mod prelude {
    pub use super::{
        ComponentKind, CostModel, HardSoftCost, ProblemConfig, ProblemDefinition, ScheduleState,
        SearchConfig, SearchScope,
    };
    pub use super::{
        GreedyConstructor, HourSwapExplorer, Move, NeighborhoodExplorer, ProfessorAssignExplorer,
        ProfessorSwapExplorer, RandomConstructor,
    };
}
