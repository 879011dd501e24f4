//! Timetable Solver - Local-search primitives for weekly timetabling
//!
//! This crate provides what a search driver needs, without the driver itself:
//! - Construction heuristics (greedy with relaxation, random)
//! - Move types (hour swap, professor assign, professor swap)
//! - Neighborhood explorers: ordered enumeration and uniform random sampling
//! - [`SearchScope`]: working schedule, cost cache and seeded random source
//!
//! # Example
//!
//! ```
//! use timetable_config::SearchConfig;
//! use timetable_core::ProblemDefinition;
//! use timetable_solver::{HourSwapExplorer, SearchScope};
//!
//! let problem = ProblemDefinition::builder(5, 4)
//!     .class("1A")
//!     .subject("math", 3)
//!     .subject("art", 2)
//!     .professor("Rossi", "math", 0)
//!     .professor("Verdi", "art", 4)
//!     .build()
//!     .unwrap();
//!
//! let config = SearchConfig::new().with_random_seed(7);
//! let mut scope = SearchScope::new(&problem, config).unwrap();
//! let report = scope.construct_greedy();
//! assert!(report.is_complete());
//! assert_eq!(scope.cost().hard(), 15);
//!
//! let explorer = HourSwapExplorer::from_config(scope.config());
//! let mv = scope.random_move(&explorer).unwrap();
//! let expected = scope.cost() + scope.delta(&explorer, &mv);
//! assert!(scope.apply(&explorer, &mv));
//! assert_eq!(scope.cost(), expected);
//! ```

pub mod construction;
pub mod heuristic;
pub mod scope;

pub use construction::{ConstructionReport, Constructor, GreedyConstructor, RandomConstructor};
pub use heuristic::{
    HourSwapExplorer, HourSwapMove, Move, NeighborhoodExplorer, ProfessorAssignExplorer,
    ProfessorAssignMove, ProfessorSwapExplorer, ProfessorSwapMove,
};
pub use scope::SearchScope;
