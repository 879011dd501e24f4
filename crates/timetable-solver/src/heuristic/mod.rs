//! Local-search building blocks: moves and the neighborhoods that produce them.

pub mod explorer;
pub mod r#move;

pub use explorer::{
    HourSwapExplorer, NeighborhoodExplorer, ProfessorAssignExplorer, ProfessorSwapExplorer,
    DEFAULT_MAX_SAMPLING_ATTEMPTS,
};
pub use r#move::{HourSwapMove, Move, ProfessorAssignMove, ProfessorSwapMove};
