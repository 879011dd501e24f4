//! Configuration system for timetabling.
//!
//! Problem instances and search settings are plain TOML or YAML files.
//! [`ProblemConfig`] describes an instance by name and is validated into a
//! [`ProblemDefinition`](timetable_core::ProblemDefinition);
//! [`SearchConfig`] controls seeding, random sampling and weight overrides.
//!
//! # Examples
//!
//! Load a problem from a TOML string:
//!
//! ```
//! use timetable_config::ProblemConfig;
//!
//! let problem = ProblemConfig::from_toml_str(r#"
//!     days = 5
//!     hours_per_day = 4
//!     classes = ["1A", "1B"]
//!
//!     [[subjects]]
//!     name = "math"
//!     weekly_hours = 4
//!
//!     [[professors]]
//!     name = "Rossi"
//!     subject = "math"
//!     unavailable_day = "fri"
//! "#).unwrap().into_problem().unwrap();
//!
//! assert_eq!(problem.class_count(), 2);
//! assert_eq!(problem.professor_unavailable_day(0), 4);
//! ```
//!
//! Use default search settings when the file is missing:
//!
//! ```
//! use timetable_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! assert_eq!(config.max_sampling_attempts, 100_000);
//! ```

mod problem;
mod search;

#[cfg(test)]
mod tests;

use thiserror::Error;
use timetable_core::TimetableError;

pub use problem::{ProblemConfig, ProfessorConfig, SubjectConfig, WeightsConfig};
pub use search::{GreedyConfig, SearchConfig};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Problem(#[from] TimetableError),
}
