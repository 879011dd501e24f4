//! Shared test fixtures for the timetabling crates.
//!
//! This crate provides problem instances and schedule generators for testing.
//! It depends on `timetable-core` only, so every other crate can use it as a
//! dev-dependency.
//!
//! - [`instances`] - small hand-built problems with known properties
//! - [`random`] - seeded random problems and partially filled schedules
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! timetable-test = { workspace = true }
//! ```
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use timetable_test::{random_problem, random_schedule};
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let problem = random_problem(&mut rng);
//! let state = random_schedule(&problem, &mut rng, 0.6);
//! state.check_consistency().unwrap();
//! ```

pub mod instances;
pub mod random;

pub use instances::{single_class, two_classes, unbalanced};
pub use random::{random_problem, random_schedule};
