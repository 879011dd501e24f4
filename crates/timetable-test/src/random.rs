//! Seeded random problems and schedules.

use rand::seq::SliceRandom;
use rand::Rng;
use timetable_core::{CostWeights, ProblemDefinition, ScheduleState};

/// A random, valid problem with 1-3 classes, 1-3 subjects (each with 1-2
/// professors), 2-5 days and 2-5 hours per day.
pub fn random_problem<R: Rng>(rng: &mut R) -> ProblemDefinition {
    let days = rng.random_range(2..=5);
    let hours = rng.random_range(2..=5);
    let classes = rng.random_range(1..=3);
    let subjects = rng.random_range(1..=3);
    let slots = days * hours;
    let per_subject = (slots / subjects).max(1);

    let mut builder = ProblemDefinition::builder(days, hours);
    for c in 0..classes {
        builder = builder.class(format!("C{}", c));
    }
    let mut prof = 0;
    for s in 0..subjects {
        builder = builder.subject(format!("S{}", s), rng.random_range(1..=per_subject));
        for _ in 0..rng.random_range(1..=2) {
            let unavailable = rng.random_range(0..days);
            builder = builder.professor(format!("P{}", prof), format!("S{}", s), unavailable);
            prof += 1;
        }
    }

    builder
        .subject_max_hours_per_day(rng.random_range(0..=2))
        .prof_max_weekly_hours(rng.random_range(0..=slots / 2))
        .weights(CostWeights {
            professor_unavailability: rng.random_range(1..=5),
            max_subject_hours_per_day: rng.random_range(1..=5),
            professor_max_weekly_hours: rng.random_range(1..=5),
            schedule_contiguity: rng.random_range(1..=5),
        })
        .build()
        .expect("random problem is valid by construction")
}

/// A schedule where roughly `fill` of all class slots received a random
/// professor. Assignments that would break an invariant are simply skipped.
pub fn random_schedule<'a, R: Rng>(
    problem: &'a ProblemDefinition,
    rng: &mut R,
    fill: f64,
) -> ScheduleState<'a> {
    let mut state = ScheduleState::new(problem);
    let mut slots: Vec<_> = problem
        .classes()
        .flat_map(|c| problem.slots().map(move |(d, h)| (c, d, h)))
        .collect();
    slots.shuffle(rng);

    let target = (slots.len() as f64 * fill).round() as usize;
    for (c, d, h) in slots.into_iter().take(target) {
        let p = rng.random_range(0..problem.professor_count());
        state.assign_hour(c, d, h, p);
    }
    state
}
