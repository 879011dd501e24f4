//! Small hand-built problem instances.

use timetable_core::{CostWeights, ProblemDefinition};

/// One class, one subject needing 2 hours, one professor unavailable on
/// day 0, over 5 days × 4 hours. Unavailability weight is 3.
pub fn single_class() -> ProblemDefinition {
    ProblemDefinition::builder(5, 4)
        .class("1A")
        .subject("math", 2)
        .professor("Rossi", "math", 0)
        .weights(CostWeights {
            professor_unavailability: 3,
            ..CostWeights::default()
        })
        .build()
        .expect("valid fixture")
}

/// Two classes, two subjects, two professors over 5 days × 4 hours.
///
/// Math (6 h) is taught by Rossi, art (4 h) by Verdi. With both classes
/// served Rossi teaches 12 hours against a weekly cap of 10; the daily cap is
/// 2 hours per subject.
pub fn two_classes() -> ProblemDefinition {
    ProblemDefinition::builder(5, 4)
        .class("1A")
        .class("1B")
        .subject("math", 6)
        .subject("art", 4)
        .professor("Rossi", "math", 0)
        .professor("Verdi", "art", 4)
        .subject_max_hours_per_day(2)
        .prof_max_weekly_hours(10)
        .weights(CostWeights {
            professor_unavailability: 2,
            max_subject_hours_per_day: 3,
            professor_max_weekly_hours: 5,
            schedule_contiguity: 1,
        })
        .build()
        .expect("valid fixture")
}

/// Three classes and three subjects where math and art have two professors
/// each, so professor swaps between classes are possible.
pub fn unbalanced() -> ProblemDefinition {
    ProblemDefinition::builder(5, 5)
        .class("1A")
        .class("1B")
        .class("1C")
        .subject("math", 6)
        .subject("art", 4)
        .subject("gym", 3)
        .professor("Rossi", "math", 0)
        .professor("Verdi", "art", 1)
        .professor("Bianchi", "math", 2)
        .professor("Neri", "gym", 3)
        .professor("Gialli", "art", 4)
        .subject_max_hours_per_day(2)
        .prof_max_weekly_hours(14)
        .build()
        .expect("valid fixture")
}
