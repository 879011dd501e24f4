use super::*;
use crate::TimetableError;

fn base() -> ProblemBuilder {
    ProblemDefinition::builder(5, 4)
        .class("1A")
        .class("1B")
        .subject("math", 4)
        .subject("art", 2)
        .professor("Rossi", "math", 0)
        .professor("Verdi", "art", 4)
        .professor("Bianchi", "math", 1)
}

#[test]
fn test_accessors() {
    let problem = base().build().unwrap();

    assert_eq!(problem.days(), 5);
    assert_eq!(problem.hours_per_day(), 4);
    assert_eq!(problem.class_count(), 2);
    assert_eq!(problem.subject_count(), 2);
    assert_eq!(problem.professor_count(), 3);
    assert_eq!(problem.professor_subject(2), 0);
    assert_eq!(problem.professor_unavailable_day(1), 4);
    assert_eq!(problem.subject_weekly_hours(1), 2);
    assert_eq!(problem.subject_professors(0), &[0, 2]);
    assert_eq!(problem.subject_professors(1), &[1]);
    assert_eq!(problem.day_name(4), "fri");
    assert_eq!(problem.slots().count(), 20);
    assert_eq!(problem.slots().nth(5), Some((1, 1)));
}

#[test]
fn test_disabled_caps_default_to_grid() {
    let problem = base().build().unwrap();
    assert_eq!(problem.subject_max_hours_per_day(), 4);
    assert_eq!(problem.prof_max_weekly_hours(), 20);

    let problem = base()
        .subject_max_hours_per_day(2)
        .prof_max_weekly_hours(6)
        .build()
        .unwrap();
    assert_eq!(problem.subject_max_hours_per_day(), 2);
    assert_eq!(problem.prof_max_weekly_hours(), 6);
}

#[test]
fn test_unknown_subject_fails_fast() {
    let err = base().professor("Neri", "music", 0).build().unwrap_err();
    assert!(matches!(err, TimetableError::Config(ref m) if m.contains("music")));
}

#[test]
fn test_unavailable_day_outside_week() {
    let err = base().professor("Neri", "art", 5).build().unwrap_err();
    assert!(matches!(err, TimetableError::Config(_)));
}

#[test]
fn test_subject_without_professor() {
    let err = base().subject("music", 1).build().unwrap_err();
    assert!(matches!(err, TimetableError::Config(ref m) if m.contains("music")));
}

#[test]
fn test_overfull_week() {
    let err = base().subject("gym", 15).build().unwrap_err();
    assert!(matches!(err, TimetableError::Config(_)));
}

#[test]
fn test_duplicates_rejected() {
    assert!(base().class("1A").build().is_err());
    assert!(base().professor("Rossi", "art", 0).build().is_err());
}

#[test]
fn test_day_names() {
    assert!(ProblemDefinition::builder(8, 2)
        .class("1A")
        .subject("math", 1)
        .professor("Rossi", "math", 0)
        .build()
        .is_err());

    let problem = ProblemDefinition::builder(2, 2)
        .day_names(["lun", "mar"])
        .class("1A")
        .subject("math", 1)
        .professor("Rossi", "math", 1)
        .build()
        .unwrap();
    assert_eq!(problem.day_name(1), "mar");

    assert!(ProblemDefinition::builder(3, 2)
        .day_names(["lun", "mar"])
        .class("1A")
        .subject("math", 1)
        .professor("Rossi", "math", 1)
        .build()
        .is_err());
}

#[test]
fn test_negative_weight_rejected() {
    let weights = CostWeights {
        schedule_contiguity: -1,
        ..CostWeights::default()
    };
    assert!(base().weights(weights).build().is_err());
}
