use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::problem::ProblemDefinition;

// Two classes, math taught by profs 0 and 2, art by prof 1.
fn problem() -> ProblemDefinition {
    ProblemDefinition::builder(5, 4)
        .class("1A")
        .class("1B")
        .subject("math", 4)
        .subject("art", 2)
        .professor("Rossi", "math", 0)
        .professor("Verdi", "art", 4)
        .professor("Bianchi", "math", 1)
        .build()
        .unwrap()
}

fn single() -> ProblemDefinition {
    ProblemDefinition::builder(5, 4)
        .class("1A")
        .subject("math", 2)
        .professor("Rossi", "math", 0)
        .build()
        .unwrap()
}

#[test]
fn test_assign_updates_both_views_and_counters() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);

    assert!(state.assign_hour(1, 2, 3, 0));

    assert_eq!(state.class_schedule(1, 2, 3), Some(0));
    assert_eq!(state.prof_schedule(0, 2, 3), Some(1));
    assert_eq!(state.subject_prof(1, 0), Some(0));
    assert_eq!(state.weekly_subject_hours(1, 0), 1);
    assert_eq!(state.daily_subject_hours(1, 2, 0), 1);
    assert_eq!(state.prof_weekly_hours(0), 1);
    assert_eq!(state.weekly_subject_residual_hours(1, 0), 3);
    assert_eq!(state.empty_slot_count(), 39);
    state.check_consistency().unwrap();
}

#[test]
fn test_assign_rejects_occupied_slots() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    let before = state.clone();

    // class slot taken
    assert!(!state.assign_hour(0, 0, 0, 1));
    // professor busy in another class
    assert!(!state.assign_hour(1, 0, 0, 0));
    assert_eq!(state, before);
}

#[test]
fn test_assign_rejects_second_professor_for_subject() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    let before = state.clone();

    assert!(!state.assign_hour(0, 1, 0, 2));
    assert_eq!(state, before);

    // once math is empty again the other professor may take it
    assert!(state.free_hour(0, 0, 0));
    assert_eq!(state.subject_prof(0, 0), None);
    assert!(state.assign_hour(0, 1, 0, 2));
    assert_eq!(state.subject_prof(0, 0), Some(2));
}

#[test]
fn test_free_empty_slot_fails() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    let before = state.clone();
    assert!(!state.free_hour(0, 3, 3));
    assert_eq!(state, before);
}

#[test]
fn test_assign_then_free_restores_state() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 1, 1, 1));
    assert!(state.assign_hour(1, 1, 2, 0));
    let before = state.clone();

    assert!(state.assign_hour(1, 0, 0, 0));
    assert!(state.free_hour(1, 0, 0));

    assert_eq!(state, before);
}

#[test]
fn test_day_off_derivation() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert_eq!(state.prof_assigned_day_off(0), Some(0));

    // Rossi teaches on his unavailable day: first free day wins
    assert!(state.assign_hour(0, 0, 0, 0));
    assert_eq!(state.prof_assigned_day_off(0), Some(1));
    assert!(state.assign_hour(0, 1, 0, 0));
    assert_eq!(state.prof_assigned_day_off(0), Some(2));

    // busy every day
    for d in 2..5 {
        assert!(state.assign_hour(0, d, 0, 0));
    }
    assert_eq!(state.prof_assigned_day_off(0), None);

    // freeing the unavailable day brings it back
    assert!(state.free_hour(0, 0, 0));
    assert_eq!(state.prof_assigned_day_off(0), Some(0));
}

#[test]
fn test_swap_within_class() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    assert!(state.assign_hour(0, 2, 1, 1));

    assert!(state.swap_hours(0, 0, 0, 0, 2, 1));
    assert_eq!(state.class_schedule(0, 0, 0), Some(1));
    assert_eq!(state.class_schedule(0, 2, 1), Some(0));
    assert_eq!(state.daily_subject_hours(0, 2, 0), 1);
    assert_eq!(state.daily_subject_hours(0, 0, 0), 0);
    state.check_consistency().unwrap();

    // with an empty slot
    assert!(state.swap_hours(0, 2, 1, 0, 4, 3));
    assert_eq!(state.class_schedule(0, 2, 1), None);
    assert_eq!(state.class_schedule(0, 4, 3), Some(0));
    state.check_consistency().unwrap();
}

#[test]
fn test_swap_same_occupant_fails() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    assert!(state.assign_hour(0, 0, 1, 0));
    let before = state.clone();

    assert!(!state.swap_hours(0, 0, 0, 0, 0, 1));
    assert!(!state.swap_hours(0, 3, 0, 0, 3, 1));
    assert!(!state.swap_hours(0, 0, 0, 0, 0, 0));
    assert_eq!(state, before);
}

#[test]
fn test_swap_collision_fails() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    // Rossi is busy at (1, 1) with class 1B
    assert!(state.assign_hour(1, 1, 1, 0));
    let before = state.clone();

    assert!(!state.swap_hours(0, 0, 0, 0, 1, 1));
    assert_eq!(state, before);
}

#[test]
fn test_swap_across_classes() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    assert!(state.assign_hour(1, 3, 2, 1));

    assert!(state.swap_hours(0, 0, 0, 1, 3, 2));
    assert_eq!(state.class_schedule(0, 0, 0), Some(1));
    assert_eq!(state.class_schedule(1, 3, 2), Some(0));
    assert_eq!(state.subject_prof(0, 0), None);
    assert_eq!(state.subject_prof(0, 1), Some(1));
    assert_eq!(state.subject_prof(1, 0), Some(0));
    state.check_consistency().unwrap();
}

#[test]
fn test_swap_across_classes_rolls_back_on_subject_conflict() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    // 1B already learns math from Bianchi
    assert!(state.assign_hour(1, 4, 0, 2));
    let before = state.clone();

    assert!(!state.swap_hours(0, 0, 0, 1, 2, 2));
    assert_eq!(state, before);
    state.check_consistency().unwrap();
}

#[test]
fn test_unavailability_scenario() {
    let problem = single();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    assert!(state.assign_hour(0, 0, 1, 0));
    assert_ne!(state.prof_assigned_day_off(0), Some(0));

    assert!(state.swap_hours(0, 0, 1, 0, 2, 1));
    assert_ne!(state.prof_assigned_day_off(0), Some(0));
    assert!(state.swap_hours(0, 0, 0, 0, 3, 0));
    assert_eq!(state.prof_assigned_day_off(0), Some(0));
}

#[test]
fn test_random_mutations_keep_indexes_consistent() {
    let problem = problem();
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = ScheduleState::new(&problem);

    for _ in 0..2_000 {
        let c = rng.random_range(0..problem.class_count());
        let d = rng.random_range(0..problem.days());
        let h = rng.random_range(0..problem.hours_per_day());
        match rng.random_range(0..3) {
            0 => {
                let p = rng.random_range(0..problem.professor_count());
                let before = state.clone();
                if !state.assign_hour(c, d, h, p) {
                    assert_eq!(state, before);
                }
            }
            1 => {
                state.free_hour(c, d, h);
            }
            _ => {
                let c2 = rng.random_range(0..problem.class_count());
                let d2 = rng.random_range(0..problem.days());
                let h2 = rng.random_range(0..problem.hours_per_day());
                let before = state.clone();
                if !state.swap_hours(c, d, h, c2, d2, h2) {
                    assert_eq!(state, before);
                }
            }
        }
        state.check_consistency().unwrap();
    }
}

#[test]
fn test_mirror_views_agree() {
    let problem = problem();
    let mut rng = StdRng::seed_from_u64(11);
    let mut state = ScheduleState::new(&problem);
    for _ in 0..200 {
        let c = rng.random_range(0..problem.class_count());
        let d = rng.random_range(0..problem.days());
        let h = rng.random_range(0..problem.hours_per_day());
        let p = rng.random_range(0..problem.professor_count());
        state.assign_hour(c, d, h, p);
    }

    for c in problem.classes() {
        for (d, h) in problem.slots() {
            if let Some(p) = state.class_schedule(c, d, h) {
                assert_eq!(state.prof_schedule(p, d, h), Some(c));
            }
        }
    }
    for p in problem.professors() {
        for (d, h) in problem.slots() {
            if let Some(c) = state.prof_schedule(p, d, h) {
                assert_eq!(state.class_schedule(c, d, h), Some(p));
            }
        }
    }
}

#[test]
fn test_snapshot_restore() {
    let problem = problem();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    assert!(state.assign_hour(0, 1, 3, 1));
    assert!(state.assign_hour(1, 0, 0, 2));

    let snapshot = state.snapshot();
    let restored = snapshot.restore(&problem).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_snapshot_restore_rejects_bad_input() {
    let problem = problem();
    let state = ScheduleState::new(&problem);

    let mut snapshot = state.snapshot();
    snapshot.classes.pop();
    assert!(matches!(
        snapshot.restore(&problem),
        Err(TimetableError::Config(_))
    ));

    let mut snapshot = state.snapshot();
    snapshot.classes[0][0][0] = Some(0);
    snapshot.classes[1][0][0] = Some(0);
    assert!(matches!(
        snapshot.restore(&problem),
        Err(TimetableError::InvalidMutation(_))
    ));

    let mut snapshot = state.snapshot();
    snapshot.classes[0][0][0] = Some(9);
    assert!(snapshot.restore(&problem).is_err());
}
