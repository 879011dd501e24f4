use timetable_core::{ProblemDefinition, ScheduleState, SlotChange};
use timetable_scoring::{ComponentKind, CostModel};
use timetable_test::{single_class, two_classes, unbalanced};

use super::*;

// Three classes; math by Rossi (0) or Bianchi (1), weekly cap 3.
fn shared_math() -> ProblemDefinition {
    ProblemDefinition::builder(5, 4)
        .class("1A")
        .class("1B")
        .class("1C")
        .subject("math", 6)
        .professor("Rossi", "math", 0)
        .professor("Bianchi", "math", 1)
        .prof_max_weekly_hours(3)
        .weights(timetable_core::CostWeights {
            professor_max_weekly_hours: 5,
            ..Default::default()
        })
        .build()
        .unwrap()
}

#[test]
fn test_hour_swap_orders_slots() {
    let mv = HourSwapMove::new(1, 3, 0, 0, 2);
    assert_eq!(mv.first(), (0, 2));
    assert_eq!(mv.second(), (3, 0));
    assert_eq!(mv, HourSwapMove::new(1, 0, 2, 3, 0));
    assert_eq!(mv.to_string(), "1: (0, 2) <-> (3, 0)");
}

#[test]
fn test_hour_swap_feasibility() {
    let problem = two_classes();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    assert!(state.assign_hour(0, 0, 1, 0));
    assert!(state.assign_hour(0, 1, 0, 1));
    // Rossi is busy with 1B at (2, 0)
    assert!(state.assign_hour(1, 2, 0, 0));

    // both empty
    assert!(!HourSwapMove::new(0, 3, 0, 3, 1).is_doable(&state));
    // same professor
    assert!(!HourSwapMove::new(0, 0, 0, 0, 1).is_doable(&state));
    // same slot
    assert!(!HourSwapMove::new(0, 0, 0, 0, 0).is_doable(&state));
    // Rossi cannot move to (2, 0)
    assert!(!HourSwapMove::new(0, 0, 0, 2, 0).is_doable(&state));

    assert!(HourSwapMove::new(0, 0, 0, 1, 0).is_doable(&state));
    assert!(HourSwapMove::new(0, 0, 0, 3, 3).is_doable(&state));
}

#[test]
fn test_hour_swap_apply_and_changes() {
    let problem = two_classes();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 0, 0, 0));
    assert!(state.assign_hour(0, 1, 0, 1));

    let mv = HourSwapMove::new(0, 0, 0, 1, 0);
    assert_eq!(
        mv.slot_changes(&state).as_slice(),
        &[
            SlotChange::new(0, 0, 0, Some(0), Some(1)),
            SlotChange::new(0, 1, 0, Some(1), Some(0)),
        ]
    );
    assert!(mv.do_move(&mut state));
    assert_eq!(state.class_schedule(0, 0, 0), Some(1));
    assert_eq!(state.class_schedule(0, 1, 0), Some(0));

    let before = state.clone();
    assert!(!HourSwapMove::new(0, 4, 0, 4, 1).do_move(&mut state));
    assert_eq!(state, before);
}

#[test]
fn test_professor_assign_candidates() {
    let problem = unbalanced();
    let mut state = ScheduleState::new(&problem);
    // Rossi (0) teaches math to 1A, so Bianchi (2) no longer may
    assert!(state.assign_hour(0, 0, 1, 0));

    assert!(is_candidate(&state, 0, 0));
    assert!(!is_candidate(&state, 0, 2));
    assert!(is_candidate(&state, 1, 2));

    assert!(ProfessorAssignMove::new(0, 1, 1, 0).is_doable(&state));
    assert!(!ProfessorAssignMove::new(0, 1, 1, 2).is_doable(&state));
    // slot taken
    assert!(!ProfessorAssignMove::new(0, 0, 1, 0).is_doable(&state));
    // Rossi busy with 1A at (0, 1)
    assert!(!ProfessorAssignMove::new(1, 0, 1, 0).is_doable(&state));
}

#[test]
fn test_professor_assign_stops_at_weekly_hours() {
    let problem = single_class();
    let mut state = ScheduleState::new(&problem);
    assert!(ProfessorAssignMove::new(0, 1, 0, 0).do_move(&mut state));
    assert!(ProfessorAssignMove::new(0, 1, 1, 0).do_move(&mut state));

    let mv = ProfessorAssignMove::new(0, 2, 0, 0);
    assert!(!mv.is_doable(&state));
    assert!(!mv.do_move(&mut state));
    assert_eq!(mv.to_string(), "(0, 2, 0) <- 0");
}

#[test]
fn test_professor_swap_normalizes_classes() {
    let mv = ProfessorSwapMove::new(0, 2, 1);
    assert_eq!(mv.classes(), (1, 2));
    assert_eq!(mv.to_string(), "0: 1 <-> 2");
}

#[test]
fn test_professor_swap_requires_two_professors() {
    let problem = shared_math();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 2, 0, 0));
    assert!(!ProfessorSwapMove::new(0, 0, 1).is_doable(&state));

    // same professor in both classes
    assert!(state.assign_hour(1, 2, 1, 0));
    assert!(!ProfessorSwapMove::new(0, 0, 1).is_doable(&state));
    assert!(!ProfessorSwapMove::new(0, 0, 0).is_doable(&state));
}

#[test]
fn test_professor_swap_scenario() {
    let problem = shared_math();
    let model = CostModel::new(&problem);
    let mut state = ScheduleState::new(&problem);
    for (d, h) in [(1, 0), (1, 1), (2, 0), (2, 1)] {
        assert!(state.assign_hour(0, d, h, 0));
    }
    assert!(state.assign_hour(1, 3, 0, 1));
    assert!(state.assign_hour(2, 3, 1, 1));
    assert!(state.assign_hour(2, 4, 0, 1));

    let mv = ProfessorSwapMove::new(0, 0, 1);
    assert!(mv.is_doable(&state));
    let changes = mv.slot_changes(&state);
    assert_eq!(changes.len(), 5);

    let complete = model.component(ComponentKind::SolutionComplete);
    assert_eq!(complete.delta_cost(&state, &changes), 0);
    // Rossi drops from 4 to 1 hour, Bianchi rises from 3 to 6
    let weekly = model.component(ComponentKind::ProfessorMaxWeeklyHours);
    assert_eq!(weekly.delta_cost(&state, &changes), (3 - 1) * 5);

    let before = weekly.compute_cost(&state);
    assert!(mv.do_move(&mut state));
    assert_eq!(weekly.compute_cost(&state) - before, 10);
    assert_eq!(state.subject_prof(0, 0), Some(1));
    assert_eq!(state.subject_prof(1, 0), Some(0));
    assert_eq!(state.prof_weekly_hours(0), 1);
    assert_eq!(state.prof_weekly_hours(1), 6);
    state.check_consistency().unwrap();
}

#[test]
fn test_professor_swap_blocked_by_third_class() {
    let problem = shared_math();
    let mut state = ScheduleState::new(&problem);
    assert!(state.assign_hour(0, 1, 0, 0));
    assert!(state.assign_hour(1, 3, 0, 1));
    // Bianchi already teaches 1C at the hour of 1A they would take over
    assert!(state.assign_hour(2, 1, 0, 1));

    let mv = ProfessorSwapMove::new(0, 0, 1);
    assert!(!mv.is_doable(&state));
    let before = state.clone();
    assert!(!mv.do_move(&mut state));
    assert_eq!(state, before);
}

#[test]
fn test_professor_swap_with_overlapping_own_hours() {
    let problem = shared_math();
    let mut state = ScheduleState::new(&problem);
    // both teach at (1, 0), each in their own class
    assert!(state.assign_hour(0, 1, 0, 0));
    assert!(state.assign_hour(1, 1, 0, 1));

    let mv = ProfessorSwapMove::new(0, 0, 1);
    assert!(mv.is_doable(&state));
    assert!(mv.do_move(&mut state));
    assert_eq!(state.class_schedule(0, 1, 0), Some(1));
    assert_eq!(state.class_schedule(1, 1, 0), Some(0));
    state.check_consistency().unwrap();
}
