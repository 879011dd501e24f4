use timetable_config::SearchConfig;
use timetable_core::{HardSoftCost, ScheduleState};
use timetable_scoring::ComponentKind;
use timetable_test::{two_classes, unbalanced};

use super::*;
use crate::heuristic::{
    HourSwapExplorer, NeighborhoodExplorer, ProfessorAssignExplorer, ProfessorSwapExplorer,
};

fn seeded(seed: u64) -> SearchConfig {
    SearchConfig::new().with_random_seed(seed)
}

#[test]
fn test_empty_schedule_cost() {
    let problem = two_classes();
    let scope = SearchScope::new(&problem, seeded(1)).unwrap();
    assert_eq!(scope.cost(), HardSoftCost::of_hard(40));
    assert_eq!(scope.applied_moves(), 0);
    assert!(scope.best_cost().is_none());
}

#[test]
fn test_rejects_bad_overrides() {
    let problem = two_classes();
    let mut config = seeded(1);
    config.weights.insert("solution_complete".to_string(), 5);
    assert!(matches!(
        SearchScope::new(&problem, config),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_weight_overrides_reach_cost_model() {
    let problem = two_classes();
    let config = seeded(1).with_weight(ComponentKind::ScheduleContiguity, 7);
    let scope = SearchScope::new(&problem, config).unwrap();
    assert_eq!(
        scope
            .model()
            .component(ComponentKind::ScheduleContiguity)
            .weight(),
        7
    );
}

#[test]
fn test_construct_greedy_updates_cost() {
    let problem = two_classes();
    let mut scope = SearchScope::new(&problem, seeded(2)).unwrap();
    let report = scope.construct_greedy();

    assert_eq!(report.placed_hours, 20);
    assert_eq!(scope.cost().hard(), 20);
    assert_eq!(scope.cost(), scope.model().evaluate(scope.state()));
}

#[test]
fn test_applied_moves_keep_cached_cost_exact() {
    let problem = unbalanced();
    let config = seeded(3).with_max_sampling_attempts(5_000);
    let mut scope = SearchScope::new(&problem, config).unwrap();
    scope.construct_random();

    let hour_swap = HourSwapExplorer::from_config(scope.config());
    let assign = ProfessorAssignExplorer::from_config(scope.config());
    let prof_swap = ProfessorSwapExplorer::from_config(scope.config());

    for step in 0..200 {
        let before = scope.cost();
        let applied = match step % 3 {
            0 => match scope.random_move(&hour_swap) {
                Ok(mv) => {
                    let delta = scope.delta(&hour_swap, &mv);
                    assert!(scope.apply(&hour_swap, &mv));
                    assert_eq!(scope.cost(), before + delta);
                    true
                }
                Err(_) => false,
            },
            1 => match scope.random_move(&assign) {
                Ok(mv) => scope.apply(&assign, &mv),
                Err(_) => false,
            },
            _ => match scope.random_move(&prof_swap) {
                Ok(mv) => scope.apply(&prof_swap, &mv),
                Err(_) => false,
            },
        };
        if applied {
            scope.update_best();
        }
        assert_eq!(scope.cost(), scope.model().evaluate(scope.state()));
    }
    scope.state().check_consistency().unwrap();
}

#[test]
fn test_apply_rejects_infeasible_move() {
    let problem = two_classes();
    let mut scope = SearchScope::new(&problem, seeded(4)).unwrap();
    let explorer = HourSwapExplorer::new();
    // both slots empty
    let mv = crate::heuristic::HourSwapMove::new(0, 0, 0, 1, 1);
    assert!(!explorer.feasible_move(scope.state(), &mv));
    assert!(!scope.apply(&explorer, &mv));
    assert_eq!(scope.applied_moves(), 0);
}

#[test]
fn test_best_tracking_and_restore() {
    let problem = two_classes();
    let mut scope = SearchScope::new(&problem, seeded(5)).unwrap();
    scope.construct_greedy();
    assert!(scope.update_best());
    let best = scope.cost();
    let snapshot = scope.state().snapshot();

    // an equal cost is not an improvement
    let mut worse = ScheduleState::new(&problem);
    assert!(worse.assign_hour(0, 0, 0, 0));
    let mut other = SearchScope::from_state(worse, seeded(5)).unwrap();
    assert!(other.update_best());
    assert!(!other.update_best());

    let swap = HourSwapExplorer::new();
    let mv = scope.random_move(&swap).unwrap();
    assert!(scope.apply(&swap, &mv));
    scope.restore_best().unwrap();
    assert_eq!(scope.cost(), best);
    assert_eq!(&scope.state().snapshot(), &snapshot);
}

#[test]
fn test_restore_best_without_best_fails() {
    let problem = two_classes();
    let mut scope = SearchScope::new(&problem, seeded(6)).unwrap();
    assert!(scope.restore_best().is_err());
}

#[test]
fn test_seeded_scopes_are_reproducible() {
    let problem = unbalanced();
    let run = || {
        let mut scope = SearchScope::new(&problem, seeded(42)).unwrap();
        scope.construct_greedy();
        let explorer = HourSwapExplorer::new();
        let mv = scope.random_move(&explorer).unwrap();
        (scope.state().snapshot(), mv)
    };
    assert_eq!(run(), run());
}
