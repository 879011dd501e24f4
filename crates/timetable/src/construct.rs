//! Entry point that builds a starting schedule with default wiring.

use timetable_config::{ConfigError, SearchConfig};
use timetable_core::ProblemDefinition;
use timetable_solver::SearchScope;
use tracing::info;

/// Builds a greedy starting schedule for `problem`.
///
/// Search settings come from `search.toml` in the working directory when it
/// exists, defaults otherwise.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] when the settings carry bad weight
/// overrides.
pub fn construct_schedule(problem: &ProblemDefinition) -> Result<SearchScope<'_>, ConfigError> {
    let config = SearchConfig::load("search.toml").unwrap_or_default();
    construct_schedule_with(problem, config)
}

/// Builds a greedy starting schedule for `problem` with explicit settings.
pub fn construct_schedule_with(
    problem: &ProblemDefinition,
    config: SearchConfig,
) -> Result<SearchScope<'_>, ConfigError> {
    #[cfg(feature = "console")]
    timetable_console::init();

    let mut scope = SearchScope::new(problem, config)?;
    let report = scope.construct_greedy();
    info!(
        event = "schedule_ready",
        placed_hours = report.placed_hours as u64,
        unplaced_hours = report.unplaced_hours as u64,
        cost = %scope.cost(),
    );
    Ok(scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetable_config::ProblemConfig;
    use timetable_scoring::ComponentKind;

    fn problem() -> ProblemDefinition {
        ProblemConfig::from_toml_str(
            r#"
            days = 5
            hours_per_day = 4
            classes = ["1A", "1B"]
            subject_max_hours_per_day = 2

            [[subjects]]
            name = "math"
            weekly_hours = 5

            [[subjects]]
            name = "art"
            weekly_hours = 3

            [[professors]]
            name = "Rossi"
            subject = "math"
            unavailable_day = "mon"

            [[professors]]
            name = "Verdi"
            subject = "art"
            unavailable_day = "fri"
            "#,
        )
        .unwrap()
        .into_problem()
        .unwrap()
    }

    #[test]
    fn test_construct_schedule_with_seed() {
        let problem = problem();
        let config = SearchConfig::new().with_random_seed(11);
        let scope = construct_schedule_with(&problem, config.clone()).unwrap();

        // 16 of 40 class hours are required, the rest stay free
        assert_eq!(scope.cost().hard(), 24);
        assert_eq!(scope.cost(), scope.model().evaluate(scope.state()));
        let explanation = scope.explain();
        assert_eq!(
            explanation
                .component(ComponentKind::SolutionComplete)
                .map(|c| c.units),
            Some(40 - 16)
        );

        let again = construct_schedule_with(&problem, config).unwrap();
        assert_eq!(again.state().snapshot(), scope.state().snapshot());
    }

    #[test]
    fn test_construct_schedule_rejects_bad_weights() {
        let problem = problem();
        let mut config = SearchConfig::new();
        config.weights.insert("bogus".to_string(), 1);
        assert!(construct_schedule_with(&problem, config).is_err());
    }
}
