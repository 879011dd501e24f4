//! Tests for problem and search configuration.

use super::*;
use timetable_scoring::ComponentKind;

const PROBLEM_TOML: &str = r#"
    days = 5
    hours_per_day = 4
    subject_max_hours_per_day = 2
    classes = ["1A", "1B"]

    [weights]
    professor_unavailability = 4
    schedule_contiguity = 2

    [[subjects]]
    name = "math"
    weekly_hours = 6

    [[subjects]]
    name = "art"
    weekly_hours = 2

    [[professors]]
    name = "Rossi"
    subject = "math"
    unavailable_day = "mon"

    [[professors]]
    name = "Verdi"
    subject = "art"
    unavailable_day = "Fri"
"#;

#[test]
fn test_problem_toml_parsing() {
    let config = ProblemConfig::from_toml_str(PROBLEM_TOML).unwrap();
    assert_eq!(config.classes.len(), 2);
    assert_eq!(config.weights.professor_unavailability, 4);
    assert_eq!(config.weights.max_subject_hours_per_day, 1);

    let problem = config.into_problem().unwrap();
    assert_eq!(problem.subject_max_hours_per_day(), 2);
    assert_eq!(problem.prof_max_weekly_hours(), 20);
    assert_eq!(problem.professor_unavailable_day(1), 4);
    assert_eq!(problem.weights().schedule_contiguity, 2);
}

#[test]
fn test_problem_yaml_parsing() {
    let yaml = r#"
        days: 2
        hours_per_day: 3
        day_names: [lun, mar]
        classes: [1A]
        subjects:
          - name: math
            weekly_hours: 3
        professors:
          - name: Rossi
            subject: math
            unavailable_day: mar
    "#;

    let problem = ProblemConfig::from_yaml_str(yaml)
        .unwrap()
        .into_problem()
        .unwrap();
    assert_eq!(problem.day_name(0), "lun");
    assert_eq!(problem.professor_unavailable_day(0), 1);
}

#[test]
fn test_problem_unknown_day() {
    let toml = PROBLEM_TOML.replace("\"Fri\"", "\"someday\"");
    let err = ProblemConfig::from_toml_str(&toml)
        .unwrap()
        .into_problem()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_problem_unknown_subject_fails_fast() {
    let toml = PROBLEM_TOML.replace("subject = \"art\"", "subject = \"music\"");
    let err = ProblemConfig::from_toml_str(&toml)
        .unwrap()
        .into_problem()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Problem(timetable_core::TimetableError::Config(_))
    ));
}

#[test]
fn test_problem_missing_field() {
    assert!(matches!(
        ProblemConfig::from_toml_str("days = 5"),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_search_toml_parsing() {
    let toml = r#"
        random_seed = 42
        max_sampling_attempts = 500

        [weights]
        schedule_contiguity = 7

        [greedy]
        respect_unavailability = false
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.max_sampling_attempts, 500);
    assert!(!config.greedy.respect_unavailability);

    let overrides = config.weight_overrides().unwrap();
    assert_eq!(overrides.get(ComponentKind::ScheduleContiguity), Some(7));
}

#[test]
fn test_search_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.random_seed, None);
    assert!(config.greedy.respect_unavailability);
}

#[test]
fn test_search_rejects_bad_weights() {
    assert!(SearchConfig::from_toml_str("[weights]\nsolution_complete = 2").is_err());
    assert!(SearchConfig::from_toml_str("[weights]\nbogus = 2").is_err());
    assert!(SearchConfig::from_toml_str("[weights]\nschedule_contiguity = -1").is_err());
    assert!(SearchConfig::from_toml_str("max_sampling_attempts = 0").is_err());
}

#[test]
fn test_search_builder() {
    let config = SearchConfig::new()
        .with_random_seed(123)
        .with_max_sampling_attempts(10)
        .with_weight(ComponentKind::ProfessorUnavailability, 3)
        .with_respect_unavailability(false);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.max_sampling_attempts, 10);
    assert!(config.validate().is_ok());
    assert_eq!(
        config
            .weight_overrides()
            .unwrap()
            .get(ComponentKind::ProfessorUnavailability),
        Some(3)
    );
}

#[test]
fn test_load_missing_file_falls_back() {
    let config = SearchConfig::load("/nonexistent/search.toml").unwrap_or_default();
    assert_eq!(config.max_sampling_attempts, 100_000);
    assert!(matches!(
        ProblemConfig::load("/nonexistent/problem.toml"),
        Err(ConfigError::Io(_))
    ));
}
