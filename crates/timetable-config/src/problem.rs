//! Problem instance files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use timetable_core::problem::DEFAULT_DAY_NAMES;
use timetable_core::{CostWeights, ProblemDefinition};

use crate::ConfigError;

/// A timetabling instance as written in a problem file.
///
/// Limits set to 0 (or left out) are disabled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProblemConfig {
    pub days: usize,

    pub hours_per_day: usize,

    /// Names of the days; defaults to `mon`, `tue`, ...
    #[serde(default)]
    pub day_names: Option<Vec<String>>,

    #[serde(default)]
    pub subject_max_hours_per_day: usize,

    #[serde(default)]
    pub prof_max_weekly_hours: usize,

    #[serde(default)]
    pub weights: WeightsConfig,

    pub classes: Vec<String>,

    pub subjects: Vec<SubjectConfig>,

    pub professors: Vec<ProfessorConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SubjectConfig {
    pub name: String,
    pub weekly_hours: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProfessorConfig {
    pub name: String,
    /// Name of the subject taught.
    pub subject: String,
    /// Name of the day the professor would rather keep free.
    pub unavailable_day: String,
}

/// Soft constraint weights; each defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WeightsConfig {
    #[serde(default = "one")]
    pub professor_unavailability: i64,

    #[serde(default = "one")]
    pub max_subject_hours_per_day: i64,

    #[serde(default = "one")]
    pub professor_max_weekly_hours: i64,

    #[serde(default = "one")]
    pub schedule_contiguity: i64,
}

fn one() -> i64 {
    1
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            professor_unavailability: 1,
            max_subject_hours_per_day: 1,
            professor_max_weekly_hours: 1,
            schedule_contiguity: 1,
        }
    }
}

impl From<WeightsConfig> for CostWeights {
    fn from(w: WeightsConfig) -> Self {
        CostWeights {
            professor_unavailability: w.professor_unavailability,
            max_subject_hours_per_day: w.max_subject_hours_per_day,
            professor_max_weekly_hours: w.professor_max_weekly_hours,
            schedule_contiguity: w.schedule_contiguity,
        }
    }
}

impl ProblemConfig {
    /// Loads a problem from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Resolves names and validates the instance.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] for unknown day names, otherwise the
    /// validation error of [`ProblemDefinition`] wrapped in
    /// [`ConfigError::Problem`].
    pub fn into_problem(&self) -> Result<ProblemDefinition, ConfigError> {
        let day_names: Vec<String> = match &self.day_names {
            Some(names) => names.clone(),
            None => DEFAULT_DAY_NAMES
                .iter()
                .take(self.days)
                .map(|s| s.to_string())
                .collect(),
        };

        let mut builder = ProblemDefinition::builder(self.days, self.hours_per_day)
            .subject_max_hours_per_day(self.subject_max_hours_per_day)
            .prof_max_weekly_hours(self.prof_max_weekly_hours)
            .weights(self.weights.into());
        if self.day_names.is_some() {
            builder = builder.day_names(day_names.iter().cloned());
        }
        for class in &self.classes {
            builder = builder.class(class.clone());
        }
        for subject in &self.subjects {
            builder = builder.subject(subject.name.clone(), subject.weekly_hours);
        }
        for prof in &self.professors {
            let day = day_names
                .iter()
                .position(|d| d.eq_ignore_ascii_case(&prof.unavailable_day))
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "professor {} is unavailable on unknown day {}",
                        prof.name, prof.unavailable_day
                    ))
                })?;
            builder = builder.professor(prof.name.clone(), prof.subject.clone(), day);
        }

        Ok(builder.build()?)
    }
}
