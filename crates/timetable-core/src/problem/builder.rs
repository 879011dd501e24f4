//! Validating builder for [`ProblemDefinition`].

use std::collections::HashSet;

use super::{CostWeights, Day, ProblemDefinition, Professor, Subject, DEFAULT_DAY_NAMES};
use crate::error::{Result, TimetableError};

/// Collects problem data and validates it in [`build`](Self::build).
///
/// Professors refer to their subject by name so that a dangling reference is
/// reported as a configuration error instead of an out-of-range index.
#[derive(Debug, Clone)]
pub struct ProblemBuilder {
    days: usize,
    hours_per_day: usize,
    day_names: Option<Vec<String>>,
    classes: Vec<String>,
    subjects: Vec<Subject>,
    professors: Vec<(String, String, Day)>,
    subject_max_hours_per_day: usize,
    prof_max_weekly_hours: usize,
    weights: CostWeights,
}

impl ProblemBuilder {
    pub(super) fn new(days: usize, hours_per_day: usize) -> Self {
        Self {
            days,
            hours_per_day,
            day_names: None,
            classes: Vec::new(),
            subjects: Vec::new(),
            professors: Vec::new(),
            subject_max_hours_per_day: 0,
            prof_max_weekly_hours: 0,
            weights: CostWeights::default(),
        }
    }

    /// Overrides the default `mon..sun` day names.
    pub fn day_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.day_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn subject(mut self, name: impl Into<String>, weekly_hours: usize) -> Self {
        self.subjects.push(Subject {
            name: name.into(),
            weekly_hours,
        });
        self
    }

    pub fn professor(
        mut self,
        name: impl Into<String>,
        subject: impl Into<String>,
        unavailable_day: Day,
    ) -> Self {
        self.professors
            .push((name.into(), subject.into(), unavailable_day));
        self
    }

    /// Daily cap per class and subject; 0 disables it.
    pub fn subject_max_hours_per_day(mut self, hours: usize) -> Self {
        self.subject_max_hours_per_day = hours;
        self
    }

    /// Weekly cap per professor; 0 disables it.
    pub fn prof_max_weekly_hours(mut self, hours: usize) -> Self {
        self.prof_max_weekly_hours = hours;
        self
    }

    pub fn weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates the collected data and produces the problem.
    ///
    /// # Errors
    ///
    /// Returns [`TimetableError::Config`] on the first inconsistency found.
    pub fn build(self) -> Result<ProblemDefinition> {
        if self.days == 0 || self.hours_per_day == 0 {
            return Err(config("the grid needs at least one day and one hour"));
        }

        let day_names = match self.day_names {
            Some(names) if names.len() != self.days => {
                return Err(config(format!(
                    "{} day names given for {} days",
                    names.len(),
                    self.days
                )))
            }
            Some(names) => names,
            None if self.days > DEFAULT_DAY_NAMES.len() => {
                return Err(config(format!(
                    "at most {} days are supported, got {}",
                    DEFAULT_DAY_NAMES.len(),
                    self.days
                )))
            }
            None => DEFAULT_DAY_NAMES[..self.days]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        unique("day", day_names.iter())?;

        if self.classes.is_empty() {
            return Err(config("no classes defined"));
        }
        if self.subjects.is_empty() {
            return Err(config("no subjects defined"));
        }
        if self.professors.is_empty() {
            return Err(config("no professors defined"));
        }
        unique("class", self.classes.iter())?;
        unique("subject", self.subjects.iter().map(|s| &s.name))?;
        unique("professor", self.professors.iter().map(|p| &p.0))?;

        let slots = self.days * self.hours_per_day;
        let total: usize = self.subjects.iter().map(|s| s.weekly_hours).sum();
        if total > slots {
            return Err(config(format!(
                "subjects need {} hours per class but the week has {} slots",
                total, slots
            )));
        }

        let mut professors = Vec::with_capacity(self.professors.len());
        let mut subject_professors = vec![Vec::new(); self.subjects.len()];
        for (id, (name, subject_name, unavailable_day)) in self.professors.into_iter().enumerate()
        {
            let subject = self
                .subjects
                .iter()
                .position(|s| s.name == subject_name)
                .ok_or_else(|| {
                    config(format!(
                        "professor {} teaches unknown subject {}",
                        name, subject_name
                    ))
                })?;
            if unavailable_day >= self.days {
                return Err(config(format!(
                    "professor {} is unavailable on day {} outside the {}-day week",
                    name, unavailable_day, self.days
                )));
            }
            subject_professors[subject].push(id);
            professors.push(Professor {
                name,
                subject,
                unavailable_day,
            });
        }

        if let Some(s) = subject_professors.iter().position(Vec::is_empty) {
            return Err(config(format!(
                "subject {} has no professor",
                self.subjects[s].name
            )));
        }

        let w = &self.weights;
        if [
            w.professor_unavailability,
            w.max_subject_hours_per_day,
            w.professor_max_weekly_hours,
            w.schedule_contiguity,
        ]
        .iter()
        .any(|&x| x < 0)
        {
            return Err(config("cost weights must be non-negative"));
        }

        let subject_max_hours_per_day = match self.subject_max_hours_per_day {
            0 => self.hours_per_day,
            n => n,
        };
        let prof_max_weekly_hours = match self.prof_max_weekly_hours {
            0 => slots,
            n => n,
        };

        Ok(ProblemDefinition {
            day_names,
            hours_per_day: self.hours_per_day,
            classes: self.classes,
            subjects: self.subjects,
            professors,
            subject_max_hours_per_day,
            prof_max_weekly_hours,
            weights: self.weights,
            subject_professors,
        })
    }
}

fn config(msg: impl Into<String>) -> TimetableError {
    TimetableError::Config(msg.into())
}

fn unique<'a>(what: &str, names: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(config(format!("duplicate {} name {}", what, name)));
        }
    }
    Ok(())
}
