//! Static problem data: the class/day/hour grid, subjects, professors,
//! caps and soft-constraint weights.
//!
//! A [`ProblemDefinition`] is immutable once built. Schedules borrow it for
//! their whole lifetime and only ever read it through the accessors below.

mod builder;

#[cfg(test)]
mod tests;

use std::fmt;

pub use builder::ProblemBuilder;

/// Index of a class.
pub type ClassId = usize;
/// Index of a subject.
pub type SubjectId = usize;
/// Index of a professor.
pub type ProfId = usize;
/// Index of a teaching day within the week.
pub type Day = usize;
/// Index of an hour within a day.
pub type Hour = usize;

/// Day names used when none are given explicitly.
pub const DEFAULT_DAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// A subject and the number of hours every class must receive per week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub weekly_hours: usize,
}

/// A professor teaches exactly one subject and declares one unavailable day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub name: String,
    pub subject: SubjectId,
    pub unavailable_day: Day,
}

/// Per-violation weights of the four soft cost components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostWeights {
    pub professor_unavailability: i64,
    pub max_subject_hours_per_day: i64,
    pub professor_max_weekly_hours: i64,
    pub schedule_contiguity: i64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            professor_unavailability: 1,
            max_subject_hours_per_day: 1,
            professor_max_weekly_hours: 1,
            schedule_contiguity: 1,
        }
    }
}

/// Read-only description of a weekly timetabling instance.
///
/// Every class must receive `weekly_hours` hours of every subject. Build one
/// with [`ProblemDefinition::builder`], which validates the input and fails
/// fast with [`TimetableError::Config`](crate::TimetableError::Config).
///
/// # Example
///
/// ```
/// use timetable_core::ProblemDefinition;
///
/// let problem = ProblemDefinition::builder(5, 4)
///     .class("1A")
///     .subject("math", 3)
///     .professor("Rossi", "math", 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(problem.slots_per_week(), 20);
/// assert_eq!(problem.day_name(2), "wed");
/// assert_eq!(problem.subject_professors(0), &[0]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ProblemDefinition {
    day_names: Vec<String>,
    hours_per_day: usize,
    classes: Vec<String>,
    subjects: Vec<Subject>,
    professors: Vec<Professor>,
    subject_max_hours_per_day: usize,
    prof_max_weekly_hours: usize,
    weights: CostWeights,
    // Professors of each subject, ascending by id.
    subject_professors: Vec<Vec<ProfId>>,
}

impl ProblemDefinition {
    /// Starts building a problem over a `days × hours_per_day` grid.
    pub fn builder(days: usize, hours_per_day: usize) -> ProblemBuilder {
        ProblemBuilder::new(days, hours_per_day)
    }

    #[inline]
    pub fn days(&self) -> usize {
        self.day_names.len()
    }

    #[inline]
    pub fn hours_per_day(&self) -> usize {
        self.hours_per_day
    }

    /// Number of `(day, hour)` slots in one week.
    #[inline]
    pub fn slots_per_week(&self) -> usize {
        self.days() * self.hours_per_day
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    #[inline]
    pub fn professor_count(&self) -> usize {
        self.professors.len()
    }

    pub fn class_name(&self, class: ClassId) -> &str {
        &self.classes[class]
    }

    pub fn subject_name(&self, subject: SubjectId) -> &str {
        &self.subjects[subject].name
    }

    pub fn professor_name(&self, prof: ProfId) -> &str {
        &self.professors[prof].name
    }

    pub fn day_name(&self, day: Day) -> &str {
        &self.day_names[day]
    }

    pub fn subject(&self, subject: SubjectId) -> &Subject {
        &self.subjects[subject]
    }

    pub fn professor(&self, prof: ProfId) -> &Professor {
        &self.professors[prof]
    }

    /// The subject taught by `prof`.
    #[inline]
    pub fn professor_subject(&self, prof: ProfId) -> SubjectId {
        self.professors[prof].subject
    }

    /// The day `prof` would rather not teach.
    #[inline]
    pub fn professor_unavailable_day(&self, prof: ProfId) -> Day {
        self.professors[prof].unavailable_day
    }

    /// Hours per week every class needs of `subject`.
    #[inline]
    pub fn subject_weekly_hours(&self, subject: SubjectId) -> usize {
        self.subjects[subject].weekly_hours
    }

    /// Professors teaching `subject`, ascending by id.
    #[inline]
    pub fn subject_professors(&self, subject: SubjectId) -> &[ProfId] {
        &self.subject_professors[subject]
    }

    /// Maximum hours of one subject a class should get on a single day.
    #[inline]
    pub fn subject_max_hours_per_day(&self) -> usize {
        self.subject_max_hours_per_day
    }

    /// Maximum hours a professor should teach per week.
    #[inline]
    pub fn prof_max_weekly_hours(&self) -> usize {
        self.prof_max_weekly_hours
    }

    #[inline]
    pub fn weights(&self) -> &CostWeights {
        &self.weights
    }

    /// Returns a copy of this problem with different soft weights.
    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn classes(&self) -> impl Iterator<Item = ClassId> {
        0..self.class_count()
    }

    pub fn subjects(&self) -> impl Iterator<Item = SubjectId> {
        0..self.subject_count()
    }

    pub fn professors(&self) -> impl Iterator<Item = ProfId> {
        0..self.professor_count()
    }

    /// All `(day, hour)` pairs in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = (Day, Hour)> {
        let hours = self.hours_per_day;
        (0..self.days()).flat_map(move |d| (0..hours).map(move |h| (d, h)))
    }
}

impl fmt::Debug for ProblemDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemDefinition")
            .field("days", &self.days())
            .field("hours_per_day", &self.hours_per_day)
            .field("classes", &self.classes.len())
            .field("subjects", &self.subjects.len())
            .field("professors", &self.professors.len())
            .field("subject_max_hours_per_day", &self.subject_max_hours_per_day)
            .field("prof_max_weekly_hours", &self.prof_max_weekly_hours)
            .finish()
    }
}
