//! Mutable weekly timetable with mirrored indexes.
//!
//! [`ScheduleState`] keeps the class-indexed and professor-indexed views of
//! the same occupancy together with every derived counter the cost model
//! reads. All edits go through [`assign_hour`](ScheduleState::assign_hour),
//! [`free_hour`](ScheduleState::free_hour) and
//! [`swap_hours`](ScheduleState::swap_hours); each either succeeds and leaves
//! every index consistent, or returns `false` and changes nothing.

mod change;
mod snapshot;

#[cfg(test)]
mod tests;

use std::fmt;

pub use change::{SlotChange, SlotChanges};
pub use snapshot::ScheduleSnapshot;

use crate::error::{Result, TimetableError};
use crate::problem::{ClassId, Day, Hour, ProblemDefinition, ProfId, SubjectId};

/// The timetable being searched.
///
/// Borrows its [`ProblemDefinition`] for its whole lifetime. Equality compares
/// occupancy and counters only.
///
/// # Example
///
/// ```
/// use timetable_core::{ProblemDefinition, ScheduleState};
///
/// let problem = ProblemDefinition::builder(5, 4)
///     .class("1A")
///     .subject("math", 2)
///     .professor("Rossi", "math", 0)
///     .build()
///     .unwrap();
///
/// let mut state = ScheduleState::new(&problem);
/// assert!(state.assign_hour(0, 1, 0, 0));
/// assert!(!state.assign_hour(0, 1, 0, 0));
/// assert_eq!(state.weekly_subject_residual_hours(0, 0), 1);
/// assert_eq!(state.prof_assigned_day_off(0), Some(0));
/// ```
#[derive(Clone)]
pub struct ScheduleState<'a> {
    problem: &'a ProblemDefinition,
    // [class][day][hour]
    class_schedule: Vec<Option<ProfId>>,
    // [prof][day][hour]
    prof_schedule: Vec<Option<ClassId>>,
    // [class][subject]
    class_subject_prof: Vec<Option<ProfId>>,
    // [class][day][subject]
    daily_subject_hours: Vec<usize>,
    // [class][subject]
    weekly_subject_hours: Vec<usize>,
    prof_weekly_hours: Vec<usize>,
    // [prof][day]
    prof_daily_hours: Vec<usize>,
    prof_day_off: Vec<Option<Day>>,
}

impl<'a> ScheduleState<'a> {
    /// Creates an empty schedule. Every professor starts with their declared
    /// unavailable day as day off.
    pub fn new(problem: &'a ProblemDefinition) -> Self {
        let classes = problem.class_count();
        let profs = problem.professor_count();
        let subjects = problem.subject_count();
        let days = problem.days();
        let slots = problem.slots_per_week();

        Self {
            problem,
            class_schedule: vec![None; classes * slots],
            prof_schedule: vec![None; profs * slots],
            class_subject_prof: vec![None; classes * subjects],
            daily_subject_hours: vec![0; classes * days * subjects],
            weekly_subject_hours: vec![0; classes * subjects],
            prof_weekly_hours: vec![0; profs],
            prof_daily_hours: vec![0; profs * days],
            prof_day_off: problem
                .professors()
                .map(|p| Some(problem.professor_unavailable_day(p)))
                .collect(),
        }
    }

    #[inline]
    pub fn problem(&self) -> &'a ProblemDefinition {
        self.problem
    }

    #[inline]
    fn slot_index(&self, row: usize, day: Day, hour: Hour) -> usize {
        debug_assert!(day < self.problem.days() && hour < self.problem.hours_per_day());
        (row * self.problem.days() + day) * self.problem.hours_per_day() + hour
    }

    #[inline]
    fn subject_index(&self, class: ClassId, subject: SubjectId) -> usize {
        class * self.problem.subject_count() + subject
    }

    #[inline]
    fn daily_index(&self, class: ClassId, day: Day, subject: SubjectId) -> usize {
        (class * self.problem.days() + day) * self.problem.subject_count() + subject
    }

    #[inline]
    fn prof_day_index(&self, prof: ProfId, day: Day) -> usize {
        prof * self.problem.days() + day
    }

    // ---- queries ----

    /// The professor teaching `class` at `(day, hour)`.
    #[inline]
    pub fn class_schedule(&self, class: ClassId, day: Day, hour: Hour) -> Option<ProfId> {
        self.class_schedule[self.slot_index(class, day, hour)]
    }

    /// The class `prof` teaches at `(day, hour)`.
    #[inline]
    pub fn prof_schedule(&self, prof: ProfId, day: Day, hour: Hour) -> Option<ClassId> {
        self.prof_schedule[self.slot_index(prof, day, hour)]
    }

    #[inline]
    pub fn is_class_hour_free(&self, class: ClassId, day: Day, hour: Hour) -> bool {
        self.class_schedule(class, day, hour).is_none()
    }

    #[inline]
    pub fn is_prof_hour_free(&self, prof: ProfId, day: Day, hour: Hour) -> bool {
        self.prof_schedule(prof, day, hour).is_none()
    }

    /// The professor currently teaching `subject` to `class`, if any hour of
    /// it is assigned.
    #[inline]
    pub fn subject_prof(&self, class: ClassId, subject: SubjectId) -> Option<ProfId> {
        self.class_subject_prof[self.subject_index(class, subject)]
    }

    #[inline]
    pub fn weekly_subject_hours(&self, class: ClassId, subject: SubjectId) -> usize {
        self.weekly_subject_hours[self.subject_index(class, subject)]
    }

    #[inline]
    pub fn daily_subject_hours(&self, class: ClassId, day: Day, subject: SubjectId) -> usize {
        self.daily_subject_hours[self.daily_index(class, day, subject)]
    }

    /// Hours of `subject` still missing in `class`. Negative when the class
    /// is over-served.
    #[inline]
    pub fn weekly_subject_residual_hours(&self, class: ClassId, subject: SubjectId) -> i64 {
        self.problem.subject_weekly_hours(subject) as i64
            - self.weekly_subject_hours(class, subject) as i64
    }

    #[inline]
    pub fn prof_weekly_hours(&self, prof: ProfId) -> usize {
        self.prof_weekly_hours[prof]
    }

    #[inline]
    pub fn prof_daily_hours(&self, prof: ProfId, day: Day) -> usize {
        self.prof_daily_hours[self.prof_day_index(prof, day)]
    }

    /// The day `prof` teaches nothing, preferring the declared unavailable
    /// day. `None` when every day has at least one hour.
    #[inline]
    pub fn prof_assigned_day_off(&self, prof: ProfId) -> Option<Day> {
        self.prof_day_off[prof]
    }

    /// Number of empty class slots across the whole grid.
    pub fn empty_slot_count(&self) -> usize {
        self.class_schedule.iter().filter(|s| s.is_none()).count()
    }

    /// Hours of `class` currently taught by `prof`, in row-major order.
    pub fn prof_hours_in_class(
        &self,
        prof: ProfId,
        class: ClassId,
    ) -> impl Iterator<Item = (Day, Hour)> + '_ {
        self.problem
            .slots()
            .filter(move |&(d, h)| self.class_schedule(class, d, h) == Some(prof))
    }

    // ---- mutators ----

    /// Puts `prof` in `class` at `(day, hour)`.
    ///
    /// Fails without changes when either slot is taken, or when `class`
    /// already has a different professor for `prof`'s subject.
    pub fn assign_hour(&mut self, class: ClassId, day: Day, hour: Hour, prof: ProfId) -> bool {
        let class_slot = self.slot_index(class, day, hour);
        let prof_slot = self.slot_index(prof, day, hour);
        if self.class_schedule[class_slot].is_some() || self.prof_schedule[prof_slot].is_some() {
            return false;
        }

        let subject = self.problem.professor_subject(prof);
        let cs = self.subject_index(class, subject);
        if matches!(self.class_subject_prof[cs], Some(other) if other != prof) {
            return false;
        }

        self.class_schedule[class_slot] = Some(prof);
        self.prof_schedule[prof_slot] = Some(class);
        self.class_subject_prof[cs] = Some(prof);
        self.weekly_subject_hours[cs] += 1;
        let ds = self.daily_index(class, day, subject);
        self.daily_subject_hours[ds] += 1;
        self.prof_weekly_hours[prof] += 1;
        let pd = self.prof_day_index(prof, day);
        self.prof_daily_hours[pd] += 1;
        self.refresh_day_off(prof);
        true
    }

    /// Empties `class` at `(day, hour)`. Fails when the slot is already empty.
    pub fn free_hour(&mut self, class: ClassId, day: Day, hour: Hour) -> bool {
        let class_slot = self.slot_index(class, day, hour);
        let Some(prof) = self.class_schedule[class_slot] else {
            return false;
        };

        let prof_slot = self.slot_index(prof, day, hour);
        self.class_schedule[class_slot] = None;
        self.prof_schedule[prof_slot] = None;

        let subject = self.problem.professor_subject(prof);
        let cs = self.subject_index(class, subject);
        self.weekly_subject_hours[cs] -= 1;
        if self.weekly_subject_hours[cs] == 0 {
            self.class_subject_prof[cs] = None;
        }
        let ds = self.daily_index(class, day, subject);
        self.daily_subject_hours[ds] -= 1;
        self.prof_weekly_hours[prof] -= 1;
        let pd = self.prof_day_index(prof, day);
        self.prof_daily_hours[pd] -= 1;
        self.refresh_day_off(prof);
        true
    }

    /// Exchanges the occupants of two class slots, possibly of different
    /// classes.
    ///
    /// Fails without changes when both slots hold the same occupant (both
    /// empty included), when either professor is busy at the other slot's
    /// time, or when the exchange would give a class two professors for the
    /// same subject.
    pub fn swap_hours(
        &mut self,
        class1: ClassId,
        day1: Day,
        hour1: Hour,
        class2: ClassId,
        day2: Day,
        hour2: Hour,
    ) -> bool {
        let first = self.class_schedule(class1, day1, hour1);
        let second = self.class_schedule(class2, day2, hour2);
        if first == second {
            return false;
        }
        if first.is_some_and(|p| !self.is_prof_hour_free(p, day2, hour2))
            || second.is_some_and(|p| !self.is_prof_hour_free(p, day1, hour1))
        {
            return false;
        }

        if first.is_some() {
            self.free_hour(class1, day1, hour1);
        }
        if second.is_some() {
            self.free_hour(class2, day2, hour2);
        }

        let placed = second.map_or(true, |p| self.assign_hour(class1, day1, hour1, p))
            && first.map_or(true, |p| self.assign_hour(class2, day2, hour2, p));
        if placed {
            return true;
        }

        // roll back to the original occupants
        self.free_hour(class1, day1, hour1);
        self.free_hour(class2, day2, hour2);
        if let Some(p) = first {
            self.assign_hour(class1, day1, hour1, p);
        }
        if let Some(p) = second {
            self.assign_hour(class2, day2, hour2, p);
        }
        false
    }

    fn refresh_day_off(&mut self, prof: ProfId) {
        let unavailable = self.problem.professor_unavailable_day(prof);
        self.prof_day_off[prof] = if self.prof_daily_hours(prof, unavailable) == 0 {
            Some(unavailable)
        } else {
            (0..self.problem.days()).find(|&d| self.prof_daily_hours(prof, d) == 0)
        };
    }

    /// Recomputes every derived index from the class view and reports the
    /// first disagreement.
    pub fn check_consistency(&self) -> Result<()> {
        let mut rebuilt = ScheduleState::new(self.problem);
        for c in self.problem.classes() {
            for (d, h) in self.problem.slots() {
                if let Some(p) = self.class_schedule(c, d, h) {
                    if self.prof_schedule(p, d, h) != Some(c) {
                        return Err(TimetableError::InvalidState(format!(
                            "class {} at ({}, {}) holds prof {} but the prof view disagrees",
                            c, d, h, p
                        )));
                    }
                    if !rebuilt.assign_hour(c, d, h, p) {
                        return Err(TimetableError::InvalidState(format!(
                            "class {} at ({}, {}) cannot be replayed",
                            c, d, h
                        )));
                    }
                }
            }
        }
        if rebuilt != *self {
            return Err(TimetableError::InvalidState(
                "derived counters differ from a fresh replay".to_string(),
            ));
        }
        Ok(())
    }

    /// Captures the class-indexed occupancy grid.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot::capture(self)
    }
}

impl PartialEq for ScheduleState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.class_schedule == other.class_schedule
            && self.prof_schedule == other.prof_schedule
            && self.class_subject_prof == other.class_subject_prof
            && self.daily_subject_hours == other.daily_subject_hours
            && self.weekly_subject_hours == other.weekly_subject_hours
            && self.prof_weekly_hours == other.prof_weekly_hours
            && self.prof_daily_hours == other.prof_daily_hours
            && self.prof_day_off == other.prof_day_off
    }
}

impl Eq for ScheduleState<'_> {}

impl fmt::Debug for ScheduleState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleState")
            .field("classes", &self.problem.class_count())
            .field("professors", &self.problem.professor_count())
            .field("empty_slots", &self.empty_slot_count())
            .field("prof_weekly_hours", &self.prof_weekly_hours)
            .field("prof_day_off", &self.prof_day_off)
            .finish()
    }
}
