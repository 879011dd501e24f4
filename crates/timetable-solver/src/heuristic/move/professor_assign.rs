//! ProfessorAssignMove - fills an empty class hour.

use std::fmt;

use smallvec::smallvec;
use timetable_core::{ClassId, Day, Hour, ProfId, ScheduleState, SlotChange, SlotChanges};

use super::Move;

/// Puts `professor` in `class` at `(day, hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfessorAssignMove {
    class: ClassId,
    day: Day,
    hour: Hour,
    professor: ProfId,
}

impl ProfessorAssignMove {
    pub fn new(class: ClassId, day: Day, hour: Hour, professor: ProfId) -> Self {
        Self {
            class,
            day,
            hour,
            professor,
        }
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn slot(&self) -> (Day, Hour) {
        (self.day, self.hour)
    }

    pub fn professor(&self) -> ProfId {
        self.professor
    }
}

/// Returns true if `prof` may receive another hour in `class`: their subject
/// still misses hours there and no other professor teaches it to the class.
pub fn is_candidate(state: &ScheduleState<'_>, class: ClassId, prof: ProfId) -> bool {
    let subject = state.problem().professor_subject(prof);
    state.weekly_subject_residual_hours(class, subject) > 0
        && state
            .subject_prof(class, subject)
            .map_or(true, |assigned| assigned == prof)
}

impl Move for ProfessorAssignMove {
    fn is_doable(&self, state: &ScheduleState<'_>) -> bool {
        is_candidate(state, self.class, self.professor)
            && state.is_class_hour_free(self.class, self.day, self.hour)
            && state.is_prof_hour_free(self.professor, self.day, self.hour)
    }

    fn do_move(&self, state: &mut ScheduleState<'_>) -> bool {
        self.is_doable(state)
            && state.assign_hour(self.class, self.day, self.hour, self.professor)
    }

    fn slot_changes(&self, state: &ScheduleState<'_>) -> SlotChanges {
        let before = state.class_schedule(self.class, self.day, self.hour);
        smallvec![SlotChange::new(
            self.class,
            self.day,
            self.hour,
            before,
            Some(self.professor)
        )]
    }
}

impl fmt::Display for ProfessorAssignMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}) <- {}",
            self.class, self.day, self.hour, self.professor
        )
    }
}
