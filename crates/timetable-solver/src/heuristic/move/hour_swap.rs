//! HourSwapMove - exchanges two hours within one class.

use std::fmt;

use smallvec::smallvec;
use timetable_core::{ClassId, Day, Hour, ScheduleState, SlotChange, SlotChanges};

use super::Move;

/// Exchanges the occupants of two `(day, hour)` slots of one class.
///
/// The first slot always precedes the second in row-major order, so each
/// unordered pair has exactly one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourSwapMove {
    class: ClassId,
    day1: Day,
    hour1: Hour,
    day2: Day,
    hour2: Hour,
}

impl HourSwapMove {
    /// Creates a move, ordering the two slots.
    pub fn new(class: ClassId, day1: Day, hour1: Hour, day2: Day, hour2: Hour) -> Self {
        let ((day1, hour1), (day2, hour2)) = if (day1, hour1) <= (day2, hour2) {
            ((day1, hour1), (day2, hour2))
        } else {
            ((day2, hour2), (day1, hour1))
        };
        Self {
            class,
            day1,
            hour1,
            day2,
            hour2,
        }
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn first(&self) -> (Day, Hour) {
        (self.day1, self.hour1)
    }

    pub fn second(&self) -> (Day, Hour) {
        (self.day2, self.hour2)
    }
}

impl Move for HourSwapMove {
    fn is_doable(&self, state: &ScheduleState<'_>) -> bool {
        if self.first() == self.second() {
            return false;
        }
        let a = state.class_schedule(self.class, self.day1, self.hour1);
        let b = state.class_schedule(self.class, self.day2, self.hour2);
        a != b
            && a.map_or(true, |p| state.is_prof_hour_free(p, self.day2, self.hour2))
            && b.map_or(true, |p| state.is_prof_hour_free(p, self.day1, self.hour1))
    }

    fn do_move(&self, state: &mut ScheduleState<'_>) -> bool {
        self.is_doable(state)
            && state.swap_hours(
                self.class, self.day1, self.hour1, self.class, self.day2, self.hour2,
            )
    }

    fn slot_changes(&self, state: &ScheduleState<'_>) -> SlotChanges {
        let a = state.class_schedule(self.class, self.day1, self.hour1);
        let b = state.class_schedule(self.class, self.day2, self.hour2);
        smallvec![
            SlotChange::new(self.class, self.day1, self.hour1, a, b),
            SlotChange::new(self.class, self.day2, self.hour2, b, a),
        ]
    }
}

impl fmt::Display for HourSwapMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}, {}) <-> ({}, {})",
            self.class, self.day1, self.hour1, self.day2, self.hour2
        )
    }
}
