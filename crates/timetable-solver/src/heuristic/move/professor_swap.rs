//! ProfessorSwapMove - exchanges the professors of a subject between classes.

use std::fmt;

use timetable_core::{ClassId, ProfId, ScheduleState, SlotChange, SlotChanges, SubjectId};

use super::Move;

/// Hands every hour of `subject` in `class1` to the professor currently
/// teaching it in `class2`, and vice versa.
///
/// `class1 < class2` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfessorSwapMove {
    subject: SubjectId,
    class1: ClassId,
    class2: ClassId,
}

impl ProfessorSwapMove {
    /// Creates a move, ordering the two classes.
    pub fn new(subject: SubjectId, class1: ClassId, class2: ClassId) -> Self {
        Self {
            subject,
            class1: class1.min(class2),
            class2: class1.max(class2),
        }
    }

    pub fn subject(&self) -> SubjectId {
        self.subject
    }

    pub fn classes(&self) -> (ClassId, ClassId) {
        (self.class1, self.class2)
    }
}

impl Move for ProfessorSwapMove {
    fn is_doable(&self, state: &ScheduleState<'_>) -> bool {
        if self.class1 == self.class2 {
            return false;
        }
        let (Some(p1), Some(p2)) = (
            state.subject_prof(self.class1, self.subject),
            state.subject_prof(self.class2, self.subject),
        ) else {
            return false;
        };
        if p1 == p2 {
            return false;
        }

        // each professor must be free wherever they take over, apart from
        // the hours they give up in their own class
        state.problem().slots().all(|(d, h)| {
            let available = |prof: ProfId, own: ClassId| {
                state
                    .prof_schedule(prof, d, h)
                    .map_or(true, |class| class == own)
            };
            (state.class_schedule(self.class2, d, h) != Some(p2) || available(p1, self.class1))
                && (state.class_schedule(self.class1, d, h) != Some(p1)
                    || available(p2, self.class2))
        })
    }

    fn do_move(&self, state: &mut ScheduleState<'_>) -> bool {
        if !self.is_doable(state) {
            return false;
        }
        let (Some(p1), Some(p2)) = (
            state.subject_prof(self.class1, self.subject),
            state.subject_prof(self.class2, self.subject),
        ) else {
            return false;
        };

        let hours1: Vec<_> = state.prof_hours_in_class(p1, self.class1).collect();
        let hours2: Vec<_> = state.prof_hours_in_class(p2, self.class2).collect();
        for &(d, h) in &hours1 {
            state.free_hour(self.class1, d, h);
        }
        for &(d, h) in &hours2 {
            state.free_hour(self.class2, d, h);
        }
        let mut placed = true;
        for &(d, h) in &hours1 {
            placed &= state.assign_hour(self.class1, d, h, p2);
        }
        for &(d, h) in &hours2 {
            placed &= state.assign_hour(self.class2, d, h, p1);
        }
        debug_assert!(placed, "feasible professor swap must place every hour");
        placed
    }

    fn slot_changes(&self, state: &ScheduleState<'_>) -> SlotChanges {
        let (Some(p1), Some(p2)) = (
            state.subject_prof(self.class1, self.subject),
            state.subject_prof(self.class2, self.subject),
        ) else {
            return SlotChanges::new();
        };

        state
            .prof_hours_in_class(p1, self.class1)
            .map(|(d, h)| SlotChange::new(self.class1, d, h, Some(p1), Some(p2)))
            .chain(
                state
                    .prof_hours_in_class(p2, self.class2)
                    .map(|(d, h)| SlotChange::new(self.class2, d, h, Some(p2), Some(p1))),
            )
            .collect()
    }
}

impl fmt::Display for ProfessorSwapMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} <-> {}", self.subject, self.class1, self.class2)
    }
}
