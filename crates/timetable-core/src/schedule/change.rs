//! Slot-level description of what a move does to the class view.

use smallvec::SmallVec;

use crate::problem::{ClassId, Day, Hour, ProfId};

/// One class slot whose occupant changes from `before` to `after`.
///
/// A move is fully described by its slot changes; the professor view follows
/// from them by mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotChange {
    pub class: ClassId,
    pub day: Day,
    pub hour: Hour,
    pub before: Option<ProfId>,
    pub after: Option<ProfId>,
}

impl SlotChange {
    pub fn new(
        class: ClassId,
        day: Day,
        hour: Hour,
        before: Option<ProfId>,
        after: Option<ProfId>,
    ) -> Self {
        Self {
            class,
            day,
            hour,
            before,
            after,
        }
    }

    /// Returns true if the slot goes from empty to filled or back.
    #[inline]
    pub fn flips_occupancy(&self) -> bool {
        self.before.is_some() != self.after.is_some()
    }
}

/// Slot changes of a single move. Hour moves touch at most two slots.
pub type SlotChanges = SmallVec<[SlotChange; 4]>;
