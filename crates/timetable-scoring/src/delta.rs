//! Shared helpers for incremental cost evaluation.

use smallvec::SmallVec;
use timetable_core::{ClassId, Day, Hour, ProfId, ScheduleState, SlotChange};

/// Signed adjustments accumulated per key, in first-seen order.
pub(crate) struct Tally<K> {
    entries: SmallVec<[(K, i64); 8]>,
}

impl<K: Copy + PartialEq> Tally<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K, amount: i64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((key, amount)),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (K, i64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Occupant of a class slot once `changes` are applied.
pub(crate) fn projected_class_slot(
    state: &ScheduleState<'_>,
    changes: &[SlotChange],
    class: ClassId,
    day: Day,
    hour: Hour,
) -> Option<ProfId> {
    changes
        .iter()
        .find(|ch| ch.class == class && ch.day == day && ch.hour == hour)
        .map_or_else(|| state.class_schedule(class, day, hour), |ch| ch.after)
}

/// Units above `cap`.
#[inline]
pub(crate) fn excess(count: i64, cap: usize) -> i64 {
    (count - cap as i64).max(0)
}
