//! HardSoftCost - Two-level minimized cost

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A cost with separate hard and soft levels. Lower is better.
///
/// Hard cost counts violations of requirements that must reach zero for a
/// schedule to be usable. Soft cost is the weighted penalty to minimize.
///
/// When comparing costs:
/// 1. Hard costs are compared first
/// 2. Soft costs are only compared when hard costs are equal
///
/// # Examples
///
/// ```
/// use timetable_core::HardSoftCost;
///
/// let incomplete = HardSoftCost::of(1, 0);
/// let poor = HardSoftCost::of(0, 40);
///
/// // A complete schedule always beats an incomplete one
/// assert!(poor < incomplete);
/// assert!(poor.is_feasible());
/// assert_eq!(poor.to_string(), "0hard/40soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftCost {
    hard: i64,
    soft: i64,
}

impl HardSoftCost {
    /// The zero cost.
    pub const ZERO: HardSoftCost = HardSoftCost { hard: 0, soft: 0 };

    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftCost { hard, soft }
    }

    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftCost { hard, soft: 0 }
    }

    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftCost { hard: 0, soft }
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns true when no hard violation remains.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard == 0
    }
}

impl Ord for HardSoftCost {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for HardSoftCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        HardSoftCost::of(self.hard + rhs.hard, self.soft + rhs.soft)
    }
}

impl Sub for HardSoftCost {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        HardSoftCost::of(self.hard - rhs.hard, self.soft - rhs.soft)
    }
}

impl Neg for HardSoftCost {
    type Output = Self;

    fn neg(self) -> Self {
        HardSoftCost::of(-self.hard, -self.soft)
    }
}

impl AddAssign for HardSoftCost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for HardSoftCost {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for HardSoftCost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(HardSoftCost::ZERO, Add::add)
    }
}

impl fmt::Debug for HardSoftCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftCost({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for HardSoftCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_hard_first() {
        assert!(HardSoftCost::of(0, 100) < HardSoftCost::of(1, 0));
        assert!(HardSoftCost::of(2, 5) < HardSoftCost::of(2, 6));
        assert_eq!(
            HardSoftCost::of(1, 3).cmp(&HardSoftCost::of(1, 3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = HardSoftCost::of(1, 10);
        let b = HardSoftCost::of(2, -4);
        assert_eq!(a + b, HardSoftCost::of(3, 6));
        assert_eq!(a - b, HardSoftCost::of(-1, 14));
        assert_eq!(-a, HardSoftCost::of(-1, -10));
        assert_eq!([a, b].into_iter().sum::<HardSoftCost>(), a + b);
    }

    #[test]
    fn test_feasibility() {
        assert!(HardSoftCost::of_soft(7).is_feasible());
        assert!(!HardSoftCost::of_hard(1).is_feasible());
    }
}
