//! Cost analysis types for explaining a schedule's cost.
//!
//! A [`CostExplanation`] breaks the total cost down per component and lists
//! every violation with a human-readable message.

use std::fmt;

use timetable_core::HardSoftCost;

use crate::component::ComponentKind;

/// A single violation found by a cost component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub component: ComponentKind,
    /// Violation units this record accounts for.
    pub units: i64,
    pub message: String,
}

impl Violation {
    pub fn new(component: ComponentKind, units: i64, message: impl Into<String>) -> Self {
        Self {
            component,
            units,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Per-component breakdown in a cost explanation.
#[derive(Debug, Clone)]
pub struct ComponentAnalysis {
    pub kind: ComponentKind,
    /// Cost per violation unit.
    pub weight: i64,
    /// Total violation units.
    pub units: i64,
    /// Weighted cost, `units * weight`.
    pub cost: i64,
    pub is_hard: bool,
    pub violations: Vec<Violation>,
}

impl ComponentAnalysis {
    pub fn new(kind: ComponentKind, weight: i64, violations: Vec<Violation>) -> Self {
        let units = violations.iter().map(|v| v.units).sum();
        Self {
            kind,
            weight,
            units,
            cost: units * weight,
            is_hard: kind.is_hard(),
            violations,
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Complete cost explanation for a schedule.
#[derive(Debug, Clone)]
pub struct CostExplanation {
    pub cost: HardSoftCost,
    pub components: Vec<ComponentAnalysis>,
}

impl CostExplanation {
    pub fn new(components: Vec<ComponentAnalysis>) -> Self {
        let cost = components
            .iter()
            .map(|c| {
                if c.is_hard {
                    HardSoftCost::of_hard(c.cost)
                } else {
                    HardSoftCost::of_soft(c.cost)
                }
            })
            .sum();
        Self { cost, components }
    }

    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentAnalysis> {
        self.components.iter().find(|c| c.kind == kind)
    }

    /// Total number of violation records across all components.
    pub fn violation_count(&self) -> usize {
        self.components.iter().map(|c| c.violations.len()).sum()
    }

    /// Every violation, component by component.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.components.iter().flat_map(|c| c.violations.iter())
    }
}

impl fmt::Display for CostExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cost: {}", self.cost)?;
        for c in self.components.iter().filter(|c| c.units > 0) {
            writeln!(
                f,
                "  {} ({}): {} x {} = {}",
                c.kind,
                if c.is_hard { "hard" } else { "soft" },
                c.units,
                c.weight,
                c.cost
            )?;
            for v in &c.violations {
                writeln!(f, "    {}", v)?;
            }
        }
        Ok(())
    }
}
