//! The composed cost of a timetable.

use timetable_core::{HardSoftCost, ProblemDefinition, ScheduleState, SlotChange};

use crate::analysis::{ComponentAnalysis, CostExplanation};
use crate::component::{
    ComponentKind, CostComponent, MaxSubjectHoursPerDay, ProfessorMaxWeeklyHours,
    ProfessorUnavailability, ScheduleContiguity, SolutionComplete,
};
use crate::weight_overrides::ComponentWeightOverrides;

/// The four soft components plus the hard completeness requirement.
///
/// Soft weights come from the problem definition unless overridden.
#[derive(Debug, Clone)]
pub struct CostModel {
    unavailability: ProfessorUnavailability,
    daily_cap: MaxSubjectHoursPerDay,
    weekly_cap: ProfessorMaxWeeklyHours,
    contiguity: ScheduleContiguity,
    complete: SolutionComplete,
}

impl CostModel {
    pub fn new(problem: &ProblemDefinition) -> Self {
        Self::with_overrides(problem, &ComponentWeightOverrides::new())
    }

    pub fn with_overrides(problem: &ProblemDefinition, overrides: &ComponentWeightOverrides) -> Self {
        let w = problem.weights();
        Self {
            unavailability: ProfessorUnavailability::new(overrides.get_or_default(
                ComponentKind::ProfessorUnavailability,
                w.professor_unavailability,
            )),
            daily_cap: MaxSubjectHoursPerDay::new(overrides.get_or_default(
                ComponentKind::MaxSubjectHoursPerDay,
                w.max_subject_hours_per_day,
            )),
            weekly_cap: ProfessorMaxWeeklyHours::new(overrides.get_or_default(
                ComponentKind::ProfessorMaxWeeklyHours,
                w.professor_max_weekly_hours,
            )),
            contiguity: ScheduleContiguity::new(overrides.get_or_default(
                ComponentKind::ScheduleContiguity,
                w.schedule_contiguity,
            )),
            complete: SolutionComplete::new(),
        }
    }

    /// All components in [`ComponentKind::ALL`] order.
    pub fn components(&self) -> [&dyn CostComponent; 5] {
        [
            &self.unavailability,
            &self.daily_cap,
            &self.weekly_cap,
            &self.contiguity,
            &self.complete,
        ]
    }

    pub fn component(&self, kind: ComponentKind) -> &dyn CostComponent {
        match kind {
            ComponentKind::ProfessorUnavailability => &self.unavailability,
            ComponentKind::MaxSubjectHoursPerDay => &self.daily_cap,
            ComponentKind::ProfessorMaxWeeklyHours => &self.weekly_cap,
            ComponentKind::ScheduleContiguity => &self.contiguity,
            ComponentKind::SolutionComplete => &self.complete,
        }
    }

    /// Full recomputation of the schedule's cost.
    pub fn evaluate(&self, state: &ScheduleState<'_>) -> HardSoftCost {
        self.components()
            .into_iter()
            .map(|c| level(c, c.compute_cost(state)))
            .sum()
    }

    /// Change in cost caused by applying `changes` to `state`.
    pub fn delta(&self, state: &ScheduleState<'_>, changes: &[SlotChange]) -> HardSoftCost {
        self.components()
            .into_iter()
            .map(|c| level(c, c.delta_cost(state, changes)))
            .sum()
    }

    /// Per-component breakdown with every violation listed.
    pub fn explain(&self, state: &ScheduleState<'_>) -> CostExplanation {
        CostExplanation::new(
            self.components()
                .into_iter()
                .map(|c| ComponentAnalysis::new(c.kind(), c.weight(), c.explain_violations(state)))
                .collect(),
        )
    }
}

fn level(component: &dyn CostComponent, cost: i64) -> HardSoftCost {
    if component.is_hard() {
        HardSoftCost::of_hard(cost)
    } else {
        HardSoftCost::of_soft(cost)
    }
}
