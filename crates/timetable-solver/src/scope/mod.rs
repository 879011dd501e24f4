//! Search scope: a schedule together with its cost model, seeded random
//! source and cached cost.

#[cfg(test)]
mod tests;

use rand::rngs::StdRng;
use rand::SeedableRng;
use timetable_config::{ConfigError, SearchConfig};
use timetable_core::{
    HardSoftCost, ProblemDefinition, Result, ScheduleSnapshot, ScheduleState, TimetableError,
};
use timetable_scoring::{CostExplanation, CostModel};
use tracing::debug;

use crate::construction::{ConstructionReport, Constructor, GreedyConstructor, RandomConstructor};
use crate::heuristic::explorer::NeighborhoodExplorer;

/// Owns the working schedule of one search run.
///
/// Every change to the schedule goes through the scope so the cached cost
/// stays equal to a full evaluation.
pub struct SearchScope<'a> {
    state: ScheduleState<'a>,
    model: CostModel,
    rng: StdRng,
    config: SearchConfig,
    cost: HardSoftCost,
    applied_moves: u64,
    best: Option<(HardSoftCost, ScheduleSnapshot)>,
}

impl<'a> SearchScope<'a> {
    /// Starts from an empty schedule of `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `config` carries bad weight
    /// overrides or sampling bounds.
    pub fn new(
        problem: &'a ProblemDefinition,
        config: SearchConfig,
    ) -> std::result::Result<Self, ConfigError> {
        Self::from_state(ScheduleState::new(problem), config)
    }

    /// Starts from an existing schedule.
    pub fn from_state(
        state: ScheduleState<'a>,
        config: SearchConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let model = CostModel::with_overrides(state.problem(), &config.weight_overrides()?);
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let cost = model.evaluate(&state);
        Ok(Self {
            state,
            model,
            rng,
            config,
            cost,
            applied_moves: 0,
            best: None,
        })
    }

    pub fn state(&self) -> &ScheduleState<'a> {
        &self.state
    }

    pub fn into_state(self) -> ScheduleState<'a> {
        self.state
    }

    pub fn problem(&self) -> &'a ProblemDefinition {
        self.state.problem()
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Cached cost of the working schedule.
    pub fn cost(&self) -> HardSoftCost {
        self.cost
    }

    pub fn applied_moves(&self) -> u64 {
        self.applied_moves
    }

    /// Re-evaluates the whole schedule and refreshes the cached cost.
    pub fn recompute_cost(&mut self) -> HardSoftCost {
        self.cost = self.model.evaluate(&self.state);
        self.cost
    }

    pub fn explain(&self) -> CostExplanation {
        self.model.explain(&self.state)
    }

    /// Runs `constructor` over the working schedule.
    pub fn construct<C: Constructor>(&mut self, constructor: &C) -> ConstructionReport {
        let report = constructor.construct(&mut self.state, &mut self.rng);
        self.recompute_cost();
        debug!(
            event = "construction_cost",
            constructor = constructor.name(),
            cost = %self.cost,
        );
        report
    }

    /// Runs the greedy constructor configured by the search settings.
    pub fn construct_greedy(&mut self) -> ConstructionReport {
        let constructor = GreedyConstructor::from_config(&self.config.greedy);
        self.construct(&constructor)
    }

    pub fn construct_random(&mut self) -> ConstructionReport {
        self.construct(&RandomConstructor::new())
    }

    /// Draws a random feasible move of `explorer` using the scope's random
    /// source.
    pub fn random_move<E: NeighborhoodExplorer>(&mut self, explorer: &E) -> Result<E::Move> {
        explorer.random_move(&self.state, &mut self.rng)
    }

    /// Change in cost if `mv` were applied.
    pub fn delta<E: NeighborhoodExplorer>(&self, explorer: &E, mv: &E::Move) -> HardSoftCost {
        explorer.delta(&self.state, mv, &self.model)
    }

    /// Applies `mv` and updates the cached cost by its delta. Returns false
    /// when the move is not feasible.
    pub fn apply<E: NeighborhoodExplorer>(&mut self, explorer: &E, mv: &E::Move) -> bool {
        if !explorer.feasible_move(&self.state, mv) {
            return false;
        }
        let delta = explorer.delta(&self.state, mv, &self.model);
        if !explorer.make_move(&mut self.state, mv) {
            return false;
        }
        self.cost += delta;
        self.applied_moves += 1;
        debug_assert_eq!(self.cost, self.model.evaluate(&self.state));
        true
    }

    /// Records the working schedule as best if it beats the previous best.
    /// Returns true on improvement.
    pub fn update_best(&mut self) -> bool {
        let improved = self.best.as_ref().map_or(true, |(best, _)| self.cost < *best);
        if improved {
            self.best = Some((self.cost, self.state.snapshot()));
            debug!(event = "new_best", cost = %self.cost, moves = self.applied_moves);
        }
        improved
    }

    pub fn best_cost(&self) -> Option<HardSoftCost> {
        self.best.as_ref().map(|(cost, _)| *cost)
    }

    pub fn best_snapshot(&self) -> Option<&ScheduleSnapshot> {
        self.best.as_ref().map(|(_, snapshot)| snapshot)
    }

    /// Replaces the working schedule with the best one recorded.
    ///
    /// # Errors
    ///
    /// Fails if no best schedule was recorded or the snapshot no longer
    /// replays against the problem.
    pub fn restore_best(&mut self) -> Result<()> {
        let Some((_, snapshot)) = &self.best else {
            return Err(TimetableError::InvalidState(
                "no best schedule recorded".to_string(),
            ));
        };
        self.state = snapshot.restore(self.state.problem())?;
        self.recompute_cost();
        Ok(())
    }
}

impl std::fmt::Debug for SearchScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScope")
            .field("cost", &self.cost)
            .field("applied_moves", &self.applied_moves)
            .field("best_cost", &self.best_cost())
            .finish()
    }
}
