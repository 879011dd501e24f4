// Runtime cost weight configuration.
//
// Allows adjusting soft weights between runs without editing the problem.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::component::ComponentKind;

// Holds runtime overrides for component weights.
//
// The hard component keeps its fixed weight of 1; overrides for it are
// ignored by `CostModel`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ComponentWeightOverrides {
    weights: HashMap<ComponentKind, i64>,
}

impl Debug for ComponentWeightOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentWeightOverrides")
            .field("count", &self.weights.len())
            .finish()
    }
}

impl ComponentWeightOverrides {
    // Creates an empty overrides container.
    pub fn new() -> Self {
        Self::default()
    }

    // Creates overrides from an iterator of (kind, weight) pairs.
    pub fn from_pairs<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (ComponentKind, i64)>,
    {
        Self {
            weights: iter.into_iter().collect(),
        }
    }

    // Sets the weight for a component.
    pub fn put(&mut self, kind: ComponentKind, weight: i64) {
        self.weights.insert(kind, weight);
    }

    // Removes the override for a component.
    pub fn remove(&mut self, kind: ComponentKind) -> Option<i64> {
        self.weights.remove(&kind)
    }

    // Gets the overridden weight, or returns the default if not overridden.
    pub fn get_or_default(&self, kind: ComponentKind, default: i64) -> i64 {
        self.weights.get(&kind).copied().unwrap_or(default)
    }

    pub fn get(&self, kind: ComponentKind) -> Option<i64> {
        self.weights.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
