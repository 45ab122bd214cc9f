use crate::error::EvolutionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const LEARNING_RATE: &str = "learning_rate";
pub const MOMENTUM: &str = "momentum";
pub const NEURAL_DEPTH: &str = "neural_depth";
pub const ADAPTATION_FACTOR: &str = "adaptation_factor";

/// Lowest value a mutated parameter can take.
pub const VALUE_FLOOR: f64 = 0.001;
/// Clamp range for `learning_rate` after each step.
pub const LEARNING_RATE_MIN: f64 = 0.001;
pub const LEARNING_RATE_MAX: f64 = 0.1;

/// Named, strictly positive parameters.
///
/// The key set is fixed at construction; evolution only rewrites values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    /// Build a set, requiring `learning_rate` and `adaptation_factor` and
    /// every value finite and > 0.
    pub fn new<K, I>(values: I) -> Result<Self, EvolutionError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let values: BTreeMap<String, f64> =
            values.into_iter().map(|(k, v)| (k.into(), v)).collect();

        for required in [LEARNING_RATE, ADAPTATION_FACTOR] {
            if !values.contains_key(required) {
                return Err(EvolutionError::MissingParameter(required));
            }
        }
        if let Some((name, &value)) = values.iter().find(|(_, v)| !(v.is_finite() && **v > 0.0)) {
            return Err(EvolutionError::NonPositiveParameter {
                name: name.clone(),
                value,
            });
        }
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn learning_rate(&self) -> f64 {
        self.values[LEARNING_RATE]
    }

    pub fn adaptation_factor(&self) -> f64 {
        self.values[ADAPTATION_FACTOR]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.values.values_mut()
    }

    pub(crate) fn learning_rate_mut(&mut self) -> Option<&mut f64> {
        self.values.get_mut(LEARNING_RATE)
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        let values = [
            (LEARNING_RATE, 0.01),
            (MOMENTUM, 0.9),
            (NEURAL_DEPTH, 5.0),
            (ADAPTATION_FACTOR, 0.05),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self { values }
    }
}

impl TryFrom<BTreeMap<String, f64>> for ParameterSet {
    type Error = EvolutionError;

    fn try_from(values: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<ParameterSet> for BTreeMap<String, f64> {
    fn from(set: ParameterSet) -> Self {
        set.values
    }
}

/// Immutable limits applied to every evolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// Upper clamp on the mutation probability.
    pub max_autonomy: f64,
    /// Largest risk score that still allows a commit.
    pub risk_threshold: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_autonomy: 0.8,
            risk_threshold: 0.2,
        }
    }
}

impl Bounds {
    pub fn new(max_autonomy: f64, risk_threshold: f64) -> Result<Self, EvolutionError> {
        let bounds = Self {
            max_autonomy,
            risk_threshold,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), EvolutionError> {
        if !(0.0..=1.0).contains(&self.max_autonomy) {
            return Err(EvolutionError::InvalidBound {
                name: "max_autonomy",
                reason: format!("must be within [0, 1], got {}", self.max_autonomy),
            });
        }
        if !self.risk_threshold.is_finite() || self.risk_threshold < 0.0 {
            return Err(EvolutionError::InvalidBound {
                name: "risk_threshold",
                reason: format!("must be finite and >= 0, got {}", self.risk_threshold),
            });
        }
        Ok(())
    }
}

/// One call's worth of evolution: mutation probability and step count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRequest {
    pub mutation_rate: f64,
    pub evolution_steps: u32,
}

impl EvolutionRequest {
    /// Negative or NaN rates become 0; a step count of 0 becomes 1.
    pub fn new(mutation_rate: f64, evolution_steps: u32) -> Self {
        let mutation_rate = if mutation_rate.is_nan() {
            0.0
        } else {
            mutation_rate.max(0.0)
        };
        Self {
            mutation_rate,
            evolution_steps: evolution_steps.max(1),
        }
    }

    /// Rate actually applied under `bounds`.
    pub fn effective_rate(&self, bounds: &Bounds) -> f64 {
        Self::new(self.mutation_rate, self.evolution_steps)
            .mutation_rate
            .min(bounds.max_autonomy)
    }
}
