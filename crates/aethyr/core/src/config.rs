//! Layered configuration for an Aethyr node.

use crate::error::CoreResult;
use aethyr_evolution::{Bounds, EvolutionError, ParameterSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; nested keys are separated by `__`,
/// e.g. `AETHYR__BOUNDS__RISK_THRESHOLD=0.1`.
pub const ENV_PREFIX: &str = "AETHYR";

/// Construction parameters for [`crate::AethyrCore`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Node label, carried into log events.
    pub node_id: String,
    /// Advertised concurrency capacity. Informational only.
    pub cluster_size: u32,
    /// The engine's stored mutation rate.
    pub mutation_rate: f64,
    pub bounds: Bounds,
    /// Initial parameter set.
    pub parameters: ParameterSet,
    /// How many risk scores the evolution metrics retain.
    pub risk_history: usize,
    /// Seed for both random sources; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            node_id: "Alpha-7".into(),
            cluster_size: 8,
            mutation_rate: 0.1,
            bounds: Bounds::default(),
            parameters: ParameterSet::default(),
            risk_history: 100,
            seed: None,
        }
    }
}

impl CoreConfig {
    /// Defaults, then the optional file, then `AETHYR__*` environment variables.
    ///
    /// A `parameters` table replaces the default set wholesale, as in
    /// [`CoreConfig::from_json_str`].
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &Self::default_layer()?,
            config::FileFormat::Json,
        ));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: CoreConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    // Tables merge across layers, so the parameter map is left out and
    // filled by `#[serde(default)]` when no layer supplies one.
    fn default_layer() -> CoreResult<String> {
        let mut defaults = serde_json::to_value(CoreConfig::default())?;
        if let Some(table) = defaults.as_object_mut() {
            table.remove("parameters");
            table.remove("seed");
        }
        Ok(defaults.to_string())
    }

    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Seeded configuration for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), EvolutionError> {
        self.bounds.validate()?;
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::InvalidRate(self.mutation_rate));
        }
        Ok(())
    }
}
