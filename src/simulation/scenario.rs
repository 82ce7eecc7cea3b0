//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the viewer:
//! - numerical parameters (`Parameters`)
//! - a seeded [`Engine`] with its force matrix and optional persistence store
//! - the color palette for rendering
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics, input, and rendering systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::persistence::store::{MatrixStore, YamlFileStore};
use crate::simulation::engine::Engine;
use crate::simulation::matrix::ForceMatrix;
use crate::simulation::params::Parameters;

/// Bevy resource representing a fully-initialized particle-life scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it owns the engine (particles, force matrix, parameters) plus the color
/// names the rendering side maps to a palette
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub palette: Vec<String>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            size: p_cfg.size,
            d_max: p_cfg.d_max,
            alpha: p_cfg.alpha,
            beta: p_cfg.beta,
            point_strength: p_cfg.point_strength,
            seed: p_cfg.seed,
        };

        // Per-color particle counts and the palette, in declaration order
        let counts: Vec<usize> = cfg.colors.iter().map(|c| c.count).collect();
        let palette: Vec<String> = cfg.colors.iter().map(|c| c.name.clone()).collect();

        // Force table: scenario-provided or the compiled-in default
        let table = cfg
            .forces
            .unwrap_or_else(|| ForceMatrix::default_table(counts.len()));
        let matrix = ForceMatrix::new(table);

        // Optional persistence store for the force matrix
        let store: Option<Box<dyn MatrixStore + Send + Sync>> = cfg
            .store
            .map(|path| Box::new(YamlFileStore::new(path)) as Box<dyn MatrixStore + Send + Sync>);

        let engine = Engine::new(parameters, &counts, matrix, store);

        Self { engine, palette }
    }
}
