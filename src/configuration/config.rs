//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! particle-life scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters of the force law and domain
//! - [`ColorConfig`]      – one entry per color class (name + particle count)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   size: 500.0           # toroidal domain side length
//!   d_max: 100.0          # interaction cutoff radius
//!   alpha: 0.7            # per-step velocity damping
//!   beta: 0.2             # core repulsion fraction of d_max
//!   point_strength: -10.0 # pointer repulsion coefficient
//!   seed: 42              # deterministic seed for particle placement
//!
//! colors:
//!   - { name: red,            count: 300 }
//!   - { name: chartreuse,     count: 300 }
//!   - { name: cornflowerblue, count: 300 }
//!   - { name: yellow,         count: 300 }
//!
//! forces:                 # optional; defaults to the compiled-in table
//!   - [  0.5,  1.0,  0.0, -1.0 ]
//!   - [ -1.0,  0.5,  1.0,  0.0 ]
//!   - [  0.0, -1.0,  0.5,  1.0 ]
//!   - [  1.0,  0.0, -1.0,  0.5 ]
//!
//! store: plife_forces.yaml  # optional; persisted force-matrix location
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub size: f64,           // toroidal domain side length
    pub d_max: f64,          // interaction cutoff radius
    pub alpha: f64,          // per-step velocity damping factor
    pub beta: f64,           // core repulsion fraction of d_max
    pub point_strength: f64, // pointer repulsion coefficient
    pub seed: u64,           // deterministic seed to make runs reproducable
}

/// Configuration for a single color class
#[derive(Deserialize, Debug)]
pub struct ColorConfig {
    pub name: String,  // palette name used by the viewer
    pub count: usize,  // number of particles seeded with this color
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical parameters
    pub colors: Vec<ColorConfig>,     // color classes that define the population
    pub forces: Option<Vec<Vec<f64>>>, // default force table, row = source color
    pub store: Option<String>,        // path for persisting the force matrix
}
