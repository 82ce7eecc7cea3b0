//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - domain side length and interaction cutoff radius,
//! - the damping factor and core-repulsion fraction of the force law,
//! - the external-point repulsion strength,
//! - random seed for particle placement

#[derive(Debug, Clone)]
pub struct Parameters {
    pub size: f64,           // toroidal domain side length S
    pub d_max: f64,          // interaction cutoff radius
    pub alpha: f64,          // per-step velocity damping factor, in (0, 1)
    pub beta: f64,           // core repulsion fraction of d_max, in (0, 1)
    pub point_strength: f64, // external point force coefficient, strongly negative
    pub seed: u64,           // deterministic seed to make runs reproducable
}
