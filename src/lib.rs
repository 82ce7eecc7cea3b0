pub mod simulation;
pub mod configuration;
pub mod persistence;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, Particle, ParticleSet};
pub use simulation::params::Parameters;
pub use simulation::matrix::{ForceMatrix, DEFAULT_FORCES};
pub use simulation::forces::{force_curve, wrap_delta, AccelSet, Acceleration, ColorForces, PointRepulsion};
pub use simulation::integrator::damped_euler_step;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ColorConfig, ParametersConfig, ScenarioConfig};

pub use persistence::store::{MatrixStore, YamlFileStore};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_accels, bench_step};
