pub mod states;
pub mod params;
pub mod matrix;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
