//! Core state types for the particle-life simulation.
//!
//! A [`Particle`] is a colored point with position and velocity; a
//! [`ParticleSet`] holds the whole population together with the side length
//! of the toroidal square domain and the current simulation time `t`.
//!
//! Particles are created once at seeding time and mutated in place by the
//! integrator; the population never grows or shrinks at runtime.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub color: usize, // color class index, fixed at seeding
    pub x: NVec2,     // position, always in [0, size)^2
    pub v: NVec2,     // velocity
}

#[derive(Debug, Clone)]
pub struct ParticleSet {
    pub particles: Vec<Particle>, // whole population
    pub size: f64, // toroidal domain side length, fixed for the set's lifetime
    pub t: f64,    // time
}

impl ParticleSet {
    /// Seed a population on a `size`-sided domain: `counts[c]` particles of
    /// color `c`, each at a uniformly random position with zero velocity.
    /// Placement is deterministic for a given `seed`.
    pub fn seed(counts: &[usize], size: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let total: usize = counts.iter().sum();
        let mut particles = Vec::with_capacity(total);

        for (color, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                particles.push(Particle {
                    color,
                    x: NVec2::new(rng.gen::<f64>() * size, rng.gen::<f64>() * size),
                    v: NVec2::zeros(),
                });
            }
        }

        Self {
            particles,
            size,
            t: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
