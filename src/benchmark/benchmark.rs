//! Timing sweeps for the all-pairs step

use std::time::Instant;

use crate::simulation::forces::{AccelSet, ColorForces};
use crate::simulation::integrator::damped_euler_step;
use crate::simulation::matrix::ForceMatrix;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, ParticleSet};

fn bench_params() -> Parameters {
    Parameters {
        size: 500.0,
        d_max: 100.0,
        alpha: 0.7,
        beta: 0.2,
        point_strength: -10.0,
        seed: 42,
    }
}

/// Build a deterministic `n`-particle system without touching the rng,
/// colors cycling over the 4-color reference table
fn make_system(n: usize, size: f64) -> ParticleSet {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            ((i_f * 0.37).sin() * 0.5 + 0.5) * size,
            ((i_f * 0.13).cos() * 0.5 + 0.5) * size,
        );

        particles.push(Particle {
            color: i % 4,
            x,
            v: NVec2::zeros(),
        });
    }

    ParticleSet {
        particles,
        size,
        t: 0.0,
    }
}

/// Time the full damped-Euler step (accumulate + apply) across system sizes
pub fn bench_step() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 4; // steps timed per size
    let dt = 1.0 / 60.0;

    let params = bench_params();
    let matrix = ForceMatrix::reference();
    let forces = AccelSet::new().with(ColorForces {
        d_max: params.d_max,
        beta: params.beta,
    });

    for n in ns {
        let mut sys = make_system(n, params.size);

        // Warm up
        damped_euler_step(&mut sys, &forces, &matrix, &params, dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            damped_euler_step(&mut sys, &forces, &matrix, &params, dt);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}

/// Time the acceleration accumulation alone, without the update pass
pub fn bench_accels() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    let params = bench_params();
    let matrix = ForceMatrix::reference();
    let forces = AccelSet::new().with(ColorForces {
        d_max: params.d_max,
        beta: params.beta,
    });

    for n in ns {
        let sys = make_system(n, params.size);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        forces.accumulate_accels(&sys, &matrix, &mut out);

        let t0 = Instant::now();
        forces.accumulate_accels(&sys, &matrix, &mut out);
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, accels = {elapsed:8.6} s");
    }
}
