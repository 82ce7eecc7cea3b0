//! Variable-step time integrator for the particle-life system
//!
//! One step is a two-phase commit: accelerations for every particle are
//! accumulated from the pre-step state into a buffer, then velocities and
//! positions are updated in a second pass. No particle ever sees a neighbor
//! that has already moved within the same step.

use super::forces::AccelSet;
use super::matrix::ForceMatrix;
use super::params::Parameters;
use super::states::{NVec2, ParticleSet};

/// Advance the system by one step of elapsed time `dt`.
///
/// The velocity update is a damped semi-implicit Euler:
/// `v_n+1 = alpha * v_n + a_n * dt`, with the damping factor applied once per
/// step regardless of `dt`. Positions advance by `v_n+1 * dt` and wrap back
/// into `[0, size)` on both axes.
///
/// `dt` is whatever the frame clock delivers; no clamping happens here, so an
/// oversized delta is allowed to destabilize the system.
pub fn damped_euler_step(
    sys: &mut ParticleSet,
    forces: &AccelSet,
    matrix: &ForceMatrix,
    params: &Parameters,
    dt: f64,
) {
    let n = sys.particles.len();
    if n == 0 {
        // no particles, return
        return;
    }

    // Phase one: accelerations from the pre-step positions of all particles
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, matrix, &mut accels);

    // Phase two: apply updates
    let size = sys.size;
    for (p, a) in sys.particles.iter_mut().zip(accels.iter()) {
        // v_n+1 = alpha * v_n + a_n * dt
        p.v = params.alpha * p.v + *a * dt;

        // x_n+1 = (x_n + v_n+1 * dt) mod size, with the Euclidean remainder
        // so the result is in [0, size) even after a large negative excursion
        p.x.x = wrap_position(p.x.x + p.v.x * dt, size);
        p.x.y = wrap_position(p.x.y + p.v.y * dt, size);
    }

    // Increment the system time by the step
    sys.t += dt;
}

/// Fold a coordinate back into `[0, size)`. `rem_euclid` alone can round up
/// to `size` itself for inputs a hair below zero
fn wrap_position(x: f64, size: f64) -> f64 {
    let w = x.rem_euclid(size);
    if w < size {
        w
    } else {
        0.0
    }
}
