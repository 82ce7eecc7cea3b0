//! Force / acceleration contributors for the particle-life engine
//!
//! Defines the toroidal wrap metric, the piecewise color-interaction force
//! curve, and the acceleration terms built on them: all-pairs color forces
//! driven by the [`ForceMatrix`] and repulsion from an external point.

use crate::simulation::matrix::ForceMatrix;
use crate::simulation::states::{NVec2, ParticleSet};

/// Shortest signed displacement along one axis of a toroidal domain of side
/// `size`. The result is congruent to `d` modulo `size` and lies in
/// `[-size/2, size/2]`.
pub fn wrap_delta(d: f64, size: f64) -> f64 {
    if d < -0.5 * size {
        d + size
    } else if d > 0.5 * size {
        d - size
    } else {
        d
    }
}

/// Piecewise interaction force for a pair at normalized distance `r = d/d_max`
/// with matrix coefficient `f_max` and core-repulsion fraction `beta`.
///
/// Below `beta` every pair repels regardless of color (`r/beta - 1`, in
/// `[-1, 0)`); between `beta` and `1` the signed coefficient scales a tent
/// profile that is zero at both ends of the interval; at and beyond the
/// cutoff the force is zero. Both piece boundaries are continuous.
pub fn force_curve(r: f64, f_max: f64, beta: f64) -> f64 {
    if r < beta {
        r / beta - 1.0
    } else if r < 1.0 {
        f_max * (1.0 - (2.0 * r - 1.0 - beta).abs() / (1.0 - beta))
    } else {
        0.0
    }
}

/// Collection of acceleration terms (color forces, point repulsion, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all particles in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Reads only the pre-step state, so accumulating for the whole set and
    /// applying updates afterwards keeps the step order-independent.
    pub fn accumulate_accels(&self, sys: &ParticleSet, matrix: &ForceMatrix, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, matrix, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`ParticleSet`]
/// Implementations add their contribution into `out[i]` for each particle
pub trait Acceleration {
    fn acceleration(&self, sys: &ParticleSet, matrix: &ForceMatrix, out: &mut [NVec2]);
}

/// All-pairs color interaction forces on the toroidal plane
///
/// For each ordered pair `(i, j)` the coefficient `matrix[color_i][color_j]`
/// feeds [`force_curve`]; the two directions of a pair are independent, so
/// the full `i != j` loop is evaluated rather than the unordered half.
pub struct ColorForces {
    pub d_max: f64, // interaction cutoff radius
    pub beta: f64,  // core repulsion fraction
}

impl Acceleration for ColorForces {
    fn acceleration(&self, sys: &ParticleSet, matrix: &ForceMatrix, out: &mut [NVec2]) {
        let n = sys.particles.len();
        let d_max = self.d_max;

        for i in 0..n {
            // pi: the particle being accelerated
            let pi = &sys.particles[i];

            for j in 0..n {
                if i == j {
                    continue;
                }

                let pj = &sys.particles[j];

                // Shortest wrapped displacement from i to j, per axis
                let dx = wrap_delta(pj.x.x - pi.x.x, sys.size);
                let dy = wrap_delta(pj.x.y - pi.x.y, sys.size);

                // Cheap bounding-box pre-filter before the square root; the
                // distance check below still decides inclusion at the cutoff
                if dx < -d_max || dx > d_max || dy < -d_max || dy > d_max {
                    continue;
                }

                let d = (dx * dx + dy * dy).sqrt();

                // Coincident pair: no direction to push along, skipped
                if d == 0.0 {
                    continue;
                }

                let r = d / d_max;
                let f_max = matrix.get(pi.color, pj.color);
                let force = force_curve(r, f_max, self.beta);

                // Scale the unit direction (dx/d, dy/d) by d_max * force
                out[i].x += (d_max * dx / d) * force;
                out[i].y += (d_max * dy / d) * force;
            }
        }
    }
}

/// Unconditional short-range repulsion from a single external point
/// (typically the pointer position), independent of the force curve
pub struct PointRepulsion {
    pub point: NVec2,
    pub d_max: f64,    // same cutoff radius as the pair forces
    pub strength: f64, // strongly negative pushes particles away
}

impl Acceleration for PointRepulsion {
    fn acceleration(&self, sys: &ParticleSet, _matrix: &ForceMatrix, out: &mut [NVec2]) {
        let d_max = self.d_max;

        for (p, a) in sys.particles.iter().zip(out.iter_mut()) {
            let dx = wrap_delta(self.point.x - p.x.x, sys.size);
            let dy = wrap_delta(self.point.y - p.x.y, sys.size);

            if dx < -d_max || dx > d_max || dy < -d_max || dy > d_max {
                continue;
            }

            let d = (dx * dx + dy * dy).sqrt();
            if d == 0.0 || d >= d_max {
                continue;
            }

            a.x += (d_max * dx / d) * self.strength;
            a.y += (d_max * dy / d) * self.strength;
        }
    }
}
