//! Engine façade owning the particle population and the force matrix
//!
//! Construction seeds the population and fixes the domain; after that the
//! engine only ever runs. The frame driver calls [`Engine::step`] once per
//! frame, interaction handlers mutate the matrix or the external point
//! strictly between steps, and the rendering sink reads the particles after
//! a step completes.

use crate::persistence::store::MatrixStore;
use crate::simulation::forces::{AccelSet, ColorForces, PointRepulsion};
use crate::simulation::integrator::damped_euler_step;
use crate::simulation::matrix::ForceMatrix;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, ParticleSet};

pub struct Engine {
    system: ParticleSet,
    matrix: ForceMatrix,
    params: Parameters,
    pointer: Option<NVec2>,
    store: Option<Box<dyn MatrixStore + Send + Sync>>,
}

impl Engine {
    /// Seed `counts[c]` particles of each color `c` and take ownership of the
    /// default force table. If a store is given, a previously persisted table
    /// replaces the default; absent or malformed data is ignored.
    pub fn new(
        params: Parameters,
        counts: &[usize],
        mut matrix: ForceMatrix,
        store: Option<Box<dyn MatrixStore + Send + Sync>>,
    ) -> Self {
        let system = ParticleSet::seed(counts, params.size, params.seed);

        if let Some(store) = &store {
            if let Some(rows) = store.load() {
                matrix.import(&rows);
            }
        }

        Self {
            system,
            matrix,
            params,
            pointer: None,
            store,
        }
    }

    /// Advance the simulation by `dt` seconds of elapsed frame time.
    pub fn step(&mut self, dt: f64) {
        let mut forces = AccelSet::new().with(ColorForces {
            d_max: self.params.d_max,
            beta: self.params.beta,
        });

        if let Some(point) = self.pointer {
            forces = forces.with(PointRepulsion {
                point,
                d_max: self.params.d_max,
                strength: self.params.point_strength,
            });
        }

        damped_euler_step(&mut self.system, &forces, &self.matrix, &self.params, dt);
    }

    /// Place or clear the external repulsive point, in simulation-space
    /// coordinates. Takes effect from the next step.
    pub fn set_external_point(&mut self, point: Option<NVec2>) {
        self.pointer = point;
    }

    /// Nudge the coefficient for the force color `b` exerts on color `a`,
    /// then persist the table.
    pub fn adjust_force(&mut self, a: usize, b: usize, delta: f64) {
        self.matrix.adjust(a, b, delta);
        self.persist();
    }

    /// Restore the default force table, then persist it.
    pub fn reset_forces(&mut self) {
        self.matrix.reset();
        self.persist();
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            store.save(self.matrix.rows());
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.system.particles
    }

    pub fn matrix(&self) -> &ForceMatrix {
        &self.matrix
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn time(&self) -> f64 {
        self.system.t
    }
}
