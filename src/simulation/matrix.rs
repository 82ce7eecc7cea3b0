//! Tunable interaction-coefficient table between color classes
//!
//! `matrix[a][b]` is the coefficient for the force that color `b` exerts ON
//! color `a`. The table is not symmetric in general; the two directions of a
//! pair are tuned independently. Every entry is kept clamped to `[-1, 1]`
//! across all mutations.

/// Coefficient table shipped with the reference scenario, one row per source
/// color. Used when a scenario does not provide its own table.
pub const DEFAULT_FORCES: [[f64; 4]; 4] = [
    [0.5, 1.0, 0.0, -1.0],
    [-1.0, 0.5, 1.0, 0.0],
    [0.0, -1.0, 0.5, 1.0],
    [1.0, 0.0, -1.0, 0.5],
];

#[derive(Debug, Clone)]
pub struct ForceMatrix {
    values: Vec<Vec<f64>>,
    // Independent copy of the table the matrix was constructed with;
    // reset() restores from here and never aliases it.
    default: Vec<Vec<f64>>,
}

impl ForceMatrix {
    /// Build a matrix from its default table. Entries outside `[-1, 1]` are
    /// clamped on the way in so the invariant holds from construction.
    pub fn new(default: Vec<Vec<f64>>) -> Self {
        let clamped: Vec<Vec<f64>> = default
            .iter()
            .map(|row| row.iter().map(|f| f.clamp(-1.0, 1.0)).collect())
            .collect();
        Self {
            values: clamped.clone(),
            default: clamped,
        }
    }

    /// Reference 4-color table.
    pub fn reference() -> Self {
        Self::new(Self::default_table(4))
    }

    /// Default `n x n` table, tiling the reference pattern for populations
    /// with a color count other than four.
    pub fn default_table(n: usize) -> Vec<Vec<f64>> {
        (0..n)
            .map(|a| (0..n).map(|b| DEFAULT_FORCES[a % 4][b % 4]).collect())
            .collect()
    }

    pub fn num_colors(&self) -> usize {
        self.values.len()
    }

    /// Coefficient for the force that color `b` exerts on color `a`.
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.values[a][b]
    }

    /// Add `delta` to entry `(a, b)`, clamping the result to `[-1, 1]`.
    pub fn adjust(&mut self, a: usize, b: usize, delta: f64) {
        let v = &mut self.values[a][b];
        *v = (*v + delta).clamp(-1.0, 1.0);
    }

    /// Restore the default table. The restored values are a fresh copy, so
    /// later mutations never bleed into a subsequent reset.
    pub fn reset(&mut self) {
        self.values = self.default.clone();
    }

    /// Row-major view of the current table, for persistence.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Replace the current table with `rows` if it is a square table matching
    /// this matrix's color count; entries are clamped. Returns whether the
    /// table was accepted. Rejection leaves the matrix untouched, which is
    /// the silent-fallback path for malformed persisted state.
    pub fn import(&mut self, rows: &[Vec<f64>]) -> bool {
        let n = self.num_colors();
        if rows.len() != n || rows.iter().any(|row| row.len() != n) {
            return false;
        }
        self.values = rows
            .iter()
            .map(|row| row.iter().map(|f| f.clamp(-1.0, 1.0)).collect())
            .collect();
        true
    }
}
