//! Dense row-major `nnodes × nnodes` weight matrix.

/// Square matrix of non-negative edge strengths; 0.0 where there is no edge.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    n: usize,
    values: Vec<f64>,
}

impl WeightMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Side length.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.n + j] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Whether every entry is non-negative.
    pub fn is_non_negative(&self) -> bool {
        self.values.iter().all(|&w| w >= 0.0)
    }
}
