//! Coupling strengths per (parent variable, child variable, |lag|).

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// Dense `nvar × nvar × (taumax + 1)` tensor of lag weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagWeights {
    nvar: usize,
    nlags: usize,
    values: Vec<f64>,
}

impl LagWeights {
    /// All couplings equal to 1.0.
    pub fn uniform(nvar: usize, taumax: usize) -> Self {
        let nlags = taumax + 1;
        Self {
            nvar,
            nlags,
            values: vec![1.0; nvar * nvar * nlags],
        }
    }

    /// Build from a nested `[parent][child][lag]` array, checking that it is rectangular.
    pub fn from_nested(nested: Vec<Vec<Vec<f64>>>) -> Result<Self, GraphError> {
        let nvar = nested.len();
        let nlags = nested
            .first()
            .and_then(|row| row.first())
            .map(Vec::len)
            .unwrap_or(0);
        let mut values = Vec::with_capacity(nvar * nvar * nlags);
        for row in &nested {
            if row.len() != nvar {
                return Err(GraphError::LagWeightShape {
                    expected: (nvar, nvar, nlags),
                    found: (nvar, row.len(), nlags),
                });
            }
            for lags in row {
                if lags.len() != nlags {
                    return Err(GraphError::LagWeightShape {
                        expected: (nvar, nvar, nlags),
                        found: (nvar, nvar, lags.len()),
                    });
                }
                values.extend_from_slice(lags);
            }
        }
        Ok(Self {
            nvar,
            nlags,
            values,
        })
    }

    /// `(nvar, nvar, taumax + 1)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nvar, self.nvar, self.nlags)
    }

    /// Fails unless the tensor matches a network of `nvar` variables and horizon `taumax`.
    pub fn check_shape(&self, nvar: usize, taumax: usize) -> Result<(), GraphError> {
        let expected = (nvar, nvar, taumax + 1);
        if self.shape() != expected {
            return Err(GraphError::LagWeightShape {
                expected,
                found: self.shape(),
            });
        }
        Ok(())
    }

    /// Weight of `parent → child` at `lag` steps. Panics outside the tensor.
    pub fn get(&self, parent: usize, child: usize, lag: usize) -> f64 {
        self.values[(parent * self.nvar + child) * self.nlags + lag]
    }

    /// Smallest entry, or 0.0 for an empty tensor.
    pub fn min(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Copy with `offset` subtracted from every entry.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            nvar: self.nvar,
            nlags: self.nlags,
            values: self.values.iter().map(|w| w - offset).collect(),
        }
    }
}
