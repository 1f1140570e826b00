//! All-pairs max-min (bottleneck) closure, the O(n³) cost center of the engine.

use rayon::prelude::*;
use tracing::instrument;

use crate::graph::WeightMatrix;

/// Relax `w[i][j] = max(w[i][j], min(w[i][k], w[k][j]))` over every pivot `k`.
///
/// Row `k` and column `k` are fixed points of step `k`, so rows can be relaxed
/// independently against a copy of the pivot row; `parallel` spreads them over the
/// rayon pool with identical results.
#[instrument(skip(weights), fields(n = weights.n()))]
pub fn max_min_closure(weights: &WeightMatrix, parallel: bool) -> WeightMatrix {
    let n = weights.n();
    let mut closure = weights.clone();
    if n == 0 {
        return closure;
    }

    let mut pivot = vec![0.0; n];
    for k in 0..n {
        pivot.copy_from_slice(closure.row(k));
        let relax = |row: &mut [f64]| {
            let through = row[k];
            // min(0, x) never raises a non-negative cell.
            if through <= 0.0 {
                return;
            }
            for (cell, &onward) in row.iter_mut().zip(&pivot) {
                let bottleneck = through.min(onward);
                if bottleneck > *cell {
                    *cell = bottleneck;
                }
            }
        };
        if parallel {
            closure.as_mut_slice().par_chunks_mut(n).for_each(relax);
        } else {
            closure.as_mut_slice().chunks_mut(n).for_each(relax);
        }
    }
    closure
}
