//! Column blocks of a multivariate sample matrix.
//!
//! A sample matrix of `ndim` columns is cut into consecutive blocks by its "last indices":
//! `[xlast, ylast, zlast]` for three variables. With conditioning the final block
//! (after the last index) holds the conditions; without it the final block is the last
//! variable itself, so one index fewer is needed.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::errors::LayoutError;

/// Validated block boundaries for 1, 2 or 3 variables, optionally conditioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLayout {
    case: usize,
    conditioned: bool,
    ndim: usize,
    last_indices: Vec<usize>,
}

impl BlockLayout {
    /// Validate `last_indices` for `case` variables over `ndim` columns.
    ///
    /// `None` selects one column per variable: `[1]`, `[1, 2]` or `[1, 2, 3]`.
    pub fn new(
        case: usize,
        conditioned: bool,
        last_indices: Option<&[usize]>,
        ndim: usize,
    ) -> Result<Self, LayoutError> {
        if !(1..=3).contains(&case) {
            return Err(LayoutError::UnsupportedCase { case });
        }
        let expected = if conditioned { case } else { case - 1 };
        let last_indices = match last_indices {
            Some(indices) => indices.to_vec(),
            None => (1..=expected).collect(),
        };
        if last_indices.len() != expected {
            return Err(LayoutError::WrongArity {
                case,
                conditioned,
                expected,
                found: last_indices.len(),
            });
        }
        let increasing = last_indices.first().map_or(true, |&first| first > 0)
            && last_indices.windows(2).all(|w| w[0] < w[1]);
        if !increasing {
            return Err(LayoutError::Unordered {
                indices: last_indices,
            });
        }
        // Every variable block needs a column; conditions may be empty.
        let needed = if conditioned {
            last_indices.last().copied().unwrap_or(0)
        } else {
            last_indices.last().copied().unwrap_or(0) + 1
        };
        if needed > ndim || case > ndim {
            return Err(LayoutError::ExceedsDimension {
                needed: needed.max(case),
                ndim,
            });
        }
        Ok(Self {
            case,
            conditioned,
            ndim,
            last_indices,
        })
    }

    pub fn case(&self) -> usize {
        self.case
    }

    pub fn conditioned(&self) -> bool {
        self.conditioned
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn last_indices(&self) -> &[usize] {
        &self.last_indices
    }

    pub fn xlast(&self) -> Option<usize> {
        self.last_indices.first().copied()
    }

    pub fn ylast(&self) -> Option<usize> {
        self.last_indices.get(1).copied()
    }

    pub fn zlast(&self) -> Option<usize> {
        self.last_indices.get(2).copied()
    }

    /// Column ranges of the variable blocks, in order.
    pub fn variable_blocks(&self) -> Vec<Range<usize>> {
        let mut bounds = Vec::with_capacity(self.last_indices.len() + 2);
        bounds.push(0);
        bounds.extend_from_slice(&self.last_indices);
        if !self.conditioned {
            bounds.push(self.ndim);
        }
        bounds.windows(2).map(|w| w[0]..w[1]).collect()
    }

    /// Column range of the conditions, when conditioned.
    pub fn condition_block(&self) -> Option<Range<usize>> {
        if !self.conditioned {
            return None;
        }
        let start = self.last_indices.last().copied().unwrap_or(0);
        Some(start..self.ndim)
    }
}
