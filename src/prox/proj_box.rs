//! Box constraints

use super::{Mode, ProxCapable, Value};
use crate::error::{ProxError, Result};
use log::{debug, trace};
use ndarray::prelude::*;
use ndarray::NdFloat;
use num_traits::Float;

/// Indicator of an axis-aligned box $`[l, u]`$
///
/// ```math
/// h(x) = \begin{cases} 0 & l_i \le x_i \le u_i,\ i=1,\ldots,n \\ +\infty & \text{otherwise} \end{cases}
/// ```
/// The proximity operator is the element-wise clamp
/// $`x_i = \min(u_i, \max(l_i, z_i))`$. Like [`ProjRPlus`](struct.ProjRPlus.html),
/// `f = 0` is always returned. A NaN coordinate is treated as infeasible.
///
/// Every vector passed in must have the same length as the bounds,
/// otherwise `ProxError::DimensionMismatch` is returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjBox<S> {
    bounds: Array1<(S, S)>,
}

impl<S: NdFloat> ProjBox<S> {
    /// Creates the box from per-coordinate bounds.
    ///
    /// Returns `ProxError::DimensionMismatch` if `lower` and `upper` differ
    /// in length, or `ProxError::InvalidBound` if some `lower[i] > upper[i]`.
    pub fn new(lower: ArrayView1<S>, upper: ArrayView1<S>) -> Result<Self> {
        if lower.len() != upper.len() {
            debug!(
                "ProjBox: {} lower bounds but {} upper bounds",
                lower.len(),
                upper.len()
            );
            return Err(ProxError::DimensionMismatch {
                expected: lower.len(),
                found: upper.len(),
            });
        }
        let mut bounds = Vec::with_capacity(lower.len());
        for (index, (&l, &u)) in lower.iter().zip(upper.iter()).enumerate() {
            // also rejects NaN
            if !(l <= u) {
                debug!("ProjBox: empty interval [{}, {}] at {}", l, u, index);
                return Err(ProxError::InvalidBound { index });
            }
            bounds.push((l, u));
        }
        debug!("ProjBox: n = {}", bounds.len());
        Ok(ProjBox {
            bounds: Array1::from(bounds),
        })
    }

    /// Creates the box $`[l, u]^n`$.
    pub fn uniform(lower: S, upper: S, n: usize) -> Result<Self> {
        let lower = Array1::from_elem(n, lower);
        let upper = Array1::from_elem(n, upper);
        Self::new(lower.view(), upper.view())
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    #[must_use]
    pub fn lower(&self) -> Array1<S> {
        self.bounds.mapv(|(l, _)| l)
    }

    #[must_use]
    pub fn upper(&self) -> Array1<S> {
        self.bounds.mapv(|(_, u)| u)
    }

    fn check_dim(&self, x: &ArrayView1<S>) -> Result<()> {
        if x.len() != self.dim() {
            debug!("ProjBox: got length {}, expected {}", x.len(), self.dim());
            return Err(ProxError::DimensionMismatch {
                expected: self.dim(),
                found: x.len(),
            });
        }
        Ok(())
    }
}

impl<S: NdFloat> ProxCapable<S> for ProjBox<S> {
    fn evaluate_prox(&self, z: ArrayView1<S>, t: S, mode: Mode) -> Result<Value<S>> {
        trace!("ProjBox: n = {}, t = {}, mode = {:?}", z.len(), t, mode);
        self.check_dim(&z)?;
        let g = if mode.g {
            Some(
                z.iter()
                    .zip(self.bounds.iter())
                    .map(|(&zi, &(l, u))| u.min(l.max(zi)))
                    .collect::<Array1<S>>(),
            )
        } else {
            None
        };
        Ok(Value {
            f: Some(S::zero()),
            g,
        })
    }

    fn evaluate_function(&self, x: ArrayView1<S>) -> Result<S> {
        self.check_dim(&x)?;
        let outside = x
            .iter()
            .zip(self.bounds.iter())
            .any(|(&xi, &(l, u))| !(l <= xi && xi <= u));
        if outside {
            Ok(<S as Float>::infinity())
        } else {
            Ok(S::zero())
        }
    }
}
