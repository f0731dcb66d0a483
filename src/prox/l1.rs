//! Scaled L1 norm

use super::{Mode, ProxCapable, Value};
use crate::error::{ProxError, Result};
use log::{debug, trace};
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Scaled L1 norm, $`h(x) = \lambda \|x\|_1`$
///
/// The proximity operator is soft-thresholding, also called shrinkage.
///
/// Algorithm
/// ---------
/// ```math
/// x_i = z_i \left(1 - \min\left(\frac{\lambda t}{|z_i|}, 1\right)\right)
/// ```
/// A zero entry gives $`\lambda t / 0 = \infty`$, which the $`\min`$ clips
/// to one, so it stays at zero. When $`\lambda t = 0`$ the input is returned
/// unchanged.
///
/// Unlike the indicator operators, `f` is only returned when requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxL1<S> {
    scale: S,
}

impl<S: NdFloat> ProxL1<S> {
    /// Creates the operator for weight `scale` ($`\lambda`$).
    ///
    /// Returns `ProxError::NegativeScale` if `scale` is negative or NaN.
    pub fn new(scale: S) -> Result<Self> {
        if !(scale >= S::zero()) {
            debug!("ProxL1: rejected scale {}", scale);
            return Err(ProxError::NegativeScale);
        }
        debug!("ProxL1: scale = {}", scale);
        Ok(ProxL1 { scale })
    }

    #[must_use]
    pub fn scale(&self) -> S {
        self.scale
    }

    fn shrink(&self, z: ArrayView1<S>, t: S) -> Array1<S> {
        let shrinkage = self.scale * t;
        if shrinkage == S::zero() {
            return z.to_owned();
        }
        z.mapv(|zi| zi * (S::one() - (shrinkage / zi.abs()).min(S::one())))
    }
}

impl<S: NdFloat> ProxCapable<S> for ProxL1<S> {
    fn evaluate_prox(&self, z: ArrayView1<S>, t: S, mode: Mode) -> Result<Value<S>> {
        trace!("ProxL1: n = {}, t = {}, mode = {:?}", z.len(), t, mode);
        if !mode.f && !mode.g {
            return Ok(Value { f: None, g: None });
        }
        // f is taken at the minimizer, so g is needed either way
        let g = self.shrink(z, t);
        let f = if mode.f {
            Some(self.evaluate_function(g.view())?)
        } else {
            None
        };
        Ok(Value {
            f,
            g: if mode.g { Some(g) } else { None },
        })
    }

    fn evaluate_function(&self, x: ArrayView1<S>) -> Result<S> {
        let l1 = x.fold(S::zero(), |acc, &xi| acc + xi.abs());
        Ok(self.scale * l1)
    }
}


#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use ndarray_rand::rand_distr::Normal;
    use ndarray_rand::RandomExt;
    use test::Bencher;

    #[bench]
    fn soft_threshold_1e4(b: &mut Bencher) {
        let h = ProxL1::new(0.1f64).unwrap();
        let z = Array::random((10_000,), Normal::new(0., 1.).unwrap());
        b.iter(|| h.evaluate_prox(z.view(), 1., Mode::FG));
    }
}
