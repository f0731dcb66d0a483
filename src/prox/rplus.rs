//! Nonnegative orthant

use super::{Mode, ProxCapable, Value};
use crate::error::Result;
use log::trace;
use ndarray::prelude::*;
use ndarray::NdFloat;
use num_traits::Float;

/// Indicator of the nonnegative orthant
///
/// ```math
/// h(x) = \begin{cases} 0 & x_i \ge 0,\ i=1,\ldots,n \\ +\infty & \text{otherwise} \end{cases}
/// ```
/// The proximity operator is the projection $`x_i = \max(z_i, 0)`$.
/// The projected point is always feasible, so `f = 0` is returned
/// regardless of the [`Mode`].
///
/// A NaN coordinate is treated as infeasible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjRPlus;

impl<S: NdFloat> ProxCapable<S> for ProjRPlus {
    fn evaluate_prox(&self, z: ArrayView1<S>, t: S, mode: Mode) -> Result<Value<S>> {
        trace!("ProjRPlus: n = {}, t = {}, mode = {:?}", z.len(), t, mode);
        let g = if mode.g {
            Some(z.mapv(|zi| zi.max(S::zero())))
        } else {
            None
        };
        Ok(Value {
            f: Some(S::zero()),
            g,
        })
    }

    fn evaluate_function(&self, x: ArrayView1<S>) -> Result<S> {
        // `Float::min` skips NaN, so NaN is caught separately
        let min = x.fold(<S as Float>::infinity(), |acc, &xi| acc.min(xi));
        if min < S::zero() || x.iter().any(|xi| xi.is_nan()) {
            Ok(<S as Float>::infinity())
        } else {
            Ok(S::zero())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray_rand::rand_distr::Normal;
    use ndarray_rand::RandomExt;

    #[test]
    fn projects_negative_entries() {
        let value = ProjRPlus
            .evaluate_prox(array![-1.0, 2.0, -0.0].view(), 0.1, Mode::G)
            .unwrap();
        assert_eq!(value.g, Some(array![0.0, 2.0, 0.0]));
        assert_eq!(value.f, Some(0.0));
    }

    #[test]
    fn f_always_present() {
        let value = ProjRPlus
            .evaluate_prox(array![-3.0f32].view(), 1.0, Mode::NONE)
            .unwrap();
        assert_eq!(value.f, Some(0.0));
        assert!(value.g.is_none());
    }

    #[test]
    fn indicator_value() {
        let h = ProjRPlus;
        assert_eq!(h.evaluate_function(array![-0.1, 0., 0.].view()).unwrap(), f64::INFINITY);
        assert_eq!(h.evaluate_function(array![0., 0., 0.].view()).unwrap(), 0.);
        assert_eq!(h.evaluate_function(array![-0.0, 7.].view()).unwrap(), 0.);
    }

    #[test]
    fn nan_is_infeasible() {
        let h = ProjRPlus;
        assert_eq!(h.evaluate_function(array![f64::NAN].view()).unwrap(), f64::INFINITY);
        assert_eq!(
            h.evaluate_function(array![1f32, f32::NAN, 2.].view()).unwrap(),
            f32::INFINITY
        );
    }

    #[test]
    fn projection_is_feasible_and_idempotent() {
        let z = Array::random((200,), Normal::new(0., 5.).unwrap());
        let g = ProjRPlus.prox(z.view(), 1.).unwrap();
        assert_eq!(ProjRPlus.evaluate_function(g.view()).unwrap(), 0.);
        assert_eq!(ProjRPlus.prox(g.view(), 1.).unwrap(), g);
        for (gi, zi) in g.iter().zip(z.iter()) {
            if *zi >= 0. {
                assert_eq!(gi, zi);
            }
        }
    }
}
