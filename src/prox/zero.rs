//! The zero function

use super::{Mode, ProxCapable, Value};
use crate::error::Result;
use log::trace;
use ndarray::prelude::*;
use ndarray::NdFloat;

/// The zero function, $`h(x) = 0`$
///
/// Its proximity operator is the identity. Both `f = 0` and `g = z` are
/// always returned, whatever the [`Mode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProxZero;

impl<S: NdFloat> ProxCapable<S> for ProxZero {
    fn evaluate_prox(&self, z: ArrayView1<S>, t: S, mode: Mode) -> Result<Value<S>> {
        trace!("ProxZero: n = {}, t = {}, mode = {:?}", z.len(), t, mode);
        Ok(Value {
            f: Some(S::zero()),
            g: Some(z.to_owned()),
        })
    }

    fn evaluate_function(&self, _x: ArrayView1<S>) -> Result<S> {
        Ok(S::zero())
    }
}
