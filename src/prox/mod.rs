//! Proximity Operators for Composite Minimization
//!
//! First-order composite methods minimize $`f(x) + h(x)`$, where $`f`$ is
//! L-smooth and the non-smooth $`h`$ is only touched through its
//! proximity operator
//! ```math
//! \mathrm{prox}_{h}(z, t) = \mathrm{arg}\!\min_x h(x) + \frac{1}{2t} \| x - z \|_2^2
//! ```
//! This includes common penalties such as the L1 norm of the LASSO
//! as well as constraint sets, as a projection is
//! the proximal operator of the indicator function of that set.
//!
//! Each operator implements [`ProxCapable`](trait.ProxCapable.html); a solver
//! holds one of them (possibly as `&dyn ProxCapable<S>`) and calls
//! `evaluate_prox` once per iteration.

mod zero;
pub use zero::*;

mod l1;
pub use l1::*;

mod rplus;
pub use rplus::*;

mod proj_box;
pub use proj_box::*;

use crate::error::{ProxError, Result};
use ndarray::prelude::*;
use ndarray::NdFloat;

/// Selects which outputs of [`ProxCapable::evaluate_prox`] the caller needs.
///
/// - __f:__  the function value $`h(x)`$ at the minimizer
/// - __g:__  the minimizer $`x`$ itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub f: bool,
    pub g: bool,
}

impl Mode {
    pub const NONE: Mode = Mode { f: false, g: false };
    pub const F: Mode = Mode { f: true, g: false };
    pub const G: Mode = Mode { f: false, g: true };
    pub const FG: Mode = Mode { f: true, g: true };
}

impl Default for Mode {
    fn default() -> Self {
        Mode::FG
    }
}

/// Outputs of a prox evaluation.
///
/// A field is only guaranteed to be present when the matching [`Mode`]
/// flag was set. Indicator-style operators return `f` regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct Value<S> {
    pub f: Option<S>,
    pub g: Option<Array1<S>>,
}

/// A convex function $`h`$ with a closed-form proximity operator
pub trait ProxCapable<S: NdFloat> {
    /// Evaluate $`x = \mathrm{prox}_h(z, t)`$ and/or $`h(x)`$
    ///
    /// Parameters
    /// ----------
    /// - __z:__     point to evaluate the operator at
    /// - __t:__     step size, must be positive (not checked)
    /// - __mode:__  which outputs to compute
    ///
    /// When present, `f` is $`h`$ evaluated at the minimizer, not at $`z`$.
    fn evaluate_prox(&self, z: ArrayView1<S>, t: S, mode: Mode) -> Result<Value<S>>;

    /// Evaluate $`h(x)`$, with `+inf` outside the domain of an indicator
    fn evaluate_function(&self, x: ArrayView1<S>) -> Result<S>;

    /// Only the minimizer, in the `gprox(z, step)` shape used by
    /// FISTA-like proximal solvers
    fn prox(&self, z: ArrayView1<S>, t: S) -> Result<Array1<S>> {
        self.evaluate_prox(z, t, Mode::G)?
            .g
            .ok_or(ProxError::MissingMinimizer)
    }
}
