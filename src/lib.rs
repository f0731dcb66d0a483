//! The `ndarray-prox` crate provides proximity operators ("prox" functions)
//! for the non-smooth term of composite objectives over `ndarray`s.
//!
//! It includes:
//! - the zero function
//! - the scaled L1 norm (soft-thresholding)
//! - the indicator of the nonnegative orthant
//! - the indicator of a box
//!
//! These are the building blocks that accelerated proximal gradient
//! methods, such as FISTA or POGM, call once per iteration. Every operator
//! implements the [`ProxCapable`](prox/trait.ProxCapable.html) trait, which
//! can compute the minimizer, the function value at the minimizer, or both,
//! as selected by a [`Mode`](prox/struct.Mode.html).
//!
//! This crate is in the early development stage and is actively changing.

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

pub mod error;
pub mod prox;

pub use error::ProxError;
pub use prox::{Mode, ProjBox, ProjRPlus, ProxCapable, ProxL1, ProxZero, Value};
