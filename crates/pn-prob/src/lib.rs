//! Distribution objects for paramnormal.
//!
//! This crate freezes distributions from textbook parameters and fits them
//! back to data:
//! - [`FrozenDistribution`]: density, CDF and sampling for a fixed parameter set
//! - [`fit`]: fixed parameters in, estimated human parameters out
//! - [`ClosedFormEstimator`]: analytic estimates for the families that have them
//!
//! Densities are delegated to `statrs`, draws to `rand_distr`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distribution;
pub mod fit;
mod standard;

pub use distribution::FrozenDistribution;
pub use fit::{ClosedFormEstimator, fit};
