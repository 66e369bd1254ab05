//! # pn-core
//!
//! Shared vocabulary for paramnormal: the error type, distribution
//! families, library keyword sets and the [`Estimator`] seam.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::Estimator;
pub use types::{Family, LibraryParams, Mode};

/// Crate version, shared by every workspace member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
