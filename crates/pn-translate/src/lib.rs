//! # pn-translate
//!
//! Translates textbook distribution parameters (`mu`, `sigma`, `k`, `theta`,
//! Greek spellings included) into the location/scale/shape keywords expected
//! by distribution constructors and fitting routines.
//!
//! ```
//! use pn_core::{Family, LibraryParams, Mode};
//! use pn_translate::{Kwargs, translate};
//!
//! let kwargs = Kwargs::new().with("μ", 2.0).with("σ", 2.45);
//! let params = translate(Family::Normal, &kwargs, Mode::Construct).unwrap();
//! let expected: LibraryParams = [("loc", 2.0), ("scale", 2.45)].into_iter().collect();
//! assert_eq!(params, expected);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alias;
pub mod kwargs;
pub mod params;
pub mod signature;
pub mod translate;

pub use alias::{bind, normalize};
pub use kwargs::Kwargs;
pub use params::HumanParams;
pub use signature::{ParamKind, ParamSpec, signature};
pub use translate::translate;
