//! Core traits for paramnormal
//!
//! Fitting is kept behind [`Estimator`] so the translation layer never
//! depends on a concrete optimiser.

use crate::Result;
use crate::types::{Family, LibraryParams};

/// Fits library parameters to data.
///
/// `fixed` holds fit-mode keys (`floc`, `fscale`, `f0`, ...) whose values
/// must be held constant. The returned set uses construction-mode keys and
/// contains every parameter of the family, fixed ones included.
pub trait Estimator: Send + Sync {
    /// Estimate parameters of `family` from `data`.
    fn estimate(&self, family: Family, data: &[f64], fixed: &LibraryParams)
    -> Result<LibraryParams>;

    /// Estimator name (e.g., "closed-form")
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoEstimator;

    impl Estimator for EchoEstimator {
        fn estimate(
            &self,
            _family: Family,
            _data: &[f64],
            fixed: &LibraryParams,
        ) -> Result<LibraryParams> {
            Ok(fixed.iter().map(|(k, v)| (k.trim_start_matches('f').to_string(), v)).collect())
        }

        fn name(&self) -> &str {
            "Echo"
        }
    }

    #[test]
    fn test_dummy_estimator() {
        let est = EchoEstimator;
        assert_eq!(est.name(), "Echo");
        let fixed: LibraryParams = [("floc", 1.0)].into_iter().collect();
        let out = est.estimate(Family::Normal, &[], &fixed).unwrap();
        assert_eq!(out.get("loc"), Some(1.0));
    }
}
