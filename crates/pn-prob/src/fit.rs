//! Fit-to-data convenience.
//!
//! Fixed human parameters are translated in fit mode, handed to an
//! [`Estimator`], and the estimate is translated back to human names.

use pn_core::{Error, Estimator, Family, LibraryParams, Mode, Result};
use pn_translate::{HumanParams, Kwargs, translate};

/// Fit `family` to `data`, holding the parameters in `fixed` constant.
///
/// `fixed` accepts the same names as construction (Greek spellings
/// included); anything not fixed is left to `estimator`.
pub fn fit<E: Estimator + ?Sized>(
    family: Family,
    data: &[f64],
    fixed: &Kwargs,
    estimator: &E,
) -> Result<HumanParams> {
    check_data(family, data)?;
    let fixed = translate(family, fixed, Mode::Fit)?;
    log::debug!(
        "fitting {family} to {} points with {} ({} fixed)",
        data.len(),
        estimator.name(),
        fixed.len()
    );
    let estimate = estimator.estimate(family, data, &fixed)?;
    HumanParams::from_library(family, &estimate)
}

fn check_data(family: Family, data: &[f64]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::Validation(format!("cannot fit {family} to empty data")));
    }
    if let Some(x) = data.iter().find(|x| !x.is_finite()) {
        return Err(Error::Validation(format!("{family} data must be finite, found {x}")));
    }
    Ok(())
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Root-mean-square deviation about `center` (the MLE of a normal sigma).
fn rms_about(xs: &[f64], center: f64) -> f64 {
    (xs.iter().map(|x| (x - center).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}

fn checked_scale(family: Family, name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        log::warn!("{family}: degenerate {name} estimate {value}");
        return Err(Error::Validation(format!(
            "{family}: {name} must be finite and > 0, got {value}"
        )));
    }
    Ok(value)
}

/// Analytic maximum-likelihood estimates.
///
/// Covers normal, lognormal (offset held at its fixed value) and
/// exponential (`loc` held at its fixed value, the sample minimum when
/// none is given); other families return [`Error::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormEstimator;

impl ClosedFormEstimator {
    /// New estimator.
    pub fn new() -> Self {
        Self
    }

    fn normal(data: &[f64], fixed: &LibraryParams) -> Result<LibraryParams> {
        let loc = fixed.get("floc").unwrap_or_else(|| mean(data));
        let scale = match fixed.get("fscale") {
            Some(s) => s,
            None => rms_about(data, loc),
        };
        let scale = checked_scale(Family::Normal, "scale", scale)?;
        Ok([("loc", loc), ("scale", scale)].into_iter().collect())
    }

    fn lognormal(data: &[f64], fixed: &LibraryParams) -> Result<LibraryParams> {
        let loc = fixed.get_or("floc", 0.0);
        if let Some(x) = data.iter().find(|&&x| x <= loc) {
            return Err(Error::Validation(format!(
                "lognormal data must exceed the offset {loc}, found {x}"
            )));
        }
        let logs: Vec<f64> = data.iter().map(|x| (x - loc).ln()).collect();
        let mu = match fixed.get("fscale") {
            Some(scale) => checked_scale(Family::Lognormal, "scale", scale)?.ln(),
            None => mean(&logs),
        };
        let s = match fixed.get("f0") {
            Some(s) => s,
            None => rms_about(&logs, mu),
        };
        let s = checked_scale(Family::Lognormal, "s", s)?;
        Ok([("loc", loc), ("scale", mu.exp()), ("s", s)].into_iter().collect())
    }

    fn exponential(data: &[f64], fixed: &LibraryParams) -> Result<LibraryParams> {
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let loc = fixed.get("floc").unwrap_or(min);
        if min < loc {
            return Err(Error::Validation(format!(
                "exponential data must not fall below loc {loc}, found {min}"
            )));
        }
        let scale = fixed.get("fscale").unwrap_or_else(|| mean(data) - loc);
        let scale = checked_scale(Family::Exponential, "scale", scale)?;
        Ok([("loc", loc), ("scale", scale)].into_iter().collect())
    }
}

impl Estimator for ClosedFormEstimator {
    fn estimate(
        &self,
        family: Family,
        data: &[f64],
        fixed: &LibraryParams,
    ) -> Result<LibraryParams> {
        check_data(family, data)?;
        match family {
            Family::Normal => Self::normal(data, fixed),
            Family::Lognormal => Self::lognormal(data, fixed),
            Family::Exponential => Self::exponential(data, fixed),
            other => Err(Error::NotImplemented(format!("closed-form estimate for {other}"))),
        }
    }

    fn name(&self) -> &str {
        "closed-form"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DATA: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn test_normal_mle() {
        let p = fit(Family::Normal, &DATA, &Kwargs::new(), &ClosedFormEstimator).unwrap();
        match p {
            HumanParams::Normal { mu, sigma } => {
                assert_relative_eq!(mu.unwrap(), 3.0, epsilon = 1e-12);
                assert_relative_eq!(sigma.unwrap(), 2.0f64.sqrt(), epsilon = 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_normal_fixed_mu_greek() {
        let fixed = Kwargs::new().with("μ", 2.0);
        let p = fit(Family::Normal, &DATA, &fixed, &ClosedFormEstimator).unwrap();
        // sqrt(mean((x-2)^2)) = sqrt((1+0+1+4+9)/5) = sqrt(3)
        assert_eq!(p, HumanParams::Normal { mu: Some(2.0), sigma: Some(3.0f64.sqrt()) });
    }

    #[test]
    fn test_exponential_with_loc_fixed() {
        let fixed = Kwargs::new().with("loc", 0.0);
        let p = fit(Family::Exponential, &DATA, &fixed, &ClosedFormEstimator).unwrap();
        match p {
            HumanParams::Exponential { lambda, loc } => {
                assert_relative_eq!(lambda.unwrap(), 1.0 / 3.0, epsilon = 1e-12);
                assert_eq!(loc, 0.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_exponential_loc_held_at_zero_by_default() {
        let data = [0.3, 0.5, 0.9, 1.4, 2.0];
        let p = fit(Family::Exponential, &data, &Kwargs::new(), &ClosedFormEstimator).unwrap();
        match p {
            HumanParams::Exponential { lambda, loc } => {
                assert_relative_eq!(lambda.unwrap(), 1.0 / 1.02, epsilon = 1e-12);
                assert_eq!(loc, 0.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_exponential_shifted_loc() {
        let fixed = Kwargs::new().with("loc", 0.5);
        let p = fit(Family::Exponential, &DATA, &fixed, &ClosedFormEstimator).unwrap();
        assert_eq!(p, HumanParams::Exponential { lambda: Some(0.4), loc: 0.5 });
    }

    #[test]
    fn test_exponential_estimator_without_floc_uses_minimum() {
        let est = ClosedFormEstimator.estimate(Family::Exponential, &DATA, &LibraryParams::new());
        let est = est.unwrap();
        assert_eq!(est.get("loc"), Some(1.0));
        assert_eq!(est.get("scale"), Some(2.0));
    }

    #[test]
    fn test_lognormal_offset_and_sigma() {
        let data: Vec<f64> = DATA.iter().map(|x| x.exp() + 2.0).collect();
        let fixed = Kwargs::new().with("offset", 2.0).with("σ", 1.0);
        let p = fit(Family::Lognormal, &data, &fixed, &ClosedFormEstimator).unwrap();
        match p {
            HumanParams::Lognormal { mu, sigma, offset } => {
                assert_relative_eq!(mu.unwrap(), 3.0, epsilon = 1e-9);
                assert_eq!(sigma, Some(1.0));
                assert_eq!(offset, 2.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_lognormal_data_below_offset() {
        let fixed = Kwargs::new().with("offset", 1.0);
        let err = fit(Family::Lognormal, &DATA, &fixed, &ClosedFormEstimator).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_constant_data_is_degenerate() {
        let err = fit(Family::Normal, &[2.0; 4], &Kwargs::new(), &ClosedFormEstimator).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_bad_data() {
        assert!(fit(Family::Normal, &[], &Kwargs::new(), &ClosedFormEstimator).is_err());
        let nan = [1.0, f64::NAN];
        assert!(fit(Family::Normal, &nan, &Kwargs::new(), &ClosedFormEstimator).is_err());
    }

    #[test]
    fn test_unsupported_family() {
        let err = fit(Family::Gamma, &DATA, &Kwargs::new(), &ClosedFormEstimator).unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
    }

    #[test]
    fn test_fixed_keys_reach_estimator() {
        struct Recorder;
        impl Estimator for Recorder {
            fn estimate(
                &self,
                _: Family,
                _: &[f64],
                fixed: &LibraryParams,
            ) -> Result<LibraryParams> {
                assert_eq!(fixed.get("f1"), Some(7.0));
                assert!(!fixed.contains_key("f0"));
                Ok([("a", 1.9), ("b", 7.0)].into_iter().collect())
            }
            fn name(&self) -> &str {
                "recorder"
            }
        }

        let p = fit(Family::Beta, &[0.2, 0.4], &Kwargs::new().with("β", 7.0), &Recorder).unwrap();
        assert_eq!(
            p,
            HumanParams::Beta {
                alpha: Some(1.9),
                beta: Some(7.0),
                loc: Some(0.0),
                scale: Some(1.0),
            }
        );
    }
}
