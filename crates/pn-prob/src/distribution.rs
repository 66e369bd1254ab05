//! Frozen distributions built from human parameters.

use pn_core::{Error, Family, LibraryParams, Mode, Result};
use pn_translate::{HumanParams, Kwargs};
use rand::Rng;

use crate::standard::Standard;

/// A distribution with every parameter fixed.
///
/// Built by translating human parameters in construction mode; unset `loc`
/// and `scale` take the library defaults 0 and 1. Densities are evaluated as
/// `f((x - loc) / scale) / scale` on the standard member of the family.
///
/// `alpha` and `rice` have no backing density or sampler; freezing either
/// returns [`Error::NotImplemented`]. Their parameters still translate.
#[derive(Debug, Clone)]
pub struct FrozenDistribution {
    params: HumanParams,
    library: LibraryParams,
    loc: f64,
    scale: f64,
    standard: Standard,
}

impl FrozenDistribution {
    /// Freeze `params`.
    pub fn new(params: HumanParams) -> Result<Self> {
        Self::from_library(params.family(), params.translate(Mode::Construct)?)
    }

    /// Freeze keyword arguments (Latin or Greek names) for `family`.
    pub fn from_kwargs(family: Family, kwargs: &Kwargs) -> Result<Self> {
        Self::new(HumanParams::from_kwargs(family, kwargs)?)
    }

    /// Freeze construction-mode library keys directly.
    pub fn from_library(family: Family, mut library: LibraryParams) -> Result<Self> {
        let loc = library.get_or("loc", 0.0);
        let scale = library.get_or("scale", 1.0);
        if !loc.is_finite() {
            return Err(Error::Validation(format!("{family}: loc must be finite, got {loc}")));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::Validation(format!(
                "{family}: scale must be finite and > 0, got {scale}"
            )));
        }
        library.insert("loc", loc);
        library.insert("scale", scale);

        let standard = Standard::new(family, &library)?;
        let params = HumanParams::from_library(family, &library)?;
        log::debug!("froze {family} with {} library key(s)", library.len());
        Ok(Self { params, library, loc, scale, standard })
    }

    /// Family of this distribution.
    pub fn family(&self) -> Family {
        self.params.family()
    }

    /// Complete human parameters, defaults filled in.
    pub fn params(&self) -> &HumanParams {
        &self.params
    }

    /// Complete construction-mode library keys.
    pub fn library_params(&self) -> &LibraryParams {
        &self.library
    }

    /// Log-density at `x`.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        self.standard.ln_pdf((x - self.loc) / self.scale) - self.scale.ln()
    }

    /// Density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// Cumulative distribution at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        self.standard.cdf((x - self.loc) / self.scale)
    }

    /// Draw `n` values.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| rand_distr::Distribution::sample(self, rng)).collect()
    }
}

impl rand_distr::Distribution<f64> for FrozenDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.loc + self.scale * self.standard.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

    #[test]
    fn test_normal_density_uses_loc_scale() {
        let d = FrozenDistribution::new(HumanParams::Normal { mu: Some(4.0), sigma: Some(1.75) })
            .unwrap();
        let x = 5.3;
        let z: f64 = (x - 4.0) / 1.75;
        let expected = -0.5 * z * z - 1.75f64.ln() - LN_SQRT_2PI;
        assert_relative_eq!(d.ln_pdf(x), expected, epsilon = 1e-12);
        assert_relative_eq!(d.cdf(4.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_lognormal_matches_log_transform() {
        // ln X ~ N(mu, sigma) => log p(x) = log N(ln x; mu, sigma) - ln x
        let d = FrozenDistribution::from_kwargs(
            Family::Lognormal,
            &Kwargs::new().with("μ", 1.0).with("σ", 0.5),
        )
        .unwrap();
        let x: f64 = 2.2;
        let z = (x.ln() - 1.0) / 0.5;
        let expected = -0.5 * z * z - 0.5f64.ln() - LN_SQRT_2PI - x.ln();
        assert_relative_eq!(d.ln_pdf(x), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_lognormal_offset_shifts_support() {
        let d = FrozenDistribution::new(HumanParams::Lognormal {
            mu: Some(0.0),
            sigma: Some(1.0),
            offset: 3.0,
        })
        .unwrap();
        assert_eq!(d.cdf(3.0), 0.0);
        assert!(d.cdf(4.0) > 0.49 && d.cdf(4.0) < 0.51);
    }

    #[test]
    fn test_defaults_filled_in() {
        let d = FrozenDistribution::from_kwargs(Family::Normal, &Kwargs::new()).unwrap();
        assert_eq!(d.params(), &HumanParams::Normal { mu: Some(0.0), sigma: Some(1.0) });
        assert_eq!(d.library_params().get("scale"), Some(1.0));
    }

    #[test]
    fn test_exponential_rate() {
        let d =
            FrozenDistribution::new(HumanParams::Exponential { lambda: Some(2.0), loc: 0.0 })
                .unwrap();
        assert_relative_eq!(d.ln_pdf(0.5), 2.0f64.ln() - 1.0, epsilon = 1e-12);
        assert_eq!(d.params(), &HumanParams::Exponential { lambda: Some(2.0), loc: 0.0 });
    }

    #[test]
    fn test_missing_shape() {
        let err = FrozenDistribution::new(HumanParams::Beta {
            alpha: None,
            beta: Some(3.0),
            loc: None,
            scale: None,
        })
        .unwrap_err();
        assert!(
            matches!(err, Error::InvalidArgument { ref parameter, .. } if parameter == "alpha")
        );
    }

    #[test]
    fn test_invalid_scale() {
        let err =
            FrozenDistribution::new(HumanParams::Normal { mu: Some(0.0), sigma: Some(-1.0) })
                .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_alpha_and_rice_not_backed() {
        let err = FrozenDistribution::new(HumanParams::Alpha {
            alpha: Some(2.0),
            loc: None,
            scale: None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));

        let rice = Kwargs::new().with("R", 10.0).with("σ", 2.0);
        assert!(matches!(
            FrozenDistribution::from_kwargs(Family::Rice, &rice),
            Err(Error::NotImplemented(_))
        ));
        // Translation itself still works.
        assert!(HumanParams::from_kwargs(Family::Rice, &rice).is_ok());
    }

    #[test]
    fn test_sampling_is_seeded_and_in_support() {
        let d = FrozenDistribution::new(HumanParams::Uniform { low: 4.0, high: 9.0 }).unwrap();
        let a = d.sample_n(&mut StdRng::seed_from_u64(37), 100);
        let b = d.sample_n(&mut StdRng::seed_from_u64(37), 100);
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (4.0..9.0).contains(x)));
    }

    #[test]
    fn test_pareto_samples_above_scale() {
        let d = FrozenDistribution::new(HumanParams::Pareto {
            alpha: Some(2.0),
            loc: None,
            scale: Some(3.0),
        })
        .unwrap();
        let xs = d.sample_n(&mut StdRng::seed_from_u64(1), 500);
        assert!(xs.iter().all(|&x| x >= 3.0));
    }
}
