//! Standard (`loc = 0`, `scale = 1`) members of each backed family.
//!
//! Densities come from `statrs`, draws from `rand_distr`. Location and scale
//! are applied by [`FrozenDistribution`](crate::FrozenDistribution).

use pn_core::{Error, Family, LibraryParams, Result};
use rand::Rng;
use rand_distr::Distribution as _;
use statrs::distribution::{self as sd, Continuous, ContinuousCDF};

fn rejected(family: Family, e: impl std::fmt::Display) -> Error {
    Error::Validation(format!("{family}: {e}"))
}

#[derive(Debug, Clone)]
pub(crate) enum Standard {
    Uniform(sd::Uniform),
    Normal(sd::Normal),
    Lognormal(sd::LogNormal, rand_distr::LogNormal<f64>),
    Weibull(sd::Weibull, rand_distr::Weibull<f64>),
    Beta(sd::Beta, rand_distr::Beta<f64>),
    Gamma(sd::Gamma, rand_distr::Gamma<f64>),
    ChiSquared(sd::ChiSquared, rand_distr::ChiSquared<f64>),
    Pareto(sd::Pareto, rand_distr::Pareto<f64>),
    Exponential(sd::Exp),
}

impl Standard {
    /// Build from construction-mode library keys. `human` names the
    /// textbook parameter behind each shape key for error messages.
    pub(crate) fn new(family: Family, params: &LibraryParams) -> Result<Self> {
        let shape = |key: &str, human: &str| {
            params.get(key).ok_or_else(|| {
                Error::invalid_argument(
                    family.name(),
                    human,
                    "is required to construct a distribution",
                )
            })
        };
        let err = |e: &dyn std::fmt::Display| rejected(family, e);

        Ok(match family {
            Family::Uniform => Standard::Uniform(sd::Uniform::new(0.0, 1.0).map_err(|e| err(&e))?),
            Family::Normal => Standard::Normal(sd::Normal::new(0.0, 1.0).map_err(|e| err(&e))?),
            Family::Lognormal => {
                let s = shape("s", "sigma")?;
                Standard::Lognormal(
                    sd::LogNormal::new(0.0, s).map_err(|e| err(&e))?,
                    rand_distr::LogNormal::new(0.0, s).map_err(|e| err(&e))?,
                )
            }
            Family::Weibull => {
                let c = shape("c", "k")?;
                Standard::Weibull(
                    sd::Weibull::new(c, 1.0).map_err(|e| err(&e))?,
                    rand_distr::Weibull::new(1.0, c).map_err(|e| err(&e))?,
                )
            }
            Family::Beta => {
                let a = shape("a", "alpha")?;
                let b = shape("b", "beta")?;
                Standard::Beta(
                    sd::Beta::new(a, b).map_err(|e| err(&e))?,
                    rand_distr::Beta::new(a, b).map_err(|e| err(&e))?,
                )
            }
            Family::Gamma => {
                let a = shape("a", "k")?;
                Standard::Gamma(
                    // statrs takes a rate, rand_distr a scale; both are 1 here.
                    sd::Gamma::new(a, 1.0).map_err(|e| err(&e))?,
                    rand_distr::Gamma::new(a, 1.0).map_err(|e| err(&e))?,
                )
            }
            Family::ChiSquared => {
                let df = shape("df", "k")?;
                Standard::ChiSquared(
                    sd::ChiSquared::new(df).map_err(|e| err(&e))?,
                    rand_distr::ChiSquared::new(df).map_err(|e| err(&e))?,
                )
            }
            Family::Pareto => {
                let b = shape("b", "alpha")?;
                Standard::Pareto(
                    sd::Pareto::new(1.0, b).map_err(|e| err(&e))?,
                    rand_distr::Pareto::new(1.0, b).map_err(|e| err(&e))?,
                )
            }
            Family::Exponential => Standard::Exponential(sd::Exp::new(1.0).map_err(|e| err(&e))?),
            Family::Alpha | Family::Rice => {
                return Err(Error::NotImplemented(format!(
                    "{family} has no backing density or sampler"
                )));
            }
        })
    }

    pub(crate) fn ln_pdf(&self, y: f64) -> f64 {
        match self {
            Standard::Uniform(d) => d.ln_pdf(y),
            Standard::Normal(d) => d.ln_pdf(y),
            Standard::Lognormal(d, _) => d.ln_pdf(y),
            Standard::Weibull(d, _) => d.ln_pdf(y),
            Standard::Beta(d, _) => d.ln_pdf(y),
            Standard::Gamma(d, _) => d.ln_pdf(y),
            Standard::ChiSquared(d, _) => d.ln_pdf(y),
            Standard::Pareto(d, _) => d.ln_pdf(y),
            Standard::Exponential(d) => d.ln_pdf(y),
        }
    }

    pub(crate) fn cdf(&self, y: f64) -> f64 {
        match self {
            Standard::Uniform(d) => d.cdf(y),
            Standard::Normal(d) => d.cdf(y),
            Standard::Lognormal(d, _) => d.cdf(y),
            Standard::Weibull(d, _) => d.cdf(y),
            Standard::Beta(d, _) => d.cdf(y),
            Standard::Gamma(d, _) => d.cdf(y),
            Standard::ChiSquared(d, _) => d.cdf(y),
            Standard::Pareto(d, _) => d.cdf(y),
            Standard::Exponential(d) => d.cdf(y),
        }
    }

    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Standard::Uniform(_) => rng.random::<f64>(),
            Standard::Normal(_) => rng.sample(rand_distr::StandardNormal),
            Standard::Lognormal(_, s) => s.sample(rng),
            Standard::Weibull(_, s) => s.sample(rng),
            Standard::Beta(_, s) => s.sample(rng),
            Standard::Gamma(_, s) => s.sample(rng),
            Standard::ChiSquared(_, s) => s.sample(rng),
            Standard::Pareto(_, s) => s.sample(rng),
            Standard::Exponential(_) => rng.sample(rand_distr::Exp1),
        }
    }
}
