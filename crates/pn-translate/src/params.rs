//! Typed human parameter sets, one variant per family.

use pn_core::{Family, Result};
use serde::{Deserialize, Serialize};

use crate::alias::{self, BoundArgs};
use crate::kwargs::Kwargs;

/// Textbook-style parameters of one distribution.
///
/// Optional fields left as `None` are omitted from the translation, leaving
/// the value to the library default (construction) or to the estimator (fit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum HumanParams {
    /// Uniform on `[low, high]`.
    Uniform {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
    /// Normal with mean `mu` and standard deviation `sigma`.
    Normal {
        /// Mean.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mu: Option<f64>,
        /// Standard deviation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sigma: Option<f64>,
    },
    /// Log-normal: `ln(X - offset) ~ Normal(mu, sigma)`.
    Lognormal {
        /// Mean of the underlying normal.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mu: Option<f64>,
        /// Standard deviation of the underlying normal.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sigma: Option<f64>,
        /// Location shift, 0 by default.
        #[serde(default)]
        offset: f64,
    },
    /// Weibull with shape `k`.
    Weibull {
        /// Shape.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        k: Option<f64>,
        /// Location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<f64>,
        /// Scale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<f64>,
    },
    /// Alpha with shape `alpha`.
    Alpha {
        /// Shape.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
        /// Location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<f64>,
        /// Scale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<f64>,
    },
    /// Beta with shapes `alpha` and `beta`.
    Beta {
        /// First shape.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
        /// Second shape.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        beta: Option<f64>,
        /// Location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<f64>,
        /// Scale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<f64>,
    },
    /// Gamma with shape `k` and scale `theta`.
    Gamma {
        /// Shape.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        k: Option<f64>,
        /// Scale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        theta: Option<f64>,
        /// Location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<f64>,
    },
    /// Chi-squared with `k` degrees of freedom.
    ChiSquared {
        /// Degrees of freedom.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        k: Option<f64>,
        /// Location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<f64>,
        /// Scale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<f64>,
    },
    /// Pareto with tail index `alpha`.
    Pareto {
        /// Tail index.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
        /// Location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<f64>,
        /// Scale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<f64>,
    },
    /// Exponential with rate `lambda_`.
    Exponential {
        /// Rate.
        #[serde(rename = "lambda_", default, skip_serializing_if = "Option::is_none")]
        lambda: Option<f64>,
        /// Location, 0 by default.
        #[serde(default)]
        loc: f64,
    },
    /// Rice with distance `R` and spread `sigma`.
    Rice {
        /// Distance between the reference point and the centre.
        #[serde(rename = "R", default, skip_serializing_if = "Option::is_none")]
        r: Option<f64>,
        /// Spread (also the library scale).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sigma: Option<f64>,
        /// Location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        loc: Option<f64>,
    },
}

impl HumanParams {
    /// Family these parameters belong to.
    pub fn family(&self) -> Family {
        match self {
            HumanParams::Uniform { .. } => Family::Uniform,
            HumanParams::Normal { .. } => Family::Normal,
            HumanParams::Lognormal { .. } => Family::Lognormal,
            HumanParams::Weibull { .. } => Family::Weibull,
            HumanParams::Alpha { .. } => Family::Alpha,
            HumanParams::Beta { .. } => Family::Beta,
            HumanParams::Gamma { .. } => Family::Gamma,
            HumanParams::ChiSquared { .. } => Family::ChiSquared,
            HumanParams::Pareto { .. } => Family::Pareto,
            HumanParams::Exponential { .. } => Family::Exponential,
            HumanParams::Rice { .. } => Family::Rice,
        }
    }

    /// Bind keyword arguments (Latin or Greek names) for `family`.
    pub fn from_kwargs(family: Family, kwargs: &Kwargs) -> Result<Self> {
        alias::bind(family, kwargs)
    }

    pub(crate) fn from_bound(args: &BoundArgs<'_>) -> Result<Self> {
        Ok(match args.family() {
            Family::Uniform => {
                HumanParams::Uniform { low: args.present("low")?, high: args.present("high")? }
            }
            Family::Normal => {
                HumanParams::Normal { mu: args.value("mu")?, sigma: args.value("sigma")? }
            }
            Family::Lognormal => HumanParams::Lognormal {
                mu: args.value("mu")?,
                sigma: args.value("sigma")?,
                offset: args.present("offset")?,
            },
            Family::Weibull => HumanParams::Weibull {
                k: args.value("k")?,
                loc: args.value("loc")?,
                scale: args.value("scale")?,
            },
            Family::Alpha => HumanParams::Alpha {
                alpha: args.value("alpha")?,
                loc: args.value("loc")?,
                scale: args.value("scale")?,
            },
            Family::Beta => HumanParams::Beta {
                alpha: args.value("alpha")?,
                beta: args.value("beta")?,
                loc: args.value("loc")?,
                scale: args.value("scale")?,
            },
            Family::Gamma => HumanParams::Gamma {
                k: args.value("k")?,
                theta: args.value("theta")?,
                loc: args.value("loc")?,
            },
            Family::ChiSquared => HumanParams::ChiSquared {
                k: args.value("k")?,
                loc: args.value("loc")?,
                scale: args.value("scale")?,
            },
            Family::Pareto => HumanParams::Pareto {
                alpha: args.value("alpha")?,
                loc: args.value("loc")?,
                scale: args.value("scale")?,
            },
            Family::Exponential => HumanParams::Exponential {
                lambda: args.value("lambda_")?,
                loc: args.present("loc")?,
            },
            Family::Rice => HumanParams::Rice {
                r: args.value("R")?,
                sigma: args.value("sigma")?,
                loc: args.value("loc")?,
            },
        })
    }

    /// Keyword form, in declaration order; unset optional parameters are left out.
    pub fn to_kwargs(&self) -> Kwargs {
        let pairs: Vec<(&str, Option<f64>)> = match *self {
            HumanParams::Uniform { low, high } => vec![("low", Some(low)), ("high", Some(high))],
            HumanParams::Normal { mu, sigma } => vec![("mu", mu), ("sigma", sigma)],
            HumanParams::Lognormal { mu, sigma, offset } => {
                vec![("mu", mu), ("sigma", sigma), ("offset", Some(offset))]
            }
            HumanParams::Weibull { k, loc, scale } => {
                vec![("k", k), ("loc", loc), ("scale", scale)]
            }
            HumanParams::Alpha { alpha, loc, scale } => {
                vec![("alpha", alpha), ("loc", loc), ("scale", scale)]
            }
            HumanParams::Beta { alpha, beta, loc, scale } => {
                vec![("alpha", alpha), ("beta", beta), ("loc", loc), ("scale", scale)]
            }
            HumanParams::Gamma { k, theta, loc } => vec![("k", k), ("theta", theta), ("loc", loc)],
            HumanParams::ChiSquared { k, loc, scale } => {
                vec![("k", k), ("loc", loc), ("scale", scale)]
            }
            HumanParams::Pareto { alpha, loc, scale } => {
                vec![("alpha", alpha), ("loc", loc), ("scale", scale)]
            }
            HumanParams::Exponential { lambda, loc } => {
                vec![("lambda_", lambda), ("loc", Some(loc))]
            }
            HumanParams::Rice { r, sigma, loc } => vec![("R", r), ("sigma", sigma), ("loc", loc)],
        };
        pairs.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect()
    }
}
