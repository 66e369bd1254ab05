//! Human ↔ library parameter translation.
//!
//! Key rules per family (construction mode):
//!
//! | family      | library keys                                  |
//! |-------------|-----------------------------------------------|
//! | uniform     | `loc = low`, `scale = high - low`             |
//! | normal      | `loc = mu`, `scale = sigma`                   |
//! | lognormal   | `scale = exp(mu)`, `s = sigma`, `loc = offset`|
//! | weibull     | `c = k`, `loc`, `scale`                       |
//! | alpha       | `a = alpha`, `loc`, `scale`                   |
//! | beta        | `a = alpha`, `b = beta`, `loc`, `scale`       |
//! | gamma       | `a = k`, `scale = theta`, `loc`               |
//! | chi_squared | `df = k`, `loc`, `scale`                      |
//! | pareto      | `b = alpha`, `loc`, `scale`                   |
//! | exponential | `scale = 1 / lambda_`, `loc`                  |
//! | rice        | `b = R / sigma`, `scale = sigma`, `loc`       |
//!
//! Fit mode renames `loc`/`scale` to `floc`/`fscale` and numbers shape keys
//! `f0`, `f1`, ... in declaration order.

use pn_core::{Error, Family, LibraryParams, Mode, Result};

use crate::kwargs::Kwargs;
use crate::params::HumanParams;

/// Bind `kwargs` (Latin or Greek names) for `family` and translate them.
pub fn translate(family: Family, kwargs: &Kwargs, mode: Mode) -> Result<LibraryParams> {
    HumanParams::from_kwargs(family, kwargs)?.translate(mode)
}

/// Collects library keys for one mode, skipping unset values.
struct KeyWriter {
    mode: Mode,
    out: LibraryParams,
}

impl KeyWriter {
    fn new(mode: Mode) -> Self {
        Self { mode, out: LibraryParams::new() }
    }

    fn loc(&mut self, value: Option<f64>) -> &mut Self {
        if let Some(v) = value {
            self.out.insert(self.mode.loc_key(), v);
        }
        self
    }

    fn scale(&mut self, value: Option<f64>) -> &mut Self {
        if let Some(v) = value {
            self.out.insert(self.mode.scale_key(), v);
        }
        self
    }

    fn shape(&mut self, index: usize, name: &str, value: Option<f64>) -> &mut Self {
        if let Some(v) = value {
            self.out.insert(self.mode.shape_key(index, name), v);
        }
        self
    }

    fn finish(self) -> LibraryParams {
        self.out
    }
}

fn positive(family: Family, name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_argument(
            family.name(),
            name,
            format!("must be finite and > 0, got {value}"),
        ));
    }
    Ok(value)
}

fn non_negative(family: Family, name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_argument(
            family.name(),
            name,
            format!("must be finite and >= 0, got {value}"),
        ));
    }
    Ok(value)
}

impl HumanParams {
    /// Library keyword arguments for these parameters in `mode`.
    pub fn translate(&self, mode: Mode) -> Result<LibraryParams> {
        let family = self.family();
        let mut w = KeyWriter::new(mode);
        match *self {
            HumanParams::Uniform { low, high } => {
                w.loc(Some(low)).scale(Some(high - low));
            }
            HumanParams::Normal { mu, sigma } => {
                w.loc(mu).scale(sigma);
            }
            HumanParams::Lognormal { mu, sigma, offset } => {
                w.scale(mu.map(f64::exp)).shape(0, "s", sigma).loc(Some(offset));
            }
            HumanParams::Weibull { k, loc, scale } => {
                w.shape(0, "c", k).loc(loc).scale(scale);
            }
            HumanParams::Alpha { alpha, loc, scale } => {
                w.shape(0, "a", alpha).loc(loc).scale(scale);
            }
            HumanParams::Beta { alpha, beta, loc, scale } => {
                w.shape(0, "a", alpha).shape(1, "b", beta).loc(loc).scale(scale);
            }
            HumanParams::Gamma { k, theta, loc } => {
                w.shape(0, "a", k).loc(loc).scale(theta);
            }
            HumanParams::ChiSquared { k, loc, scale } => {
                w.shape(0, "df", k).loc(loc).scale(scale);
            }
            HumanParams::Pareto { alpha, loc, scale } => {
                w.shape(0, "b", alpha).loc(loc).scale(scale);
            }
            HumanParams::Exponential { lambda, loc } => {
                let rate = lambda.map(|l| positive(family, "lambda_", l)).transpose()?;
                w.loc(Some(loc)).scale(rate.map(|l| 1.0 / l));
            }
            HumanParams::Rice { r, sigma, loc } => {
                let b = match (r, sigma) {
                    (Some(r), Some(sigma)) => {
                        Some(non_negative(family, "R", r)? / positive(family, "sigma", sigma)?)
                    }
                    (Some(_), None) => {
                        return Err(Error::invalid_argument(
                            family.name(),
                            "sigma",
                            "is required to derive the shape from `R`",
                        ));
                    }
                    (None, _) => None,
                };
                w.shape(0, "b", b).loc(loc).scale(sigma);
            }
        }
        let out = w.finish();
        log::debug!("translated {family} ({mode:?}) -> {} key(s)", out.len());
        Ok(out)
    }

    /// Human parameters for construction-mode library keys.
    ///
    /// Missing `loc`/`scale` take the library defaults (0 and 1); a missing
    /// shape key is an error.
    pub fn from_library(family: Family, params: &LibraryParams) -> Result<Self> {
        let shape = |key: &str| {
            params.get(key).ok_or_else(|| {
                Error::invalid_argument(family.name(), key, "missing from library parameters")
            })
        };
        let loc = params.get_or("loc", 0.0);
        let scale = params.get_or("scale", 1.0);
        Ok(match family {
            Family::Uniform => HumanParams::Uniform { low: loc, high: loc + scale },
            Family::Normal => HumanParams::Normal { mu: Some(loc), sigma: Some(scale) },
            Family::Lognormal => HumanParams::Lognormal {
                mu: Some(positive(family, "scale", scale)?.ln()),
                sigma: Some(shape("s")?),
                offset: loc,
            },
            Family::Weibull => {
                HumanParams::Weibull { k: Some(shape("c")?), loc: Some(loc), scale: Some(scale) }
            }
            Family::Alpha => {
                HumanParams::Alpha { alpha: Some(shape("a")?), loc: Some(loc), scale: Some(scale) }
            }
            Family::Beta => HumanParams::Beta {
                alpha: Some(shape("a")?),
                beta: Some(shape("b")?),
                loc: Some(loc),
                scale: Some(scale),
            },
            Family::Gamma => {
                HumanParams::Gamma { k: Some(shape("a")?), theta: Some(scale), loc: Some(loc) }
            }
            Family::ChiSquared => HumanParams::ChiSquared {
                k: Some(shape("df")?),
                loc: Some(loc),
                scale: Some(scale),
            },
            Family::Pareto => {
                HumanParams::Pareto { alpha: Some(shape("b")?), loc: Some(loc), scale: Some(scale) }
            }
            Family::Exponential => HumanParams::Exponential {
                lambda: Some(1.0 / positive(family, "scale", scale)?),
                loc,
            },
            Family::Rice => HumanParams::Rice {
                r: Some(shape("b")? * scale),
                sigma: Some(scale),
                loc: Some(loc),
            },
        })
    }
}
