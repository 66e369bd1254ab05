//! Common data types for paramnormal

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Supported distribution families.
///
/// The set is closed: every family has exactly one parameter signature and
/// one translation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Continuous uniform on `[low, high]`.
    Uniform,
    /// Normal (Gaussian).
    Normal,
    /// Log-normal with optional offset.
    Lognormal,
    /// Weibull (minimum).
    Weibull,
    /// Alpha.
    Alpha,
    /// Beta.
    Beta,
    /// Gamma (shape/scale).
    Gamma,
    /// Chi-squared.
    ChiSquared,
    /// Pareto.
    Pareto,
    /// Exponential (rate).
    Exponential,
    /// Rice.
    Rice,
}

impl Family {
    /// All families, in declaration order.
    pub const ALL: [Family; 11] = [
        Family::Uniform,
        Family::Normal,
        Family::Lognormal,
        Family::Weibull,
        Family::Alpha,
        Family::Beta,
        Family::Gamma,
        Family::ChiSquared,
        Family::Pareto,
        Family::Exponential,
        Family::Rice,
    ];

    /// Snake-case name (`"chi_squared"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Family::Uniform => "uniform",
            Family::Normal => "normal",
            Family::Lognormal => "lognormal",
            Family::Weibull => "weibull",
            Family::Alpha => "alpha",
            Family::Beta => "beta",
            Family::Gamma => "gamma",
            Family::ChiSquared => "chi_squared",
            Family::Pareto => "pareto",
            Family::Exponential => "exponential",
            Family::Rice => "rice",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Family::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::Validation(format!("unknown distribution family '{s}'")))
    }
}

/// Key naming mode for library parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys for constructing a distribution (`loc`, `scale`, `a`, ...).
    #[default]
    Construct,
    /// Keys marking values as fixed during fitting (`floc`, `fscale`, `f0`, ...).
    Fit,
}

impl Mode {
    /// Location key for this mode.
    pub fn loc_key(self) -> &'static str {
        match self {
            Mode::Construct => "loc",
            Mode::Fit => "floc",
        }
    }

    /// Scale key for this mode.
    pub fn scale_key(self) -> &'static str {
        match self {
            Mode::Construct => "scale",
            Mode::Fit => "fscale",
        }
    }

    /// Key for the shape parameter declared at `index` whose construction
    /// name is `name`. Fit mode numbers shapes positionally (`f0`, `f1`, ...).
    pub fn shape_key(self, index: usize, name: &str) -> String {
        match self {
            Mode::Construct => name.to_string(),
            Mode::Fit => format!("f{index}"),
        }
    }
}

/// Keyword arguments in the distribution library's convention.
///
/// Produced by translation and consumed immediately by a distribution
/// constructor or an [`Estimator`](crate::Estimator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryParams(BTreeMap<String, f64>);

impl LibraryParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no keys are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for LibraryParams {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
