//! Declared human parameters per family.
//!
//! Declaration order matters: binding reports against it and
//! [`HumanParams::to_kwargs`](crate::HumanParams::to_kwargs) emits in it.

use pn_core::Family;
use serde::Serialize;

/// How a parameter behaves when absent or null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ParamKind {
    /// Must be supplied and non-null.
    Required,
    /// Omitted from the translation when absent or null.
    Optional,
    /// Takes the default when absent; null is rejected.
    Default(f64),
}

/// One declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Latin parameter name.
    pub name: &'static str,
    /// Absent/null behaviour.
    #[serde(flatten)]
    pub kind: ParamKind,
}

const fn required(name: &'static str) -> ParamSpec {
    ParamSpec { name, kind: ParamKind::Required }
}

const fn optional(name: &'static str) -> ParamSpec {
    ParamSpec { name, kind: ParamKind::Optional }
}

const fn default(name: &'static str, value: f64) -> ParamSpec {
    ParamSpec { name, kind: ParamKind::Default(value) }
}

const UNIFORM: &[ParamSpec] = &[required("low"), required("high")];
const NORMAL: &[ParamSpec] = &[optional("mu"), optional("sigma")];
const LOGNORMAL: &[ParamSpec] = &[optional("mu"), optional("sigma"), default("offset", 0.0)];
const WEIBULL: &[ParamSpec] = &[optional("k"), optional("loc"), optional("scale")];
const ALPHA: &[ParamSpec] = &[optional("alpha"), optional("loc"), optional("scale")];
const BETA: &[ParamSpec] =
    &[optional("alpha"), optional("beta"), optional("loc"), optional("scale")];
const GAMMA: &[ParamSpec] = &[optional("k"), optional("theta"), optional("loc")];
const CHI_SQUARED: &[ParamSpec] = &[optional("k"), optional("loc"), optional("scale")];
const PARETO: &[ParamSpec] = &[optional("alpha"), optional("loc"), optional("scale")];
const EXPONENTIAL: &[ParamSpec] = &[optional("lambda_"), default("loc", 0.0)];
const RICE: &[ParamSpec] = &[optional("R"), optional("sigma"), optional("loc")];

/// Declared parameters of `family`, in declaration order.
pub fn signature(family: Family) -> &'static [ParamSpec] {
    match family {
        Family::Uniform => UNIFORM,
        Family::Normal => NORMAL,
        Family::Lognormal => LOGNORMAL,
        Family::Weibull => WEIBULL,
        Family::Alpha => ALPHA,
        Family::Beta => BETA,
        Family::Gamma => GAMMA,
        Family::ChiSquared => CHI_SQUARED,
        Family::Pareto => PARETO,
        Family::Exponential => EXPONENTIAL,
        Family::Rice => RICE,
    }
}

/// Look up `name` in the signature of `family`.
pub fn find(family: Family, name: &str) -> Option<&'static ParamSpec> {
    signature(family).iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_parameters() {
        for family in Family::ALL {
            assert!(!signature(family).is_empty(), "{family}");
        }
    }

    #[test]
    fn test_names_unique_within_family() {
        for family in Family::ALL {
            let sig = signature(family);
            for (i, a) in sig.iter().enumerate() {
                assert!(sig[i + 1..].iter().all(|b| b.name != a.name), "{family}: {}", a.name);
            }
        }
    }

    #[test]
    fn test_lognormal_offset_defaults_to_zero() {
        let spec = find(Family::Lognormal, "offset").unwrap();
        assert_eq!(spec.kind, ParamKind::Default(0.0));
        assert!(find(Family::Normal, "offset").is_none());
    }

    #[test]
    fn test_exponential_loc_defaults_to_zero() {
        let spec = find(Family::Exponential, "loc").unwrap();
        assert_eq!(spec.kind, ParamKind::Default(0.0));
    }
}
