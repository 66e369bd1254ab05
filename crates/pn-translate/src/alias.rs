//! Greek-letter aliases for keyword arguments.
//!
//! Callers may spell `mu` as `μ`, `sigma` as `σ` and so on. Normalisation is a
//! plain lookup-and-rename; binding then checks the renamed keywords against
//! the family signature and builds a typed [`HumanParams`].

use pn_core::{Error, Family, Result};

use crate::kwargs::Kwargs;
use crate::params::HumanParams;
use crate::signature::{self, ParamKind};

/// Greek spelling → Latin parameter name.
pub const SYMBOLS: [(&str, &str); 6] = [
    ("μ", "mu"),
    ("σ", "sigma"),
    ("α", "alpha"),
    ("β", "beta"),
    ("γ", "gamma"),
    ("θ", "theta"),
];

/// Latin spelling of `name`; non-Greek names are returned unchanged.
pub fn latin_name(name: &str) -> &str {
    SYMBOLS.iter().find(|(greek, _)| *greek == name).map_or(name, |&(_, latin)| latin)
}

/// Rename every Greek keyword to its Latin equivalent.
///
/// Each key is resolved on its own, so Latin, Greek and mixed spellings are
/// all accepted. Two keywords landing on the same name is a binding error.
pub fn normalize(kwargs: &Kwargs) -> Result<Kwargs> {
    let mut out = Kwargs::new();
    for (name, value) in kwargs.iter() {
        let latin = latin_name(name);
        if out.get(latin).is_some() {
            return Err(Error::Binding(format!("got multiple values for argument '{latin}'")));
        }
        out.push(latin, value);
    }
    Ok(out)
}

/// Normalise `kwargs` and bind them to the signature of `family`.
pub fn bind(family: Family, kwargs: &Kwargs) -> Result<HumanParams> {
    let kwargs = normalize(kwargs)?;
    if let Some((name, _)) = kwargs.iter().find(|(name, _)| signature::find(family, name).is_none())
    {
        return Err(Error::Binding(format!(
            "got an unexpected keyword argument '{name}' for {family}"
        )));
    }
    log::debug!("binding {} keyword(s) for {family}", kwargs.len());
    HumanParams::from_bound(&BoundArgs { family, kwargs: &kwargs })
}

/// Keyword arguments already checked against a family signature.
pub(crate) struct BoundArgs<'a> {
    family: Family,
    kwargs: &'a Kwargs,
}

impl BoundArgs<'_> {
    pub(crate) fn family(&self) -> Family {
        self.family
    }

    /// Resolved value of a declared parameter, following its [`ParamKind`].
    pub(crate) fn value(&self, name: &str) -> Result<Option<f64>> {
        let spec = signature::find(self.family, name).ok_or_else(|| {
            Error::Binding(format!("{} declares no parameter '{name}'", self.family))
        })?;
        match (spec.kind, self.kwargs.get(name)) {
            (ParamKind::Required, None) => {
                Err(Error::invalid_argument(self.family.name(), name, "is required"))
            }
            (ParamKind::Required | ParamKind::Default(_), Some(None)) => {
                Err(Error::invalid_argument(self.family.name(), name, "must not be None"))
            }
            (ParamKind::Default(d), None) => Ok(Some(d)),
            (_, Some(Some(v))) => Ok(Some(v)),
            (ParamKind::Optional, _) => Ok(None),
        }
    }

    /// Value of a required or defaulted parameter.
    pub(crate) fn present(&self, name: &str) -> Result<f64> {
        self.value(name)?
            .ok_or_else(|| Error::invalid_argument(self.family.name(), name, "is required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_name() {
        assert_eq!(latin_name("μ"), "mu");
        assert_eq!(latin_name("θ"), "theta");
        assert_eq!(latin_name("mu"), "mu");
        assert_eq!(latin_name("k"), "k");
    }

    #[test]
    fn test_normalize_mixed() {
        let kw = Kwargs::new().with("μ", 1.0).with("sigma", 2.0).with("offset", 3.0);
        let out = normalize(&kw).unwrap();
        let names: Vec<_> = out.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["mu", "sigma", "offset"]);
    }

    #[test]
    fn test_normalize_duplicate_is_binding_error() {
        let kw = Kwargs::new().with("mu", 1.0).with("μ", 2.0);
        assert!(matches!(normalize(&kw), Err(Error::Binding(_))));
    }

    #[test]
    fn test_bind_unknown_keyword() {
        let kw = Kwargs::new().with("mu", 1.0).with("k", 2.0);
        let err = bind(Family::Normal, &kw).unwrap_err();
        match err {
            Error::Binding(msg) => assert!(msg.contains("'k'"), "{msg}"),
            other => panic!("expected binding error, got {other:?}"),
        }
    }

    #[test]
    fn test_bind_greek_gamma_is_not_a_gamma_parameter() {
        // γ maps to `gamma`, which no family declares.
        let kw = Kwargs::new().with("γ", 1.0);
        assert!(matches!(bind(Family::Gamma, &kw), Err(Error::Binding(_))));
    }

    #[test]
    fn test_bind_missing_required() {
        let kw = Kwargs::new().with("high", 9.0);
        match bind(Family::Uniform, &kw).unwrap_err() {
            Error::InvalidArgument { family, parameter, .. } => {
                assert_eq!(family, "uniform");
                assert_eq!(parameter, "low");
            }
            other => panic!("expected invalid argument, got {other:?}"),
        }
    }

    #[test]
    fn test_bind_null_default_rejected() {
        let kw = Kwargs::new().with_null("offset");
        assert!(matches!(
            bind(Family::Lognormal, &kw),
            Err(Error::InvalidArgument { ref parameter, .. }) if parameter == "offset"
        ));
    }

    #[test]
    fn test_bind_null_optional_is_omission() {
        let with_null = bind(Family::Normal, &Kwargs::new().with("mu", 1.0).with_null("sigma"));
        let without = bind(Family::Normal, &Kwargs::new().with("mu", 1.0));
        assert_eq!(with_null.unwrap(), without.unwrap());
    }
}
