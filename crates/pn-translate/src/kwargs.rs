//! Untyped keyword arguments.

use pn_core::{Error, Result};

/// Ordered `name = value` pairs as supplied by a caller.
///
/// A `None` value is an explicitly supplied null, which binding treats
/// differently from an absent name for defaulted parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs(Vec<(String, Option<f64>)>);

impl Kwargs {
    /// Empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append `name = value`.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.push(name, Some(value));
        self
    }

    /// Builder: append `name = None`.
    pub fn with_null(mut self, name: impl Into<String>) -> Self {
        self.push(name, None);
        self
    }

    /// Append a possibly-null argument.
    pub fn push(&mut self, name: impl Into<String>, value: Option<f64>) {
        self.0.push((name.into(), value));
    }

    /// Parse and append a `name=value` assignment. `none` and `null` are
    /// explicit nulls.
    pub fn push_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, raw) = assignment.split_once('=').ok_or_else(|| {
            Error::Validation(format!("expected name=value, got '{assignment}'"))
        })?;
        let name = name.trim();
        let raw = raw.trim();
        if name.is_empty() {
            return Err(Error::Validation(format!("missing parameter name in '{assignment}'")));
        }
        let value = match raw.to_ascii_lowercase().as_str() {
            "none" | "null" => None,
            _ => Some(raw.parse::<f64>().map_err(|e| {
                Error::Validation(format!("invalid value for '{name}': '{raw}' ({e})"))
            })?),
        };
        self.push(name, value);
        Ok(())
    }

    /// First value supplied for `name`: `None` if absent, `Some(None)` if null.
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arguments in call order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), Some(v))).collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Option<f64>)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
