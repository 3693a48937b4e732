//! Names of code fragments.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A fragment name identifies a named code fragment.
///
/// Names are taken verbatim from `<<name>>=` markers and may contain any
/// characters, including spaces and path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FragmentName(String);

impl FragmentName {
    /// Creates a new FragmentName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FragmentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FragmentName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for FragmentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FragmentName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
