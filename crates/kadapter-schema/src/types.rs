//! Newtype wrappers for normalized identifiers.
//!
//! Newtypes serialize as plain strings. Deserializing one runs the same
//! normalization as constructing it.

use crate::sanitize::sanitize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A service name that has been passed through [`sanitize`].
///
/// There is no way to build a `ServiceName` holding unsanitized text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ServiceName(String);

impl ServiceName {
    /// Sanitize `raw` and wrap the result.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(sanitize(raw.as_ref()))
    }

    /// Return the inner string as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ServiceName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ServiceName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ServiceName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for ServiceName {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl From<String> for ServiceName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ServiceName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.0
    }
}
