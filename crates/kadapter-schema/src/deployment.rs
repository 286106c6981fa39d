use crate::ServiceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Replica count used when a deployment does not name one.
pub const DEFAULT_SCALE: u32 = 1;

/// Desired replica count for a deployment.
///
/// Deserializes from a non-negative integer or from a numeric string such as
/// `"10"`; anything else is rejected with [`ServiceError::InvalidConfiguration`]
/// while loading, so a stored count is always a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCount", into = "u32")]
pub struct ReplicaCount(u32);

impl ReplicaCount {
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse a textual count. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, ServiceError> {
        text.trim().parse::<u32>().map(Self).map_err(|_| {
            ServiceError::InvalidConfiguration(format!(
                "deployment.count must be a non-negative integer, got '{text}'"
            ))
        })
    }
}

impl fmt::Display for ReplicaCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ReplicaCount {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl From<ReplicaCount> for u32 {
    fn from(count: ReplicaCount) -> Self {
        count.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(i64),
    Text(String),
    Other(serde_json::Value),
}

impl TryFrom<RawCount> for ReplicaCount {
    type Error = ServiceError;

    fn try_from(raw: RawCount) -> Result<Self, Self::Error> {
        match raw {
            RawCount::Integer(n) => u32::try_from(n).map(Self).map_err(|_| {
                ServiceError::InvalidConfiguration(format!(
                    "deployment.count must be a non-negative integer, got {n}"
                ))
            }),
            RawCount::Text(text) => Self::parse(&text),
            RawCount::Other(value) => Err(ServiceError::InvalidConfiguration(format!(
                "deployment.count must be an integer or numeric string, got {value}"
            ))),
        }
    }
}

/// Deployment settings for a service.
///
/// Only `count` is interpreted; every other key is carried through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Deployment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<ReplicaCount>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Deployment {
    pub fn with_count(count: u32) -> Self {
        Self {
            count: Some(ReplicaCount::new(count)),
            extra: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count.is_none() && self.extra.is_empty()
    }

    /// Replica count, falling back to [`DEFAULT_SCALE`] when none is set.
    pub fn scale(&self) -> u32 {
        self.count.map_or(DEFAULT_SCALE, ReplicaCount::get)
    }
}
