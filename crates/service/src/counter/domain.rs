use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Validated counter key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CounterName(String);

impl CounterName {
    pub const DEFAULT: &'static str = "default";

    pub fn new(name: impl Into<String>) -> Result<Self, ServiceError> {
        let name = name.into();
        models::counter::validate_name(&name).map_err(|e| ServiceError::Validation(e.to_string()))?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl Default for CounterName {
    fn default() -> Self { Self(Self::DEFAULT.to_string()) }
}

impl fmt::Display for CounterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for CounterName {
    fn as_ref(&self) -> &str { &self.0 }
}

impl FromStr for CounterName {
    type Err = ServiceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::new(s) }
}

impl TryFrom<String> for CounterName {
    type Error = ServiceError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Self::new(s) }
}

impl From<CounterName> for String {
    fn from(n: CounterName) -> Self { n.0 }
}

/// Domain counter (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub id: Uuid,
    pub name: String,
    pub value: i64,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<models::counter::Model> for Counter {
    fn from(m: models::counter::Model) -> Self {
        Self { id: m.id, name: m.name, value: m.value, created_at: m.created_at, updated_at: m.updated_at }
    }
}
