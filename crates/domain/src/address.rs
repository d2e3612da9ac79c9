//! Group addresses: the bus communication points a project is made of.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dpt::{Dpt, SubMatch};
use crate::error::ValidationError;

/// Identifier of a group address, e.g. `5/3/12`.
///
/// Accepts the three-level (`main/middle/sub`), two-level (`main/sub`) and
/// free (`n`) notations. Every component must be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupAddressId(String);

impl GroupAddressId {
    /// Borrow the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupAddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GroupAddressId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }
        let parts: Vec<&str> = s.split('/').collect();
        let numeric = parts.len() <= 3 && parts.iter().all(|part| part.parse::<u16>().is_ok());
        if !numeric {
            return Err(ValidationError::InvalidAddress(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for GroupAddressId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GroupAddressId> for String {
    fn from(id: GroupAddressId) -> Self {
        id.0
    }
}

/// A single group address as loaded from the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAddress {
    pub id: GroupAddressId,
    pub name: String,
    /// Datapoint type; `None` for untyped points.
    pub dpt: Option<Dpt>,
}

impl GroupAddress {
    #[must_use]
    pub fn new(id: GroupAddressId, name: impl Into<String>, dpt: Option<Dpt>) -> Self {
        Self {
            id,
            name: name.into(),
            dpt,
        }
    }

    /// Whether this address carries the datapoint type `main` / `sub`.
    ///
    /// Fails closed: untyped addresses never match.
    #[must_use]
    pub fn matches(&self, main: u16, sub: SubMatch<'_>) -> bool {
        self.dpt.is_some_and(|dpt| dpt.matches(main, sub))
    }
}
