//! Datapoint types (DPT) and the predicate used to match them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type code of a group address, e.g. `9.001` for temperature.
///
/// Project data occasionally carries only the main number, so `sub` is
/// optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dpt {
    pub main: u16,
    pub sub: Option<u16>,
}

/// Requirement on the sub number of a [`Dpt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMatch<'a> {
    /// Only the main number is checked.
    Any,
    /// The sub number must equal this value.
    Exact(u16),
    /// The sub number must be one of these values.
    OneOf(&'a [u16]),
}

impl Dpt {
    #[must_use]
    pub const fn new(main: u16, sub: u16) -> Self {
        Self {
            main,
            sub: Some(sub),
        }
    }

    #[must_use]
    pub const fn main_only(main: u16) -> Self {
        Self { main, sub: None }
    }

    /// Whether this type code is `main` with a sub number accepted by `sub`.
    ///
    /// A missing sub number only satisfies [`SubMatch::Any`].
    #[must_use]
    pub fn matches(&self, main: u16, sub: SubMatch<'_>) -> bool {
        if self.main != main {
            return false;
        }
        match (sub, self.sub) {
            (SubMatch::Any, _) => true,
            (SubMatch::Exact(expected), Some(actual)) => expected == actual,
            (SubMatch::OneOf(set), Some(actual)) => set.contains(&actual),
            (_, None) => false,
        }
    }
}

impl fmt::Display for Dpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub {
            Some(sub) => write!(f, "{}.{sub:03}", self.main),
            None => write!(f, "{}", self.main),
        }
    }
}
