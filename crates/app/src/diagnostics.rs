//! Diagnostics: every recoverable decision a conversion run makes.
//!
//! Each pushed [`Diagnostic`] is logged as a structured `tracing` warning and
//! kept, so callers can inspect what was skipped, dropped or patched.

use std::fmt;

use knxha_domain::address::GroupAddressId;
use knxha_domain::dpt::Dpt;
use knxha_domain::error::IncompleteEntity;

/// A lookup miss, type mismatch or incomplete entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No main or middle range carries this name.
    RangeNotFound { range: String },

    /// An address sits in no range, so its path reads as unknown.
    NotInAnyRange { address: GroupAddressId },

    /// A range lists an address the registry does not know.
    UnknownAddress {
        range: String,
        address: GroupAddressId,
    },

    /// An address found in a role's range carries the wrong type code.
    TypeMismatch {
        address: GroupAddressId,
        name: String,
        role: &'static str,
        expected: Dpt,
        actual: Option<Dpt>,
    },

    /// A draft failed its completeness check and was dropped.
    Dropped(IncompleteEntity),

    /// A climate had no setpoint feedback; the setpoint address stands in.
    TargetStateAliased { name: String },

    /// A listener address already belongs to another entity and was left
    /// out of `name`.
    AlreadyClaimed {
        address: GroupAddressId,
        name: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeNotFound { range } => {
                write!(f, "no group addresses found for group range {range:?}")
            }
            Self::NotInAnyRange { address } => {
                write!(f, "group address {address} is not part of any range")
            }
            Self::UnknownAddress { range, address } => {
                write!(f, "group range {range:?} lists unknown address {address}")
            }
            Self::TypeMismatch {
                address,
                name,
                role,
                expected,
                actual,
            } => {
                let actual = actual.map_or_else(|| "none".to_string(), |dpt| dpt.to_string());
                write!(
                    f,
                    "unexpected DPT for {role} in {address} ({name}): expected {expected}, got {actual}"
                )
            }
            Self::Dropped(err) => write!(f, "dropped {err}"),
            Self::TargetStateAliased { name } => write!(
                f,
                "climate {name:?} has no target temperature state, using target temperature address"
            ),
            Self::AlreadyClaimed { address, name } => write!(
                f,
                "listener address {address} is already claimed, not attached to {name:?}"
            ),
        }
    }
}

/// Ordered list of diagnostics collected during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Log `diagnostic` and keep it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::RangeNotFound { range } => {
                tracing::warn!(%range, "{diagnostic}");
            }
            Diagnostic::NotInAnyRange { address } => {
                tracing::warn!(%address, "{diagnostic}");
            }
            Diagnostic::UnknownAddress { range, address } => {
                tracing::warn!(%range, %address, "{diagnostic}");
            }
            Diagnostic::TypeMismatch {
                address,
                expected,
                actual,
                ..
            } => {
                tracing::warn!(%address, %expected, actual = ?actual, "{diagnostic}");
            }
            Diagnostic::Dropped(err) => {
                tracing::warn!(kind = %err.kind, name = %err.name, role = err.role, "{diagnostic}");
            }
            Diagnostic::TargetStateAliased { name } => {
                tracing::warn!(%name, "{diagnostic}");
            }
            Diagnostic::AlreadyClaimed { address, name } => {
                tracing::warn!(%address, %name, "{diagnostic}");
            }
        }
        self.0.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knxha_domain::entity::EntityKind;

    #[test]
    fn should_keep_diagnostics_in_push_order() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.push(Diagnostic::RangeNotFound {
            range: "A".to_string(),
        });
        diagnostics.push(Diagnostic::TargetStateAliased {
            name: "B".to_string(),
        });
        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics.iter().next(),
            Some(Diagnostic::RangeNotFound { .. })
        ));
    }

    #[test]
    fn should_display_type_mismatch_with_codes() {
        let diagnostic = Diagnostic::TypeMismatch {
            address: "3/1/1".parse().unwrap(),
            name: "Bad".to_string(),
            role: "target_temperature_address",
            expected: Dpt::new(9, 1),
            actual: Some(Dpt::new(5, 1)),
        };
        assert_eq!(
            diagnostic.to_string(),
            "unexpected DPT for target_temperature_address in 3/1/1 (Bad): expected 9.001, got 5.001"
        );
    }

    #[test]
    fn should_display_missing_actual_type() {
        let diagnostic = Diagnostic::TypeMismatch {
            address: "3/1/1".parse().unwrap(),
            name: "Bad".to_string(),
            role: "temperature_address",
            expected: Dpt::new(9, 1),
            actual: None,
        };
        assert!(diagnostic.to_string().ends_with("got none"));
    }

    #[test]
    fn should_display_dropped_entity() {
        let diagnostic = Diagnostic::Dropped(IncompleteEntity {
            kind: EntityKind::Light,
            name: "Flur".to_string(),
            role: "address",
        });
        assert_eq!(diagnostic.to_string(), "dropped light \"Flur\" has no address");
    }

    #[test]
    fn should_display_already_claimed_listener() {
        let diagnostic = Diagnostic::AlreadyClaimed {
            address: "1/0/2".parse().unwrap(),
            name: "Steckdose".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "listener address 1/0/2 is already claimed, not attached to \"Steckdose\""
        );
    }
}
