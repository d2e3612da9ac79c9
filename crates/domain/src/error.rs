//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! The domain only knows about malformed input ([`ValidationError`]) and
//! drafts that cannot be frozen into an entity ([`IncompleteEntity`]).

use crate::entity::EntityKind;

/// Input that violates a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A group address identifier was the empty string.
    #[error("group address must not be empty")]
    EmptyAddress,

    /// A group address identifier is not a `/`-separated numeric path.
    #[error("invalid group address {0:?}")]
    InvalidAddress(String),

    /// The same group address was registered twice.
    #[error("duplicate group address {0}")]
    DuplicateAddress(String),
}

/// A draft entity lacks a role it cannot exist without.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {name:?} has no {role}")]
pub struct IncompleteEntity {
    /// Kind of entity the draft would have become.
    pub kind: EntityKind,
    /// Draft key (the entity's name).
    pub name: String,
    /// Name of the missing role field.
    pub role: &'static str,
}
