//! Claimed set: addresses already attached to an entity during a run.
//!
//! Threaded through every classifier pass as `&mut ClaimedSet`; a pass
//! skips what an earlier pass claimed, which is how more specific roles win.

use std::collections::HashSet;

use knxha_domain::address::GroupAddressId;

/// Run-scoped set of claimed group addresses. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct ClaimedSet(HashSet<GroupAddressId>);

impl ClaimedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id`; returns `false` if it was already claimed.
    pub fn claim(&mut self, id: &GroupAddressId) -> bool {
        self.0.insert(id.clone())
    }

    pub fn claim_all(&mut self, ids: &[GroupAddressId]) {
        for id in ids {
            self.claim(id);
        }
    }

    #[must_use]
    pub fn contains(&self, id: &GroupAddressId) -> bool {
        self.0.contains(id)
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
