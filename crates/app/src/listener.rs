//! Listener linker: widens a primary address to the addresses listening
//! on the same communication object.

use std::collections::HashMap;

use knxha_domain::address::GroupAddressId;
use knxha_domain::registry::Registry;

/// Map from a primary (sending) address to its listening addresses.
#[derive(Debug, Clone, Default)]
pub struct ListenerLinker {
    listeners: HashMap<GroupAddressId, Vec<GroupAddressId>>,
}

impl ListenerLinker {
    /// Scan the registry's link groups once.
    ///
    /// Groups with a single member carry no listeners. When the same
    /// primary heads several groups their listeners are merged in group
    /// order.
    #[must_use]
    pub fn new(registry: &Registry) -> Self {
        let mut listeners: HashMap<GroupAddressId, Vec<GroupAddressId>> = HashMap::new();
        for group in registry.link_groups() {
            let [primary, secondaries @ ..] = group.as_slice() else {
                continue;
            };
            if secondaries.is_empty() {
                continue;
            }
            let entry = listeners.entry(primary.clone()).or_default();
            for secondary in secondaries {
                if secondary != primary && !entry.contains(secondary) {
                    entry.push(secondary.clone());
                }
            }
        }
        tracing::debug!(primaries = listeners.len(), "listener links indexed");
        Self { listeners }
    }

    /// Listening addresses of `id`, empty if it is not a primary.
    #[must_use]
    pub fn listeners(&self, id: &GroupAddressId) -> &[GroupAddressId] {
        self.listeners.get(id).map_or(&[], Vec::as_slice)
    }

    /// `id` followed by its listening addresses.
    #[must_use]
    pub fn expand(&self, id: &GroupAddressId) -> Vec<GroupAddressId> {
        let mut ids = Vec::with_capacity(1 + self.listeners(id).len());
        ids.push(id.clone());
        ids.extend_from_slice(self.listeners(id));
        ids
    }
}
