//! Registry: everything the converter knows about a parsed project.
//!
//! Holds the flat list of group addresses (in project order), the range tree
//! and the communication-object link groups. Read-only once built.

use std::collections::HashMap;

use crate::address::{GroupAddress, GroupAddressId};
use crate::error::ValidationError;
use crate::range::RangeNode;

/// Loaded project data consumed by the classifiers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    addresses: Vec<GroupAddress>,
    index: HashMap<GroupAddressId, usize>,
    ranges: Vec<RangeNode>,
    link_groups: Vec<Vec<GroupAddressId>>,
}

impl Registry {
    /// Create a builder for constructing a [`Registry`].
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// All group addresses in project order.
    #[must_use]
    pub fn addresses(&self) -> &[GroupAddress] {
        &self.addresses
    }

    #[must_use]
    pub fn get(&self, id: &GroupAddressId) -> Option<&GroupAddress> {
        self.index.get(id).map(|&idx| &self.addresses[idx])
    }

    /// Main ranges in project order.
    #[must_use]
    pub fn ranges(&self) -> &[RangeNode] {
        &self.ranges
    }

    /// Group addresses linked to the same communication object, sending
    /// address first.
    #[must_use]
    pub fn link_groups(&self) -> &[Vec<GroupAddressId>] {
        &self.link_groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Step-by-step builder for [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    addresses: Vec<GroupAddress>,
    ranges: Vec<RangeNode>,
    link_groups: Vec<Vec<GroupAddressId>>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn address(mut self, address: GroupAddress) -> Self {
        self.addresses.push(address);
        self
    }

    #[must_use]
    pub fn range(mut self, range: RangeNode) -> Self {
        self.ranges.push(range);
        self
    }

    #[must_use]
    pub fn link_group(mut self, group: Vec<GroupAddressId>) -> Self {
        self.link_groups.push(group);
        self
    }

    /// Consume the builder, index the addresses and return a [`Registry`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateAddress`] if an identifier was
    /// added twice.
    pub fn build(self) -> Result<Registry, ValidationError> {
        let mut index = HashMap::with_capacity(self.addresses.len());
        for (idx, address) in self.addresses.iter().enumerate() {
            if index.insert(address.id.clone(), idx).is_some() {
                return Err(ValidationError::DuplicateAddress(address.id.to_string()));
            }
        }
        Ok(Registry {
            addresses: self.addresses,
            index,
            ranges: self.ranges,
            link_groups: self.link_groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpt::Dpt;

    fn ga(id: &str, name: &str, dpt: Option<Dpt>) -> GroupAddress {
        GroupAddress::new(id.parse().unwrap(), name, dpt)
    }

    #[test]
    fn should_keep_addresses_in_insertion_order() {
        let registry = Registry::builder()
            .address(ga("2/0/0", "B", None))
            .address(ga("1/0/0", "A", None))
            .build()
            .unwrap();
        let ids: Vec<&str> = registry.addresses().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["2/0/0", "1/0/0"]);
    }

    #[test]
    fn should_look_up_address_by_id() {
        let registry = Registry::builder()
            .address(ga("1/1/5", "Temp", Some(Dpt::new(9, 1))))
            .build()
            .unwrap();
        let found = registry.get(&"1/1/5".parse().unwrap()).unwrap();
        assert_eq!(found.name, "Temp");
        assert!(registry.get(&"1/1/6".parse().unwrap()).is_none());
    }

    #[test]
    fn should_reject_duplicate_addresses() {
        let result = Registry::builder()
            .address(ga("1/1/5", "A", None))
            .address(ga("1/1/5", "B", None))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::DuplicateAddress("1/1/5".to_string())
        );
    }

    #[test]
    fn should_build_empty_registry() {
        let registry = Registry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.ranges().is_empty());
        assert!(registry.link_groups().is_empty());
    }
}
