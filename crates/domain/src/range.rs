//! Range: a named grouping of group addresses (main ranges, middle ranges).

use crate::address::GroupAddressId;

/// A node of the project's range tree.
///
/// Main ranges contain sub-ranges which in turn contain addresses. Main
/// ranges may also hold addresses directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeNode {
    pub name: String,
    /// Child ranges in project order.
    pub ranges: Vec<RangeNode>,
    /// Addresses attached directly to this range.
    pub addresses: Vec<GroupAddressId>,
}

impl RangeNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: RangeNode) -> Self {
        self.ranges.push(range);
        self
    }

    #[must_use]
    pub fn with_address(mut self, id: GroupAddressId) -> Self {
        self.addresses.push(id);
        self
    }

    /// Whether `id` is attached directly to this range.
    #[must_use]
    pub fn contains(&self, id: &GroupAddressId) -> bool {
        self.addresses.contains(id)
    }
}
