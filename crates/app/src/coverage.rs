//! Coverage report: addresses no classifier pass claimed.

use std::fmt;

use knxha_domain::address::GroupAddressId;
use knxha_domain::dpt::Dpt;

use crate::claimed::ClaimedSet;
use crate::range_index::RangeIndex;

/// An address left out of the generated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclaimedAddress {
    pub id: GroupAddressId,
    pub path: String,
    pub dpt: Option<Dpt>,
}

impl fmt::Display for UnclaimedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ", self.id, self.path)?;
        match self.dpt {
            Some(dpt) => write!(f, "DPT: {dpt}"),
            None => f.write_str("DPT unspecified"),
        }
    }
}

/// Unclaimed addresses in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub unclaimed: Vec<UnclaimedAddress>,
    /// Number of addresses in the registry.
    pub total: usize,
}

impl CoverageReport {
    #[must_use]
    pub fn new(index: &RangeIndex<'_>, claimed: &ClaimedSet) -> Self {
        let registry = index.registry();
        let unclaimed = registry
            .addresses()
            .iter()
            .filter(|ga| !claimed.contains(&ga.id))
            .map(|ga| UnclaimedAddress {
                id: ga.id.clone(),
                path: index.path_of(&ga.id),
                dpt: ga.dpt,
            })
            .collect();
        Self {
            unclaimed,
            total: registry.len(),
        }
    }

    /// Whether every address ended up in an entity.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unclaimed.is_empty()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unprocessed group addresses ({} of {}):",
            self.unclaimed.len(),
            self.total
        )?;
        for address in &self.unclaimed {
            write!(f, "\n\t{address}")?;
        }
        Ok(())
    }
}
