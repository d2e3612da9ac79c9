//! Range index: range name → addresses, address → human-readable path.

use std::collections::HashMap;

use knxha_domain::address::GroupAddressId;
use knxha_domain::range::RangeNode;
use knxha_domain::registry::Registry;

use crate::diagnostics::{Diagnostic, Diagnostics};

/// Path returned for addresses not attached to any range.
pub const UNKNOWN_PATH: &str = "Unknown";

/// Where an address sits in the range tree.
#[derive(Debug, Clone, Copy)]
enum Location<'r> {
    Main(&'r str),
    Sub { main: &'r str, sub: &'r str },
}

/// Lookups over the registry's range tree, cached for one conversion run.
#[derive(Debug)]
pub struct RangeIndex<'r> {
    registry: &'r Registry,
    cache: HashMap<String, Vec<GroupAddressId>>,
    locations: HashMap<&'r GroupAddressId, Location<'r>>,
}

impl<'r> RangeIndex<'r> {
    /// Index the location of every address. The first location in tree
    /// order wins when an address is listed twice.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        let mut locations = HashMap::new();
        for main in registry.ranges() {
            for id in &main.addresses {
                locations.entry(id).or_insert(Location::Main(&main.name));
            }
            for sub in &main.ranges {
                locate_sub(&main.name, sub, &mut locations);
            }
        }
        Self {
            registry,
            cache: HashMap::new(),
            locations,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Every address reachable under the range called `name`.
    ///
    /// A main range yields the addresses of its sub-ranges in order (not the
    /// addresses attached to it directly). Failing that, the first sub-range
    /// with that name yields its own addresses. No match yields nothing and
    /// a [`Diagnostic::RangeNotFound`].
    pub fn addresses_under(
        &mut self,
        name: &str,
        diagnostics: &mut Diagnostics,
    ) -> Vec<GroupAddressId> {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }
        let found = find_addresses(self.registry.ranges(), name);
        if found.is_none() {
            diagnostics.push(Diagnostic::RangeNotFound {
                range: name.to_string(),
            });
        }
        let found = found.unwrap_or_default();
        self.cache.insert(name.to_string(), found.clone());
        found
    }

    /// `<main>` for addresses attached to a main range, otherwise
    /// `<main>/<sub>/<display name>`. `None` when the address is in no range.
    #[must_use]
    pub fn try_path_of(&self, id: &GroupAddressId) -> Option<String> {
        let path = match *self.locations.get(id)? {
            Location::Main(main) => main.to_string(),
            Location::Sub { main, sub } => {
                let name = self.registry.get(id).map_or("", |ga| ga.name.as_str());
                format!("{main}/{sub}/{name}")
            }
        };
        Some(path)
    }

    /// Like [`try_path_of`](Self::try_path_of), returning [`UNKNOWN_PATH`] on a miss.
    ///
    /// Registry addresses that miss are listed by [`unplaced`](Self::unplaced).
    #[must_use]
    pub fn path_of(&self, id: &GroupAddressId) -> String {
        self.try_path_of(id).unwrap_or_else(|| {
            tracing::debug!(address = %id, "group address is not part of any range");
            UNKNOWN_PATH.to_string()
        })
    }

    /// Registry addresses attached to no range, in registry order.
    pub fn unplaced(&self) -> impl Iterator<Item = &'r GroupAddressId> + '_ {
        self.registry
            .addresses()
            .iter()
            .map(|ga| &ga.id)
            .filter(|id| !self.locations.contains_key(id))
    }

    /// Whether a range `id` sits in mentions `fragment`. The address's own
    /// display name is not considered.
    #[must_use]
    pub fn range_path_contains(&self, id: &GroupAddressId, fragment: &str) -> bool {
        match self.locations.get(id) {
            Some(Location::Main(main)) => main.contains(fragment),
            Some(Location::Sub { main, sub }) => main.contains(fragment) || sub.contains(fragment),
            None => false,
        }
    }
}

fn locate_sub<'r>(
    main: &'r str,
    node: &'r RangeNode,
    locations: &mut HashMap<&'r GroupAddressId, Location<'r>>,
) {
    for id in &node.addresses {
        locations.entry(id).or_insert(Location::Sub {
            main,
            sub: &node.name,
        });
    }
    for child in &node.ranges {
        locate_sub(main, child, locations);
    }
}

fn find_addresses(mains: &[RangeNode], name: &str) -> Option<Vec<GroupAddressId>> {
    if let Some(main) = mains.iter().find(|main| main.name == name) {
        return Some(
            main.ranges
                .iter()
                .flat_map(|sub| sub.addresses.iter().cloned())
                .collect(),
        );
    }
    mains
        .iter()
        .flat_map(|main| &main.ranges)
        .find(|sub| sub.name == name)
        .map(|sub| sub.addresses.clone())
}
