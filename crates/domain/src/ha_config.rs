//! HaConfig: the extracted Home Assistant KNX configuration.

use serde::{Deserialize, Serialize};

use crate::address::GroupAddressId;
use crate::entity::{
    BinarySensor, Climate, Cover, Entity, EntityKind, Light, Number, Sensor, Switch,
};

/// One list per entity kind, each in discovery order.
///
/// Field order is the output order of the serialized document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaConfig {
    pub light: Vec<Light>,
    pub switch: Vec<Switch>,
    pub binary_sensor: Vec<BinarySensor>,
    pub sensor: Vec<Sensor>,
    pub number: Vec<Number>,
    pub climate: Vec<Climate>,
    pub cover: Vec<Cover>,
}

/// Where an address ended up: entity kind, entity name and role field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub kind: EntityKind,
    pub name: &'a str,
    pub role: &'static str,
}

impl HaConfig {
    /// Total number of entities across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.light.len()
            + self.switch.len()
            + self.binary_sensor.len()
            + self.sensor.len()
            + self.number.len()
            + self.climate.len()
            + self.cover.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every role field of every entity referencing `id`.
    #[must_use]
    pub fn occurrences(&self, id: &GroupAddressId) -> Vec<Occurrence<'_>> {
        let mut found = Vec::new();
        collect(&self.light, id, &mut found);
        collect(&self.switch, id, &mut found);
        collect(&self.binary_sensor, id, &mut found);
        collect(&self.sensor, id, &mut found);
        collect(&self.number, id, &mut found);
        collect(&self.climate, id, &mut found);
        collect(&self.cover, id, &mut found);
        found
    }
}

fn collect<'a, E: Entity>(
    entities: &'a [E],
    id: &GroupAddressId,
    found: &mut Vec<Occurrence<'a>>,
) {
    for entity in entities {
        for (role, addresses) in entity.roles() {
            if addresses.contains(id) {
                found.push(Occurrence {
                    kind: E::KIND,
                    name: entity.name(),
                    role,
                });
            }
        }
    }
}
