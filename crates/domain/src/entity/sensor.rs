//! Sensor: a read-only measured value.

use serde::{Deserialize, Serialize};

use crate::address::GroupAddressId;
use crate::entity::{Entity, EntityKind};

/// Sensor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub state_address: Vec<GroupAddressId>,
    /// Home Assistant KNX value type, e.g. `temperature`.
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<String>,
}

impl Entity for Sensor {
    const KIND: EntityKind = EntityKind::Sensor;

    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> Vec<(&'static str, &[GroupAddressId])> {
        vec![("state_address", self.state_address.as_slice())]
    }
}
