//! Binary sensor: a read-only on/off signal (alarm, presence, window, …).

use serde::{Deserialize, Serialize};

use crate::address::GroupAddressId;
use crate::entity::{Entity, EntityKind};

/// BinarySensor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySensor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub state_address: Vec<GroupAddressId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<String>,
}

impl BinarySensor {
    #[must_use]
    pub fn new(name: impl Into<String>, state_address: Vec<GroupAddressId>) -> Self {
        Self {
            name: name.into(),
            state_address,
            device_class: None,
        }
    }

    #[must_use]
    pub fn with_device_class(mut self, device_class: impl Into<String>) -> Self {
        self.device_class = Some(device_class.into());
        self
    }
}

impl Entity for BinarySensor {
    const KIND: EntityKind = EntityKind::BinarySensor;

    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> Vec<(&'static str, &[GroupAddressId])> {
        vec![("state_address", self.state_address.as_slice())]
    }
}
