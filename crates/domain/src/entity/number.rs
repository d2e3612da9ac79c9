//! Number: a writable numeric value (scene numbers).

use serde::{Deserialize, Serialize};

use crate::address::GroupAddressId;
use crate::entity::{Entity, EntityKind};

/// Number configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Number {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<GroupAddressId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub state_address: Vec<GroupAddressId>,
    #[serde(rename = "type")]
    pub value_type: String,
    pub min: u16,
    pub max: u16,
    pub step: u16,
}

impl Number {
    /// Lowest selectable scene.
    pub const SCENE_MIN: u16 = 0;
    /// Highest selectable scene.
    pub const SCENE_MAX: u16 = 64;

    /// A scene selector writing and reading back through `addresses`.
    #[must_use]
    pub fn scene(
        name: impl Into<String>,
        value_type: impl Into<String>,
        addresses: Vec<GroupAddressId>,
    ) -> Self {
        Self {
            name: name.into(),
            address: addresses.clone(),
            state_address: addresses,
            value_type: value_type.into(),
            min: Self::SCENE_MIN,
            max: Self::SCENE_MAX,
            step: 1,
        }
    }
}

impl Entity for Number {
    const KIND: EntityKind = EntityKind::Number;

    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> Vec<(&'static str, &[GroupAddressId])> {
        vec![
            ("address", self.address.as_slice()),
            ("state_address", self.state_address.as_slice()),
        ]
    }
}
