//! Entity: a Home Assistant KNX entity descriptor.
//!
//! Every entity has a name and a fixed set of *role fields*. Each role field
//! holds the ordered list of group addresses serving that role (a primary
//! address plus any listening addresses). Entities with several roles are
//! accumulated in a mutable draft first and frozen by `build()` once they
//! pass their completeness check.

use std::fmt;

use crate::address::GroupAddressId;
use crate::error::IncompleteEntity;

/// Defines an entity made only of role fields, together with its role enum
/// and its draft.
macro_rules! role_entity {
    (
        $(#[doc = $doc:expr])*
        $name:ident, $draft:ident, $role:ident, $kind:expr,
        { $( $field:ident => $variant:ident ),+ $(,)? }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            pub name: String,
            $(
                #[serde(default, skip_serializing_if = "Vec::is_empty")]
                pub $field: Vec<$crate::address::GroupAddressId>,
            )+
        }

        #[doc = concat!("Role fields of a [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $role {
            $( $variant, )+
        }

        impl $role {
            /// Name of the field this role is written to.
            #[must_use]
            pub const fn field_name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($field), )+
                }
            }
        }

        #[doc = concat!("Mutable accumulation of [`", stringify!($name), "`] roles.")]
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $draft {
            pub name: String,
            $( pub $field: Vec<$crate::address::GroupAddressId>, )+
        }

        impl $draft {
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    name: name.into(),
                    ..Self::default()
                }
            }

            #[must_use]
            pub fn role(&self, role: $role) -> &[$crate::address::GroupAddressId] {
                match role {
                    $( $role::$variant => &self.$field, )+
                }
            }

            /// Append `ids` to `role`, keeping what is already there.
            pub fn assign(&mut self, role: $role, ids: &[$crate::address::GroupAddressId]) {
                let list = match role {
                    $( $role::$variant => &mut self.$field, )+
                };
                $crate::entity::extend_role(list, ids);
            }

            fn freeze(self) -> $name {
                $name {
                    name: self.name,
                    $( $field: self.$field, )+
                }
            }
        }

        impl $crate::entity::Entity for $name {
            const KIND: $crate::entity::EntityKind = $kind;

            fn name(&self) -> &str {
                &self.name
            }

            fn roles(&self) -> Vec<(&'static str, &[$crate::address::GroupAddressId])> {
                vec![ $( (stringify!($field), self.$field.as_slice()), )+ ]
            }
        }
    };
}

mod binary_sensor;
mod climate;
mod cover;
mod light;
mod number;
mod sensor;
mod switch;

pub use binary_sensor::BinarySensor;
pub use climate::{Climate, ClimateDraft, ClimateRole};
pub use cover::{Cover, CoverDraft, CoverRole};
pub use light::{Light, LightDraft, LightRole};
pub use number::Number;
pub use sensor::Sensor;
pub use switch::{Switch, SwitchDraft, SwitchRole};

/// The kinds of entity the converter produces, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Light,
    Switch,
    BinarySensor,
    Sensor,
    Number,
    Climate,
    Cover,
}

impl EntityKind {
    /// Key used for this kind in the Home Assistant `knx:` section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Switch => "switch",
            Self::BinarySensor => "binary_sensor",
            Self::Sensor => "sensor",
            Self::Number => "number",
            Self::Climate => "climate",
            Self::Cover => "cover",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common view over all entity variants.
pub trait Entity {
    const KIND: EntityKind;

    fn name(&self) -> &str;

    /// Every role field with its addresses, in declared order. Empty roles
    /// are included.
    fn roles(&self) -> Vec<(&'static str, &[GroupAddressId])>;
}

/// Append `ids` to `role`, skipping addresses already present.
pub fn extend_role(role: &mut Vec<GroupAddressId>, ids: &[GroupAddressId]) {
    for id in ids {
        if !role.contains(id) {
            role.push(id.clone());
        }
    }
}

/// Fail with [`IncompleteEntity`] when `role` is empty.
pub(crate) fn require(
    role: &[GroupAddressId],
    kind: EntityKind,
    name: &str,
    field: &'static str,
) -> Result<(), IncompleteEntity> {
    if role.is_empty() {
        return Err(IncompleteEntity {
            kind,
            name: name.to_string(),
            role: field,
        });
    }
    Ok(())
}
