//! Serde model of the parts of the dump the converter reads.
//!
//! Object members are collected into `Vec<(key, value)>` so that project
//! order survives deserialization. Unknown fields are ignored.

use std::fmt;
use std::marker::PhantomData;

use knxha_domain::dpt::Dpt;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub(crate) struct RawProject {
    #[serde(default)]
    pub info: RawInfo,
    #[serde(default, deserialize_with = "ordered")]
    pub communication_objects: Vec<(String, RawCommunicationObject)>,
    #[serde(default, deserialize_with = "ordered")]
    pub group_addresses: Vec<(String, RawGroupAddress)>,
    #[serde(default, deserialize_with = "ordered")]
    pub group_ranges: Vec<(String, RawGroupRange)>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawInfo {
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCommunicationObject {
    #[serde(default)]
    pub group_address_links: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGroupAddress {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub dpt: Option<Dpt>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGroupRange {
    pub name: String,
    #[serde(default)]
    pub group_addresses: Vec<String>,
    #[serde(default, deserialize_with = "ordered")]
    pub group_ranges: Vec<(String, RawGroupRange)>,
}

/// Deserialize a JSON object into its members, in document order.
fn ordered<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(member) = map.next_entry()? {
                members.push(member);
            }
            Ok(members)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}
