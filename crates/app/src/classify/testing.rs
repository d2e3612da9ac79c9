//! Registry fixtures shared by the classifier tests.

use knxha_domain::address::{GroupAddress, GroupAddressId};
use knxha_domain::dpt::Dpt;

pub fn id(s: &str) -> GroupAddressId {
    s.parse().unwrap()
}

pub fn ids(list: &[&str]) -> Vec<GroupAddressId> {
    list.iter().map(|s| id(s)).collect()
}

pub fn ga(address: &str, name: &str, dpt: (u16, u16)) -> GroupAddress {
    GroupAddress::new(id(address), name, Some(Dpt::new(dpt.0, dpt.1)))
}

pub fn untyped(address: &str, name: &str) -> GroupAddress {
    GroupAddress::new(id(address), name, None)
}
