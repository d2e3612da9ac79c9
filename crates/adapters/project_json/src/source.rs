//! [`ProjectSource`] implementation over `xknxproject` JSON dumps.

use std::collections::HashSet;
use std::path::Path;

use knxha_app::ports::ProjectSource;
use knxha_domain::address::{GroupAddress, GroupAddressId};
use knxha_domain::range::RangeNode;
use knxha_domain::registry::Registry;

use crate::error::ProjectLoadError;
use crate::raw::{RawGroupRange, RawProject};

/// Reads a project dump from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProjectSource;

impl JsonProjectSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProjectSource for JsonProjectSource {
    type Error = ProjectLoadError;

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path, language: &str) -> Result<Registry, Self::Error> {
        let json = std::fs::read_to_string(path).map_err(|source| ProjectLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = parse_project(&json, language)?;
        tracing::debug!(
            addresses = registry.len(),
            ranges = registry.ranges().len(),
            link_groups = registry.link_groups().len(),
            "project loaded"
        );
        Ok(registry)
    }
}

/// Build a [`Registry`] from the text of a project dump.
///
/// A project exported in another language than `language` is loaded anyway.
///
/// # Errors
///
/// Returns [`ProjectLoadError`] when the text is not a project dump, when an
/// identifier is malformed, or when an address entry is filed under a
/// different key.
pub fn parse_project(json: &str, language: &str) -> Result<Registry, ProjectLoadError> {
    let raw: RawProject = serde_json::from_str(json)?;

    if let Some(found) = raw.info.language_code.as_deref()
        && found != language
    {
        tracing::warn!(expected = language, found, "project language differs");
    }

    let mut builder = Registry::builder();
    let mut known = HashSet::with_capacity(raw.group_addresses.len());
    for (key, ga) in raw.group_addresses {
        if key != ga.address {
            return Err(ProjectLoadError::InconsistentReference {
                key,
                address: ga.address,
            });
        }
        let id = parse_id(&ga.address, "group_addresses")?;
        known.insert(id.clone());
        builder = builder.address(GroupAddress::new(id, ga.name, ga.dpt));
    }

    for (_, range) in &raw.group_ranges {
        builder = builder.range(range_node(range)?);
    }

    for (object, co) in raw.communication_objects {
        let mut group = Vec::with_capacity(co.group_address_links.len());
        for (position, link) in co.group_address_links.iter().enumerate() {
            let id = parse_id(link, "communication_objects")?;
            if known.contains(&id) {
                group.push(id);
            } else if position == 0 {
                // The first link is the sending address.
                tracing::warn!(
                    %object,
                    address = %id,
                    "communication object sends on unknown group address, links ignored"
                );
                group.clear();
                break;
            } else {
                tracing::warn!(%object, address = %id, "communication object links unknown group address");
            }
        }
        if !group.is_empty() {
            builder = builder.link_group(group);
        }
    }

    Ok(builder.build()?)
}

fn range_node(raw: &RawGroupRange) -> Result<RangeNode, ProjectLoadError> {
    let mut node = RangeNode::new(raw.name.as_str());
    for address in &raw.group_addresses {
        node = node.with_address(parse_id(address, "group_ranges")?);
    }
    for (_, child) in &raw.group_ranges {
        node = node.with_range(range_node(child)?);
    }
    Ok(node)
}

fn parse_id(address: &str, context: &'static str) -> Result<GroupAddressId, ProjectLoadError> {
    address
        .parse()
        .map_err(|source| ProjectLoadError::InvalidAddress {
            address: address.to_string(),
            context,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use knxha_domain::dpt::Dpt;
    use std::io::Write;

    const PROJECT: &str = r#"{
        "info": {"name": "Haus", "language_code": "de-DE"},
        "communication_objects": {
            "1/1/1/O-1_R-1": {"name": "Schalten", "group_address_links": ["5/0/1", "5/0/2"]},
            "1/1/1/O-2_R-2": {"name": "Status", "group_address_links": ["5/5/1"]}
        },
        "group_addresses": {
            "5/0/1": {"name": "Flur", "identifier": "GA-1", "address": "5/0/1", "dpt": {"main": 1, "sub": 1}},
            "5/0/2": {"name": "Flur Zentral", "identifier": "GA-2", "address": "5/0/2", "dpt": {"main": 1, "sub": 1}},
            "5/5/1": {"name": "Flur Status", "identifier": "GA-3", "address": "5/5/1", "dpt": null}
        },
        "group_ranges": {
            "5/0/0-5/7/255": {
                "name": "Beleuchtung",
                "group_addresses": [],
                "group_ranges": {
                    "5/0/0-5/0/255": {"name": "Schalten", "group_addresses": ["5/0/1", "5/0/2"], "group_ranges": {}},
                    "5/5/0-5/5/255": {"name": "Status", "group_addresses": ["5/5/1"], "group_ranges": {}}
                }
            }
        }
    }"#;

    fn id(s: &str) -> GroupAddressId {
        s.parse().unwrap()
    }

    #[test]
    fn should_map_dump_into_registry() {
        let registry = parse_project(PROJECT, "de-DE").unwrap();

        assert_eq!(registry.len(), 3);
        let flur = registry.get(&id("5/0/1")).unwrap();
        assert_eq!(flur.name, "Flur");
        assert_eq!(flur.dpt, Some(Dpt::new(1, 1)));
        assert_eq!(registry.get(&id("5/5/1")).unwrap().dpt, None);

        let main = &registry.ranges()[0];
        assert_eq!(main.name, "Beleuchtung");
        let subs: Vec<&str> = main.ranges.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(subs, ["Schalten", "Status"]);
        assert_eq!(main.ranges[0].addresses, [id("5/0/1"), id("5/0/2")]);

        assert_eq!(
            registry.link_groups(),
            [vec![id("5/0/1"), id("5/0/2")], vec![id("5/5/1")]]
        );
    }

    #[test]
    fn should_load_despite_language_mismatch() {
        assert!(parse_project(PROJECT, "en-US").is_ok());
    }

    #[test]
    fn should_reject_malformed_json() {
        assert!(matches!(
            parse_project("{not json", "de-DE"),
            Err(ProjectLoadError::Parse(_))
        ));
    }

    #[test]
    fn should_reject_invalid_range_member() {
        let json = r#"{"group_ranges": {"0": {"name": "X", "group_addresses": ["5/a/1"]}}}"#;
        let err = parse_project(json, "de-DE").unwrap_err();
        assert!(matches!(
            err,
            ProjectLoadError::InvalidAddress { ref address, context: "group_ranges", .. } if address == "5/a/1"
        ));
    }

    #[test]
    fn should_reject_entry_filed_under_other_key() {
        let json = r#"{"group_addresses": {"1/0/1": {"name": "X", "address": "1/0/2", "dpt": null}}}"#;
        let err = parse_project(json, "de-DE").unwrap_err();
        assert!(matches!(err, ProjectLoadError::InconsistentReference { .. }));
    }

    #[test]
    fn should_drop_links_to_unknown_addresses() {
        let json = r#"{
            "communication_objects": {"co": {"group_address_links": ["9/9/9"]}},
            "group_addresses": {}
        }"#;
        let registry = parse_project(json, "de-DE").unwrap();
        assert!(registry.link_groups().is_empty());
    }

    #[test]
    fn should_drop_group_whose_sending_address_is_unknown() {
        let json = r#"{
            "communication_objects": {
                "co-1": {"group_address_links": ["9/9/9", "1/0/1", "1/0/2"]},
                "co-2": {"group_address_links": ["1/0/1", "9/9/9", "1/0/2"]}
            },
            "group_addresses": {
                "1/0/1": {"name": "A", "address": "1/0/1", "dpt": null},
                "1/0/2": {"name": "B", "address": "1/0/2", "dpt": null}
            }
        }"#;
        let registry = parse_project(json, "de-DE").unwrap();
        assert_eq!(registry.link_groups(), [vec![id("1/0/1"), id("1/0/2")]]);
    }

    #[test]
    fn should_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PROJECT.as_bytes()).unwrap();

        let registry = JsonProjectSource::new().load(file.path(), "de-DE").unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn should_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = JsonProjectSource::new().load(&path, "de-DE").unwrap_err();
        assert!(matches!(err, ProjectLoadError::Io { path: ref p, .. } if *p == path));
    }
}
