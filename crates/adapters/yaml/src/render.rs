//! Ordered YAML rendering with optional provenance comments.

use knxha_domain::address::GroupAddressId;
use knxha_domain::ha_config::HaConfig;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

#[derive(Serialize)]
struct DocumentRef<'a> {
    knx: &'a HaConfig,
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    knx: HaConfig,
}

/// Render `config` under a `knx` root key.
///
/// Kinds follow [`HaConfig`]'s field order, entities list `name` first and
/// then their non-empty role fields in declared order.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] if the YAML emitter fails.
pub fn to_yaml(config: &HaConfig) -> Result<String, RenderError> {
    serde_yml::to_string(&DocumentRef { knx: config }).map_err(RenderError::Serialize)
}

/// Like [`to_yaml`], with a `# <path>` comment after every address.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] if the YAML emitter fails.
pub fn to_annotated_yaml(
    config: &HaConfig,
    path_of: impl Fn(&GroupAddressId) -> String,
) -> Result<String, RenderError> {
    let yaml = to_yaml(config)?;
    let mut out = String::with_capacity(yaml.len() * 2);
    for line in yaml.lines() {
        out.push_str(line);
        if let Some(id) = address_item(line) {
            out.push_str("  # ");
            out.push_str(&path_of(&id));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Read a configuration back from YAML. Comments are ignored.
///
/// # Errors
///
/// Returns [`RenderError::Deserialize`] if `yaml` is not a `knx:` document.
pub fn from_yaml(yaml: &str) -> Result<HaConfig, RenderError> {
    serde_yml::from_str::<Document>(yaml)
        .map(|doc| doc.knx)
        .map_err(RenderError::Deserialize)
}

/// The address of a `- <address>` sequence item, if `line` is one.
fn address_item(line: &str) -> Option<GroupAddressId> {
    let item = line.trim_start().strip_prefix("- ")?.trim_end();
    let unquoted = item
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| item.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(item);
    unquoted.parse().ok()
}
