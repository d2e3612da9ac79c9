//! Light pass: switchable, dimmable and colour lights in the lighting range.

use knxha_domain::address::GroupAddress;
use knxha_domain::dpt::SubMatch;
use knxha_domain::entity::{Light, LightDraft, LightRole};

use super::{ClassifyContext, Drafts, claim_widened, keep_complete};
use crate::claimed::ClaimedSet;
use crate::diagnostics::Diagnostic;
use crate::range_index::RangeIndex;

/// Type code → role, with the status variant for gated roles.
const LIGHT_ROLES: &[(u16, u16, LightRole, Option<LightRole>)] = &[
    (1, 1, LightRole::Switch, None),
    (1, 11, LightRole::SwitchState, None),
    (5, 1, LightRole::Brightness, Some(LightRole::BrightnessState)),
    (7, 600, LightRole::ColorTemperature, Some(LightRole::ColorTemperatureState)),
    (251, 600, LightRole::Rgbw, Some(LightRole::RgbwState)),
];

/// Draft key of a light address: its name without the first matching suffix.
#[must_use]
pub fn light_key<'a>(name: &'a str, suffixes: &[String]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix.as_str()))
        .unwrap_or(name)
}

fn light_role(ga: &GroupAddress, index: &RangeIndex<'_>, status_range: &str) -> Option<LightRole> {
    LIGHT_ROLES
        .iter()
        .find(|(main, sub, ..)| ga.matches(*main, SubMatch::Exact(*sub)))
        .map(|&(_, _, command, status)| match status {
            Some(status) if index.range_path_contains(&ga.id, status_range) => status,
            _ => command,
        })
}

/// Group the lighting range's addresses into lights. Lights without a
/// switch address are dropped.
pub fn classify_lights(ctx: &mut ClassifyContext<'_, '_>, claimed: &mut ClaimedSet) -> Vec<Light> {
    let settings = ctx.settings;
    let registry = ctx.registry;
    let ids = ctx
        .index
        .addresses_under(&settings.lighting_range, &mut ctx.diagnostics);
    let mut drafts: Drafts<LightDraft> = Drafts::default();

    for id in ids {
        if claimed.contains(&id) {
            continue;
        }
        let Some(ga) = registry.get(&id) else {
            ctx.diagnostics.push(Diagnostic::UnknownAddress {
                range: settings.lighting_range.clone(),
                address: id,
            });
            continue;
        };
        let Some(role) = light_role(ga, &ctx.index, &settings.status_range) else {
            tracing::debug!(address = %id, dpt = ?ga.dpt, "no light role for address");
            continue;
        };
        let key = light_key(&ga.name, &settings.light_name_suffixes);
        let widened = claim_widened(ctx, claimed, &id, key);
        drafts
            .entry(key, || LightDraft::new(key))
            .assign(role, &widened);
    }

    keep_complete(drafts.into_values().map(LightDraft::build), &mut ctx.diagnostics)
}
