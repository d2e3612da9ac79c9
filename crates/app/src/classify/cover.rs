//! Cover pass: blinds and shutters, keyed by the name of their move command.

use knxha_domain::dpt::SubMatch;
use knxha_domain::entity::{Cover, CoverDraft, CoverRole};

use super::{ClassifyContext, Drafts, claim_widened, keep_complete};
use crate::claimed::ClaimedSet;

/// Cover key of an address name: everything before the first `(`, trimmed.
///
/// `Rollladen Küche (Auf/Ab)` and `Rollladen Küche (Stop)` share the key
/// `Rollladen Küche`.
#[must_use]
pub fn cover_key(name: &str) -> &str {
    name.split_once('(').map_or(name, |(head, _)| head).trim()
}

/// Every `1.008` address opens a cover; `1.007` and `5.001` addresses with
/// the same key add the stop and position roles.
pub fn classify_covers(ctx: &mut ClassifyContext<'_, '_>, claimed: &mut ClaimedSet) -> Vec<Cover> {
    let registry = ctx.registry;
    let mut drafts: Drafts<CoverDraft> = Drafts::default();

    for ga in registry.addresses() {
        if claimed.contains(&ga.id) || !ga.matches(1, SubMatch::Exact(8)) {
            continue;
        }
        let key = cover_key(&ga.name);
        let widened = claim_widened(ctx, claimed, &ga.id, key);
        drafts
            .entry(key, || CoverDraft::new(key))
            .assign(CoverRole::MoveLong, &widened);
    }

    for ga in registry.addresses() {
        if claimed.contains(&ga.id) {
            continue;
        }
        let role = if ga.matches(1, SubMatch::Exact(7)) {
            CoverRole::Stop
        } else if ga.matches(5, SubMatch::Exact(1)) {
            CoverRole::Position
        } else {
            continue;
        };
        let key = cover_key(&ga.name);
        let Some(draft) = drafts.get_mut(key) else {
            continue;
        };
        let widened = claim_widened(ctx, claimed, &ga.id, key);
        draft.assign(role, &widened);
    }

    keep_complete(drafts.into_values().map(CoverDraft::build), &mut ctx.diagnostics)
}
