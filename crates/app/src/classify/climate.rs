//! Climate pass: room thermostats assembled from the heating ranges.

use knxha_domain::dpt::{Dpt, SubMatch};
use knxha_domain::entity::{Climate, ClimateDraft, ClimateRole};

use super::{ClassifyContext, Drafts, claim_widened, keep_complete};
use crate::claimed::ClaimedSet;
use crate::diagnostics::Diagnostic;

const TEMPERATURE: Dpt = Dpt::new(9, 1);
const HVAC_MODE: Dpt = Dpt::new(20, 102);
const HEATING_ACTIVE: Dpt = Dpt::new(1, 2);

/// Collect climate roles from the configured ranges, keyed by address name.
///
/// A climate needs a current temperature. Without setpoint feedback the
/// setpoint address doubles as state address; without either the climate
/// is dropped.
pub fn classify_climates(
    ctx: &mut ClassifyContext<'_, '_>,
    claimed: &mut ClaimedSet,
) -> Vec<Climate> {
    let settings = ctx.settings;
    let registry = ctx.registry;
    let ranges = &settings.climate;
    let mut sources = vec![
        (&ranges.target_temperature, ClimateRole::TargetTemperature, TEMPERATURE),
        (&ranges.operation_mode, ClimateRole::OperationMode, HVAC_MODE),
        (&ranges.on_off_state, ClimateRole::OnOffState, HEATING_ACTIVE),
        (&ranges.current_temperature, ClimateRole::Temperature, TEMPERATURE),
    ];
    if let Some(state) = &ranges.target_temperature_state {
        sources.push((state, ClimateRole::TargetTemperatureState, TEMPERATURE));
    }

    let mut drafts: Drafts<ClimateDraft> = Drafts::default();
    for (range, role, expected) in sources {
        for id in ctx.index.addresses_under(range, &mut ctx.diagnostics) {
            if claimed.contains(&id) {
                continue;
            }
            let Some(ga) = registry.get(&id) else {
                ctx.diagnostics.push(Diagnostic::UnknownAddress {
                    range: range.clone(),
                    address: id,
                });
                continue;
            };
            let sub = expected.sub.map_or(SubMatch::Any, SubMatch::Exact);
            if !ga.matches(expected.main, sub) {
                ctx.diagnostics.push(Diagnostic::TypeMismatch {
                    address: id,
                    name: ga.name.clone(),
                    role: role.field_name(),
                    expected,
                    actual: ga.dpt,
                });
                continue;
            }
            let widened = claim_widened(ctx, claimed, &id, &ga.name);
            drafts
                .entry(&ga.name, || ClimateDraft::new(&ga.name))
                .assign(role, &widened);
        }
    }

    let mut built = Vec::new();
    for mut draft in drafts.into_values() {
        if !draft.temperature_address.is_empty()
            && draft.target_temperature_state_address.is_empty()
            && draft.alias_target_state()
        {
            ctx.diagnostics.push(Diagnostic::TargetStateAliased {
                name: draft.name.clone(),
            });
        }
        built.push(draft.build());
    }
    keep_complete(built, &mut ctx.diagnostics)
}
