//! Switch and binary sensor passes over the remaining `1.xxx` addresses.

use knxha_domain::address::GroupAddress;
use knxha_domain::dpt::SubMatch;
use knxha_domain::entity::{BinarySensor, Switch, SwitchDraft, SwitchRole};

use super::{ClassifyContext, claim_widened, keep_complete};
use crate::claimed::ClaimedSet;

/// `1.xxx` sub numbers that are read-only states rather than commands.
pub const BINARY_SENSOR_SUBS: &[u16] = &[2, 3, 4, 5, 6, 11, 12, 13, 14, 18];

fn is_binary_sensor(ga: &GroupAddress) -> bool {
    ga.matches(1, SubMatch::OneOf(BINARY_SENSOR_SUBS))
}

fn device_class(ga: &GroupAddress) -> Option<&'static str> {
    match ga.dpt?.sub? {
        5 => Some("problem"),
        18 => Some("occupancy"),
        _ => None,
    }
}

fn unclaimed<'r>(
    ctx: &ClassifyContext<'r, '_>,
    claimed: &ClaimedSet,
) -> Vec<&'r GroupAddress> {
    ctx.registry
        .addresses()
        .iter()
        .filter(|ga| ga.matches(1, SubMatch::Any) && !claimed.contains(&ga.id))
        .collect()
}

/// One switch per unclaimed `1.xxx` command address, untyped sub numbers
/// included.
pub fn classify_switches(ctx: &mut ClassifyContext<'_, '_>, claimed: &mut ClaimedSet) -> Vec<Switch> {
    let mut built = Vec::new();
    for ga in unclaimed(ctx, claimed) {
        if is_binary_sensor(ga) || claimed.contains(&ga.id) {
            continue;
        }
        let widened = claim_widened(ctx, claimed, &ga.id, &ga.name);
        let mut draft = SwitchDraft::new(&ga.name);
        draft.assign(SwitchRole::Command, &widened);
        draft.assign(SwitchRole::State, &widened);
        built.push(draft.build());
    }
    keep_complete(built, &mut ctx.diagnostics)
}

/// One binary sensor per unclaimed state address.
pub fn classify_binary_sensors(
    ctx: &mut ClassifyContext<'_, '_>,
    claimed: &mut ClaimedSet,
) -> Vec<BinarySensor> {
    let mut sensors = Vec::new();
    for ga in unclaimed(ctx, claimed) {
        if !is_binary_sensor(ga) || claimed.contains(&ga.id) {
            continue;
        }
        let widened = claim_widened(ctx, claimed, &ga.id, &ga.name);
        let sensor = BinarySensor::new(&ga.name, widened);
        sensors.push(match device_class(ga) {
            Some(class) => sensor.with_device_class(class),
            None => sensor,
        });
    }
    sensors
}
