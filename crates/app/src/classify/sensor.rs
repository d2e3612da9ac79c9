//! Sensor pass: every remaining typed address with a known value type.

use knxha_domain::entity::{Number, Sensor};
use knxha_domain::sensor_types::{self, TargetKind};

use super::{ClassifyContext, claim_widened};
use crate::claimed::ClaimedSet;

/// Look every unclaimed typed address up in the sensor table. Misses stay
/// unclaimed.
pub fn classify_sensors(
    ctx: &mut ClassifyContext<'_, '_>,
    claimed: &mut ClaimedSet,
) -> (Vec<Sensor>, Vec<Number>) {
    let mut sensors = Vec::new();
    let mut numbers = Vec::new();

    let registry = ctx.registry;
    for ga in registry.addresses() {
        if claimed.contains(&ga.id) {
            continue;
        }
        let Some(entry) = ga.dpt.as_ref().and_then(sensor_types::lookup) else {
            continue;
        };
        let widened = claim_widened(ctx, claimed, &ga.id, &ga.name);
        match entry.target {
            TargetKind::Sensor => sensors.push(Sensor {
                name: ga.name.clone(),
                state_address: widened,
                value_type: entry.value_type.to_string(),
                device_class: entry.device_class.map(str::to_string),
            }),
            TargetKind::Number => numbers.push(Number::scene(&ga.name, entry.value_type, widened)),
        }
    }

    (sensors, numbers)
}
