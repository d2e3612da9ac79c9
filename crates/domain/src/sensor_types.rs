//! Static DPT → sensor type table.
//!
//! Maps every datapoint type the generic sensor pass understands to the
//! value type Home Assistant's KNX integration expects, an optional device
//! class, and the kind of entity to create.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::dpt::Dpt;

/// Entity kind produced for a table hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Sensor,
    Number,
}

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorType {
    pub main: u16,
    pub sub: u16,
    pub value_type: &'static str,
    pub device_class: Option<&'static str>,
    pub target: TargetKind,
}

const fn sensor(
    main: u16,
    sub: u16,
    value_type: &'static str,
    device_class: Option<&'static str>,
) -> SensorType {
    SensorType {
        main,
        sub,
        value_type,
        device_class,
        target: TargetKind::Sensor,
    }
}

const fn number(main: u16, sub: u16, value_type: &'static str) -> SensorType {
    SensorType {
        main,
        sub,
        value_type,
        device_class: None,
        target: TargetKind::Number,
    }
}

const TEMPERATURE: Option<&str> = Some("temperature");
const ILLUMINANCE: Option<&str> = Some("illuminance");
const DURATION: Option<&str> = Some("duration");
const CURRENT: Option<&str> = Some("current");
const VOLTAGE: Option<&str> = Some("voltage");
const POWER: Option<&str> = Some("power");
const ENERGY: Option<&str> = Some("energy");
const PRESSURE: Option<&str> = Some("pressure");
const DISTANCE: Option<&str> = Some("distance");
const VOLUME: Option<&str> = Some("volume");
const WIND_SPEED: Option<&str> = Some("wind_speed");

/// Every known datapoint type, grouped by main number.
pub const SENSOR_TYPES: &[SensorType] = &[
    // 5.xxx: 8 bit unsigned
    sensor(5, 1, "percent", None),
    sensor(5, 3, "angle", None),
    sensor(5, 4, "percentU8", None),
    sensor(5, 5, "decimal_factor", None),
    sensor(5, 6, "tariff", None),
    sensor(5, 10, "pulse", None),
    // 6.xxx: 8 bit signed
    sensor(6, 1, "percentV8", None),
    sensor(6, 10, "counter_pulses", None),
    // 7.xxx: 16 bit unsigned
    sensor(7, 1, "pulse_2byte", None),
    sensor(7, 2, "time_period_msec", DURATION),
    sensor(7, 3, "time_period_10msec", DURATION),
    sensor(7, 4, "time_period_100msec", DURATION),
    sensor(7, 5, "time_period_sec", DURATION),
    sensor(7, 6, "time_period_min", DURATION),
    sensor(7, 7, "time_period_hrs", DURATION),
    sensor(7, 11, "length_mm", DISTANCE),
    sensor(7, 12, "current", CURRENT),
    sensor(7, 13, "brightness", ILLUMINANCE),
    sensor(7, 600, "color_temperature", None),
    // 8.xxx: 16 bit signed
    sensor(8, 1, "pulse_2byte_signed", None),
    sensor(8, 2, "delta_time_ms", DURATION),
    sensor(8, 3, "delta_time_10ms", DURATION),
    sensor(8, 4, "delta_time_100ms", DURATION),
    sensor(8, 5, "delta_time_sec", DURATION),
    sensor(8, 6, "delta_time_min", DURATION),
    sensor(8, 7, "delta_time_hrs", DURATION),
    sensor(8, 10, "percentV16", None),
    sensor(8, 11, "rotation_angle", None),
    sensor(8, 12, "length_m", DISTANCE),
    // 9.xxx: 16 bit float
    sensor(9, 1, "temperature", TEMPERATURE),
    sensor(9, 2, "temperature_difference_2byte", None),
    sensor(9, 3, "temperature_a", None),
    sensor(9, 4, "illuminance", ILLUMINANCE),
    sensor(9, 5, "wind_speed_ms", WIND_SPEED),
    sensor(9, 6, "pressure_2byte", PRESSURE),
    sensor(9, 7, "humidity", Some("humidity")),
    sensor(9, 8, "ppm", Some("carbon_dioxide")),
    sensor(9, 9, "air_flow", None),
    sensor(9, 10, "time_1", DURATION),
    sensor(9, 11, "time_2", DURATION),
    sensor(9, 20, "voltage", VOLTAGE),
    sensor(9, 21, "curr", CURRENT),
    sensor(9, 22, "power_density", None),
    sensor(9, 23, "kelvin_per_percent", None),
    sensor(9, 24, "power_2byte", POWER),
    sensor(9, 25, "volume_flow", Some("volume_flow_rate")),
    sensor(9, 26, "rain_amount", Some("precipitation")),
    sensor(9, 27, "temperature_f", TEMPERATURE),
    sensor(9, 28, "wind_speed_kmh", WIND_SPEED),
    sensor(9, 29, "absolute_humidity", None),
    sensor(9, 30, "concentration_ugm3", None),
    // 12.xxx: 32 bit unsigned
    sensor(12, 1, "pulse_4_ucount", None),
    sensor(12, 100, "long_time_period_sec", DURATION),
    sensor(12, 101, "long_time_period_min", DURATION),
    sensor(12, 102, "long_time_period_hrs", DURATION),
    sensor(12, 1200, "volume_liquid_litre", VOLUME),
    sensor(12, 1201, "volume_m3", VOLUME),
    // 13.xxx: 32 bit signed
    sensor(13, 1, "pulse_4byte", None),
    sensor(13, 2, "flow_rate_m3h", Some("volume_flow_rate")),
    sensor(13, 10, "active_energy", ENERGY),
    sensor(13, 11, "apparant_energy", None),
    sensor(13, 12, "reactive_energy", None),
    sensor(13, 13, "active_energy_kwh", ENERGY),
    sensor(13, 14, "apparant_energy_kvah", None),
    sensor(13, 15, "reactive_energy_kvarh", None),
    sensor(13, 16, "active_energy_mwh", ENERGY),
    sensor(13, 100, "long_delta_timesec", DURATION),
    // 14.xxx: 32 bit float
    sensor(14, 0, "acceleration", None),
    sensor(14, 1, "acceleration_angular", None),
    sensor(14, 2, "activation_energy", None),
    sensor(14, 3, "activity", None),
    sensor(14, 4, "mol", None),
    sensor(14, 5, "amplitude", None),
    sensor(14, 6, "angle_rad", None),
    sensor(14, 7, "angle_deg", None),
    sensor(14, 8, "angular_momentum", None),
    sensor(14, 9, "angular_velocity", None),
    sensor(14, 10, "area", None),
    sensor(14, 11, "capacitance", None),
    sensor(14, 12, "charge_density_surface", None),
    sensor(14, 13, "charge_density_volume", None),
    sensor(14, 14, "compressibility", None),
    sensor(14, 15, "conductance", None),
    sensor(14, 16, "electrical_conductivity", None),
    sensor(14, 17, "density", None),
    sensor(14, 18, "electric_charge", None),
    sensor(14, 19, "electric_current", CURRENT),
    sensor(14, 20, "electric_current_density", None),
    sensor(14, 21, "electric_dipole_moment", None),
    sensor(14, 22, "electric_displacement", None),
    sensor(14, 23, "electric_field_strength", None),
    sensor(14, 24, "electric_flux", None),
    sensor(14, 25, "electric_flux_density", None),
    sensor(14, 26, "electric_polarization", None),
    sensor(14, 27, "electric_potential", VOLTAGE),
    sensor(14, 28, "electric_potential_difference", VOLTAGE),
    sensor(14, 29, "electromagnetic_moment", None),
    sensor(14, 30, "electromotive_force", None),
    sensor(14, 31, "energy", ENERGY),
    sensor(14, 32, "force", None),
    sensor(14, 33, "frequency", Some("frequency")),
    sensor(14, 34, "angular_frequency", None),
    sensor(14, 35, "heatcapacity", None),
    sensor(14, 36, "heatflowrate", None),
    sensor(14, 37, "heat_quantity", None),
    sensor(14, 38, "impedance", None),
    sensor(14, 39, "length", DISTANCE),
    sensor(14, 40, "light_quantity", None),
    sensor(14, 41, "luminance", None),
    sensor(14, 42, "luminous_flux", None),
    sensor(14, 43, "luminous_intensity", None),
    sensor(14, 44, "magnetic_field_strength", None),
    sensor(14, 45, "magnetic_flux", None),
    sensor(14, 46, "magnetic_flux_density", None),
    sensor(14, 47, "magnetic_moment", None),
    sensor(14, 48, "magnetic_polarization", None),
    sensor(14, 49, "magnetization", None),
    sensor(14, 50, "magnetomotive_force", None),
    sensor(14, 51, "mass", Some("weight")),
    sensor(14, 52, "mass_flux", None),
    sensor(14, 53, "momentum", None),
    sensor(14, 54, "phaseanglerad", None),
    sensor(14, 55, "phaseangledeg", None),
    sensor(14, 56, "power", POWER),
    sensor(14, 57, "powerfactor", Some("power_factor")),
    sensor(14, 58, "pressure", PRESSURE),
    sensor(14, 59, "reactance", None),
    sensor(14, 60, "resistance", None),
    sensor(14, 61, "resistivity", None),
    sensor(14, 62, "self_inductance", None),
    sensor(14, 63, "solid_angle", None),
    sensor(14, 64, "sound_intensity", None),
    sensor(14, 65, "speed", Some("speed")),
    sensor(14, 66, "stress", None),
    sensor(14, 67, "surface_tension", None),
    sensor(14, 68, "common_temperature", TEMPERATURE),
    sensor(14, 69, "absolute_temperature", TEMPERATURE),
    sensor(14, 70, "temperature_difference", None),
    sensor(14, 71, "thermal_capacity", None),
    sensor(14, 72, "thermal_conductivity", None),
    sensor(14, 73, "thermoelectric_power", None),
    sensor(14, 74, "time_seconds", DURATION),
    sensor(14, 75, "torque", None),
    sensor(14, 76, "volume", VOLUME),
    sensor(14, 77, "volume_flux", None),
    sensor(14, 78, "weight", None),
    sensor(14, 79, "work", ENERGY),
    sensor(14, 80, "apparent_power", Some("apparent_power")),
    // 16.xxx: 14 byte strings
    sensor(16, 0, "string", None),
    sensor(16, 1, "latin_1", None),
    // 17.xxx: scene number
    number(17, 1, "scene_number"),
    // 29.xxx: 64 bit signed energy counters
    sensor(29, 10, "active_energy_8byte", ENERGY),
    sensor(29, 11, "apparant_energy_8byte", None),
    sensor(29, 12, "reactive_energy_8byte", None),
];

static INDEX: LazyLock<HashMap<(u16, u16), &'static SensorType>> = LazyLock::new(|| {
    SENSOR_TYPES
        .iter()
        .map(|entry| ((entry.main, entry.sub), entry))
        .collect()
});

/// Look up the table row for `dpt`.
///
/// Type codes without a sub number never hit.
#[must_use]
pub fn lookup(dpt: &Dpt) -> Option<&'static SensorType> {
    let sub = dpt.sub?;
    INDEX.get(&(dpt.main, sub)).copied()
}
