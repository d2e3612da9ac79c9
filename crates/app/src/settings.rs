//! Classifier settings: the range names and naming conventions of a project.
//!
//! Defaults follow the German range naming used by the projects this tool
//! was written for. Every field can be overridden from the `[ranges]` table
//! of the configuration file.

use serde::Deserialize;

/// Names and conventions the classifier passes rely on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Main or middle range holding every lighting address.
    pub lighting_range: String,
    /// Middle range name marking feedback/status addresses.
    pub status_range: String,
    /// Suffixes removed from light address names to find the light they
    /// belong to (first match wins).
    pub light_name_suffixes: Vec<String>,
    /// Ranges feeding the climate pass.
    pub climate: ClimateRanges,
}

/// Ranges the climate pass reads, one per role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClimateRanges {
    /// Setpoints, DPT 9.001.
    pub target_temperature: String,
    /// HVAC operation modes, DPT 20.102.
    pub operation_mode: String,
    /// Heating active feedback, DPT 1.002.
    pub on_off_state: String,
    /// Measured room temperatures, DPT 9.001.
    pub current_temperature: String,
    /// Setpoint feedback, DPT 9.001. When unset the setpoint address is
    /// reused as its own state address.
    pub target_temperature_state: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lighting_range: "Beleuchtung".to_string(),
            status_range: "Status".to_string(),
            light_name_suffixes: vec![
                " Helligkeit".to_string(),
                " Farbtemperatur".to_string(),
                " Status".to_string(),
            ],
            climate: ClimateRanges::default(),
        }
    }
}

impl Default for ClimateRanges {
    fn default() -> Self {
        Self {
            target_temperature: "Soll-Temperaturen".to_string(),
            operation_mode: "Betriebsmodi".to_string(),
            on_off_state: "Meldung Heizen".to_string(),
            current_temperature: "Ist-Temperaturen".to_string(),
            target_temperature_state: None,
        }
    }
}

impl Settings {
    /// Every configured range name, for validation.
    pub fn range_names(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.lighting_range.as_str()),
            Some(self.status_range.as_str()),
            Some(self.climate.target_temperature.as_str()),
            Some(self.climate.operation_mode.as_str()),
            Some(self.climate.on_off_state.as_str()),
            Some(self.climate.current_temperature.as_str()),
            self.climate.target_temperature_state.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}
