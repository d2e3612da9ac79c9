//! Climate: a room thermostat / heating controller.

use crate::entity::{EntityKind, require};
use crate::error::IncompleteEntity;

role_entity!(
    /// Climate configuration.
    Climate, ClimateDraft, ClimateRole, EntityKind::Climate,
    {
        temperature_address => Temperature,
        target_temperature_address => TargetTemperature,
        target_temperature_state_address => TargetTemperatureState,
        operation_mode_address => OperationMode,
        on_off_state_address => OnOffState,
    }
);

impl ClimateDraft {
    /// Use the target temperature command addresses as state addresses.
    ///
    /// Returns `false` (and changes nothing) when there is no target
    /// temperature to alias.
    pub fn alias_target_state(&mut self) -> bool {
        if self.target_temperature_address.is_empty() {
            return false;
        }
        self.target_temperature_state_address = self.target_temperature_address.clone();
        true
    }

    /// Freeze the draft into a [`Climate`].
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteEntity`] when the current temperature or the
    /// target temperature state is missing.
    pub fn build(self) -> Result<Climate, IncompleteEntity> {
        require(
            &self.temperature_address,
            EntityKind::Climate,
            &self.name,
            "temperature_address",
        )?;
        require(
            &self.target_temperature_state_address,
            EntityKind::Climate,
            &self.name,
            "target_temperature_state_address",
        )?;
        Ok(self.freeze())
    }
}
