//! Light: a switchable (optionally dimmable, tunable, colored) light.

use crate::entity::{EntityKind, require};
use crate::error::IncompleteEntity;

role_entity!(
    /// Light configuration.
    Light, LightDraft, LightRole, EntityKind::Light,
    {
        address => Switch,
        state_address => SwitchState,
        brightness_address => Brightness,
        brightness_state_address => BrightnessState,
        color_temperature_address => ColorTemperature,
        color_temperature_state_address => ColorTemperatureState,
        rgbw_address => Rgbw,
        rgbw_state_address => RgbwState,
    }
);

impl LightDraft {
    /// Freeze the draft into a [`Light`].
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteEntity`] when no on/off command address was
    /// collected.
    pub fn build(self) -> Result<Light, IncompleteEntity> {
        require(&self.address, EntityKind::Light, &self.name, "address")?;
        Ok(self.freeze())
    }
}
