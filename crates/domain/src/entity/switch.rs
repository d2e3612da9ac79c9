//! Switch: a plain on/off actuator channel.

use crate::entity::{EntityKind, require};
use crate::error::IncompleteEntity;

role_entity!(
    /// Switch configuration.
    Switch, SwitchDraft, SwitchRole, EntityKind::Switch,
    {
        address => Command,
        state_address => State,
    }
);

impl SwitchDraft {
    /// Freeze the draft into a [`Switch`].
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteEntity`] when no command address was collected.
    pub fn build(self) -> Result<Switch, IncompleteEntity> {
        require(&self.address, EntityKind::Switch, &self.name, "address")?;
        Ok(self.freeze())
    }
}
