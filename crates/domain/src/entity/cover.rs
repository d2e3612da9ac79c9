//! Cover: blinds, shutters and awnings.

use crate::entity::{EntityKind, require};
use crate::error::IncompleteEntity;

role_entity!(
    /// Cover configuration (window blinds, shutters, jalousies).
    Cover, CoverDraft, CoverRole, EntityKind::Cover,
    {
        move_long_address => MoveLong,
        stop_address => Stop,
        position_address => Position,
    }
);

impl CoverDraft {
    /// Freeze the draft into a [`Cover`].
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteEntity`] when no up/down address was collected.
    pub fn build(self) -> Result<Cover, IncompleteEntity> {
        require(
            &self.move_long_address,
            EntityKind::Cover,
            &self.name,
            "move_long_address",
        )?;
        Ok(self.freeze())
    }
}
