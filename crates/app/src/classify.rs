//! Classifier passes: turn registry addresses into entity descriptors.
//!
//! Every pass takes the shared [`ClassifyContext`] and the run's
//! [`ClaimedSet`]. Passes skip addresses an earlier pass claimed and claim
//! every address they attach to an entity, listener addresses included.
//! [`ConversionService`](crate::services::conversion_service::ConversionService)
//! runs them in priority order.

use std::collections::HashMap;

use knxha_domain::address::GroupAddressId;
use knxha_domain::error::IncompleteEntity;
use knxha_domain::registry::Registry;

use crate::claimed::ClaimedSet;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::listener::ListenerLinker;
use crate::range_index::RangeIndex;
use crate::settings::Settings;

mod binary;
mod climate;
mod cover;
mod light;
mod sensor;
#[cfg(test)]
mod testing;

pub use binary::{BINARY_SENSOR_SUBS, classify_binary_sensors, classify_switches};
pub use climate::classify_climates;
pub use cover::{classify_covers, cover_key};
pub use light::{classify_lights, light_key};
pub use sensor::classify_sensors;

/// Read-mostly state shared by all passes of one run.
#[derive(Debug)]
pub struct ClassifyContext<'r, 's> {
    pub registry: &'r Registry,
    pub settings: &'s Settings,
    pub index: RangeIndex<'r>,
    pub linker: ListenerLinker,
    pub diagnostics: Diagnostics,
}

impl<'r, 's> ClassifyContext<'r, 's> {
    #[must_use]
    pub fn new(registry: &'r Registry, settings: &'s Settings) -> Self {
        Self {
            registry,
            settings,
            index: RangeIndex::new(registry),
            linker: ListenerLinker::new(registry),
            diagnostics: Diagnostics::default(),
        }
    }
}

/// Drafts keyed by name, kept in first-seen order.
#[derive(Debug)]
struct Drafts<D> {
    drafts: Vec<D>,
    keys: HashMap<String, usize>,
}

impl<D> Default for Drafts<D> {
    fn default() -> Self {
        Self {
            drafts: Vec::new(),
            keys: HashMap::new(),
        }
    }
}

impl<D> Drafts<D> {
    /// The draft for `key`, created with `make` on first use.
    fn entry(&mut self, key: &str, make: impl FnOnce() -> D) -> &mut D {
        let idx = match self.keys.get(key) {
            Some(&idx) => idx,
            None => {
                self.drafts.push(make());
                let idx = self.drafts.len() - 1;
                self.keys.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.drafts[idx]
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut D> {
        let idx = *self.keys.get(key)?;
        self.drafts.get_mut(idx)
    }

    fn into_values(self) -> std::vec::IntoIter<D> {
        self.drafts.into_iter()
    }
}

/// `id` followed by its listeners, minus listeners another entity already
/// claimed. Claims and returns the rest. `id` itself must be unclaimed.
fn claim_widened(
    ctx: &mut ClassifyContext<'_, '_>,
    claimed: &mut ClaimedSet,
    id: &GroupAddressId,
    name: &str,
) -> Vec<GroupAddressId> {
    let mut widened = ctx.linker.expand(id);
    widened.retain(|address| {
        if address == id || !claimed.contains(address) {
            return true;
        }
        ctx.diagnostics.push(Diagnostic::AlreadyClaimed {
            address: address.clone(),
            name: name.to_string(),
        });
        false
    });
    claimed.claim_all(&widened);
    widened
}

/// Keep the entities that built, record a diagnostic for each one dropped.
fn keep_complete<E>(
    built: impl IntoIterator<Item = Result<E, IncompleteEntity>>,
    diagnostics: &mut Diagnostics,
) -> Vec<E> {
    built
        .into_iter()
        .filter_map(|result| match result {
            Ok(entity) => Some(entity),
            Err(err) => {
                diagnostics.push(Diagnostic::Dropped(err));
                None
            }
        })
        .collect()
}
