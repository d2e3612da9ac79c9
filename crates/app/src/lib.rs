//! # knxha-app
//!
//! Application layer: the classification engine and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ProjectSource`: load a project into a [`Registry`](knxha_domain::registry::Registry)
//! - Resolve ranges and paths (`RangeIndex`) and listener links (`ListenerLinker`)
//! - Run the classifier passes in priority order, sharing one `ClaimedSet`
//! - Collect diagnostics for every skipped, dropped or patched address/entity
//! - Report addresses left unclaimed after a run
//!
//! ## Dependency rule
//! Depends on `knxha-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod classify;
pub mod claimed;
pub mod coverage;
pub mod diagnostics;
pub mod listener;
pub mod ports;
pub mod range_index;
pub mod services;
pub mod settings;
