//! # knxha-adapter-yaml
//!
//! Renders a [`HaConfig`](knxha_domain::ha_config::HaConfig) as the `knx:`
//! section of a Home Assistant `configuration.yaml`.
//!
//! ## Responsibilities
//! - Emit a single `knx` root key with one list per entity kind
//! - Keep `name` first and leave out empty role fields
//! - Optionally annotate every address with its range path
//!
//! ## Dependency rule
//! Depends on `knxha-domain` only. Nothing in `app` or `domain` references
//! this adapter.

pub mod error;
pub mod render;

pub use error::RenderError;
pub use render::{from_yaml, to_annotated_yaml, to_yaml};
