//! # knxha-domain
//!
//! Pure domain model for the KNX → Home Assistant converter.
//!
//! ## Responsibilities
//! - Foundational types: group address identifiers, datapoint types (DPT), error conventions
//! - Define the **Registry** (group addresses, the range tree, communication-object link groups)
//! - Define **Entities** (lights, switches, binary sensors, sensors, numbers, climates, covers)
//!   together with the drafts they are accumulated in before validation
//! - Define the **HaConfig** aggregate handed to serializers
//! - Hold the static DPT → sensor type table
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Loading projects is expressed as a port trait in the `app` crate.

pub mod error;

pub mod address;
pub mod dpt;
pub mod entity;
pub mod ha_config;
pub mod range;
pub mod registry;
pub mod sensor_types;
