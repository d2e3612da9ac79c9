//! # knxha-adapter-project-json
//!
//! Reads the JSON dump `xknxproject` produces from a `.knxproj` archive.
//!
//! ## Responsibilities
//! - Implement the [`ProjectSource`](knxha_app::ports::ProjectSource) port
//! - Keep the project's key order for addresses, ranges and links
//! - Validate identifiers once, at the boundary, and map the dump into the
//!   typed [`Registry`](knxha_domain::registry::Registry)
//!
//! ## Dependency rule
//! Depends on `knxha-app` (for the port trait) and `knxha-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
mod raw;
pub mod source;

pub use error::ProjectLoadError;
pub use source::{JsonProjectSource, parse_project};
