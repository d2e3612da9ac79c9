//! Project source port: turns a project file into a [`Registry`].

use std::path::Path;

use knxha_domain::registry::Registry;

/// Loads a KNX project into the typed registry model.
///
/// Implementations live in adapter crates (e.g. `adapter_project_json`).
/// A load failure is the only fatal error of a conversion run.
pub trait ProjectSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse the project at `path`, using `language` for display names.
    fn load(&self, path: &Path, language: &str) -> Result<Registry, Self::Error>;
}
