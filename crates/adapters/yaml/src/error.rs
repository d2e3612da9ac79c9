//! YAML adapter error type wrapping `serde_yml` errors.

/// Errors raised while rendering or reading back a configuration.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The configuration could not be written as YAML.
    #[error("failed to serialize configuration")]
    Serialize(#[source] serde_yml::Error),

    /// The text is not a `knx:` configuration.
    #[error("failed to parse configuration")]
    Deserialize(#[source] serde_yml::Error),
}
