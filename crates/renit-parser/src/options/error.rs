use thiserror::Error;

/// Failure to load [`ParseOptions`](super::ParseOptions) from text.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The JSON document is malformed or has a value of the wrong type.
    #[error("invalid JSON parse options: {0}")]
    Json(#[from] serde_json::Error),
    /// The TOML document is malformed or has a value of the wrong type.
    #[error("invalid TOML parse options: {0}")]
    Toml(#[from] toml::de::Error),
}
