use thiserror::Error;

/// Main error type for the Pal Quest game core.
///
/// Game play itself never fails; these only surface while building a session
/// (catalog, configuration) or while parsing input at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Error related to the embedded creature catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Error related to loading or parsing configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Input name that does not map to a button
    #[error("Unknown button: {0}")]
    UnknownButton(String),
}

/// Errors related to the creature catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The embedded catalog bytes could not be decoded
    #[error("Malformed catalog data: {0}")]
    MalformedData(String),
    /// The requested template does not exist
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
    /// The catalog names no starter-eligible template
    #[error("Catalog defines no starter templates")]
    NoStarters,
    /// The catalog has no templates to populate the world with
    #[error("Catalog defines no templates")]
    NoTemplates,
}

/// Errors related to game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
