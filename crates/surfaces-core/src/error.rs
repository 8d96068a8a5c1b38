use thiserror::Error;

/// Everything that can go wrong while resolving a surface configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid color '{0}': expected a CSS color")]
    InvalidColor(String),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("field '{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("fallback variant '{0}' is not defined in the preset table")]
    UnknownFallback(String),
    #[error("alias '{alias}' points at undefined variant '{target}'")]
    DanglingAlias { alias: String, target: String },
    #[error("malformed table: {0}")]
    Table(#[from] serde_json::Error),
}
