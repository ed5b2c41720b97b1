use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to read theme pack `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported theme pack format: `{}` (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("unknown context `{0}` (expected `operational` or `narrative`)")]
    UnknownContext(String),

    #[error("unknown mode `{0}` (expected `dark` or `light`)")]
    UnknownMode(String),

    #[error("theme pack `{name}` not found (available: {})", .available.join(", "))]
    NotFound { name: String, available: Vec<String> },
}
