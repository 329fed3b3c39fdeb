use std::path::PathBuf;

use thiserror::Error;

/// Failures of the surrounding plumbing. Score computation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to parse input {path}: {source}")]
    Input {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    #[error("unknown state `{0}`")]
    UnknownState(String),

    #[error("unknown district `{district}` in {state}")]
    UnknownDistrict { state: String, district: String },

    #[error("analysis layer `{0}` is turned off in agrigeo.toml")]
    LayerDisabled(String),
}

pub type Result<T> = std::result::Result<T, Error>;
