//! Error type shared by the deck store, configuration and session orchestration.
use std::path::PathBuf;

use thiserror::Error;

use crate::models::DeckReference;

#[derive(Error, Debug)]
pub enum CramError {
    #[error("deck not found: {0}")]
    NotFound(DeckReference),

    #[error("deck '{reference}' is malformed: {source}")]
    Parse {
        reference: DeckReference,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize deck: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("not a deck file: {0}")]
    InvalidDeckFile(PathBuf),
}

pub type Result<T> = std::result::Result<T, CramError>;
