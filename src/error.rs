use thiserror::Error;

use crate::{LodgingTier, TransportMode};

/// Errors of this crate
#[derive(Debug, Error)]
pub enum Error {
    /// Required parameters missing or malformed on the command line.
    /// Reported before any computation starts.
    #[error("{0}")]
    Usage(String),

    #[error("unknown transport mode `{mode}`; valid modes are: {}", TransportMode::valid_keys())]
    UnknownMode { mode: String },

    #[error("unknown lodging type `{tier}`; valid types are: {}", LodgingTier::valid_keys())]
    UnknownLodging { tier: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] tinytemplate::error::Error),
}

impl Error {
    /// Whether this error stems from how the program was invoked rather than from the trip itself
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
