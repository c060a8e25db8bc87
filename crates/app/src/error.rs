//! Application error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] gala_core::Error),

    #[error("Directory error: {0}")]
    Net(#[from] gala_net::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No event selected. Pass --event, set event_id in the config file or GALA_EVENT_ID")]
    MissingEventId,

    #[error("No API token. Set GALA_API_TOKEN or [api] token in the config file")]
    MissingToken,

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
