use thiserror::Error;

/// Why a compose action was refused. No state changes when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Nothing to save")]
    NothingToSave,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}
