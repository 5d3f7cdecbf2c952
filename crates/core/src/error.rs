use thiserror::Error;

/// Startup configuration errors. Always fatal to the process.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: String },

    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid { var: String, value: String, reason: String },
}
