#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("License oracle unavailable: {0}")]
    OracleUnavailable(String),

    #[error("Preference not installed: {0}")]
    PreferenceNotInstalled(String),

    #[error("Host error: {0}")]
    Host(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type GuardResult<T> = std::result::Result<T, GuardError>;
