use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpatialArmError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SpatialArmError>;
