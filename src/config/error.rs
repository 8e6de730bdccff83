use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write default config to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed configuration: {0}")]
    Malformed(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
