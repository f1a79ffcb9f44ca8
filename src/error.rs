//! Error types for Valentine Quest

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
