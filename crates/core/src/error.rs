//! Error types for each stage of the generation pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The input document could not be read or deserialized. Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("Failed to read document {}: {source}", .path.display())]
    Read {
        /// Location of the document.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file is not valid YAML.
    #[error("Failed to parse YAML document {}: {source}", .path.display())]
    Yaml {
        /// Location of the document.
        path: PathBuf,
        /// Parser failure, including line and column.
        source: serde_yaml::Error,
    },
    /// The file is not valid JSON.
    #[error("Failed to parse JSON document {}: {source}", .path.display())]
    Json {
        /// Location of the document.
        path: PathBuf,
        /// Parser failure, including line and column.
        source: serde_json::Error,
    },
}

/// An operation object lacks a field the walker cannot do without.
///
/// Recoverable: the operation is skipped and the error is kept as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Operation {method} {path} is missing `{field}`; skipped")]
pub struct MissingFieldError {
    /// Path template the operation belongs to.
    pub path: String,
    /// Upper-cased HTTP verb.
    pub method: String,
    /// Name of the missing key.
    pub field: &'static str,
}

/// The generated text could not be persisted. Fatal, raised after generation.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output file (or its parent directory) could not be created.
    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        /// Output location.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Writing or flushing the contents failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output location.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// The configuration file could not be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        /// Location of the config file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file is not valid TOML or has fields of the wrong type.
    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        /// Location of the config file.
        path: PathBuf,
        /// TOML deserialization failure.
        source: toml::de::Error,
    },
}

/// Any fatal failure of a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Loading the input document failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Persisting the output failed.
    #[error(transparent)]
    Write(#[from] WriteError),
    /// Loading the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
