//! Error types for jst-xh-models.
//!
//! Geometry and catalog errors signal caller bugs: the chain was never
//! seeded, or the model key is not one of the published ones. Configuration
//! and export errors carry the path and the underlying I/O or parse error.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from point chain operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The chain has no seed point to build from.
    #[error("chain is empty: seed it with a starting point first")]
    EmptyChain,
}

/// Errors from catalog lookups and parameter building.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No model with this key exists.
    #[error("model not found: {model}")]
    ModelNotFound {
        /// The requested model key.
        model: String,
    },

    /// Unknown family name.
    #[error("unknown connector family '{name}'. Must be one of: straight, angled, angled-compact")]
    UnknownFamily {
        /// The requested family name.
        name: String,
    },

    /// A connector needs at least one pin.
    #[error("invalid pin count {num_pins} for model '{model}'")]
    InvalidPinCount {
        /// Model key being built.
        model: String,
        /// The rejected pin count.
        num_pins: u32,
    },
}

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while exporting parameter tables.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Output file or directory could not be written.
    #[error("failed to write export: {path}")]
    Io {
        /// Path being written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// CSV serialisation failed.
    #[error("failed to write CSV")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failed.
    #[error("failed to write JSON")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "invalid setting".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("invalid setting"));
    }

    #[test]
    fn model_not_found_names_the_key() {
        let error = CatalogError::ModelNotFound {
            model: "B17B_XH_A".to_string(),
        };
        assert_eq!(error.to_string(), "model not found: B17B_XH_A");
    }

    #[test]
    fn empty_chain_display() {
        assert!(GeometryError::EmptyChain.to_string().contains("empty"));
    }
}
