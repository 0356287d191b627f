//! Error types for highlighter configuration.
//!
//! Scanning and highlighting never fail; only loading or validating a
//! [`HighlightConfig`](crate::HighlightConfig) can.

use thiserror::Error;

use crate::theme::StyleSlot;

/// Error raised while loading or validating highlighter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a configuration
    #[error("Failed to parse highlight configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written out as TOML
    #[error("Failed to serialize highlight configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A theme colour is not of the form `#rrggbb`
    #[error("Invalid colour {value:?} for the {slot} slot, expected #rrggbb")]
    InvalidColor {
        /// Slot the colour was configured for
        slot: StyleSlot,
        /// The rejected value
        value: String,
    },

    /// A size limit that must be positive was zero
    #[error("Invalid {field}: must be greater than zero")]
    ZeroThreshold {
        /// Name of the offending field
        field: &'static str,
    },

    /// An entry of the reserved-word list was the empty string
    #[error("Reserved word {index} is empty")]
    EmptyReservedWord {
        /// Position of the entry in the list
        index: usize,
    },

    /// An entry of the reserved-word list can never be scanned as one name
    #[error("Reserved word {word:?} is not a valid R name")]
    InvalidReservedWord {
        /// The rejected word
        word: String,
    },
}

/// Result type alias using ConfigError.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
