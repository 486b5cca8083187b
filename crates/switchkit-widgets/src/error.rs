//! Error types for switch styling.

use switchkit_core::ColorParseError;
use thiserror::Error;

/// Errors raised while loading or resolving a [`SwitchStyle`](crate::SwitchStyle).
#[derive(Debug, Error)]
pub enum StyleError {
    /// YAML syntax or shape error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML syntax or shape error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color attribute could not be parsed.
    #[error("invalid color `{value}` for `{field}`: {source}")]
    InvalidColor {
        field: &'static str,
        value: String,
        #[source]
        source: ColorParseError,
    },

    /// A dimension string had no recognizable number or unit.
    #[error("invalid dimension `{0}` (expected a number or a value in px, dp, dip or sp)")]
    InvalidDimension(String),

    /// A dimension resolved to a negative or non-finite pixel size.
    #[error("`{field}` must be a finite, non-negative size, got {value}")]
    NegativeDimension { field: &'static str, value: f32 },

    /// Display density was zero, negative or non-finite.
    #[error("display density must be positive and finite, got {0}")]
    InvalidDensity(f32),
}
