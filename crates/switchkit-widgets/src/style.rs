//! Switch styling: resolved configuration and loadable attribute sets.
//!
//! [`SwitchConfig`] is the validated, pixel-based configuration a
//! [`Switch`](crate::Switch) is built from. [`SwitchStyle`] is the loose,
//! host-authored form read from YAML or TOML:
//!
//! ```yaml
//! radius: 12dp
//! inner_padding: 3dp
//! checked_color: "#4caf50"
//! background_color: "#777777"
//! animation_duration: 250
//! ```
//!
//! Every attribute is optional. Dimensions are plain numbers (pixels) or
//! strings with a `px`, `dp`, `dip` or `sp` suffix; density-independent units
//! are scaled by the display density passed to [`SwitchStyle::resolve`].

use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use switchkit_core::Color;

/// Default knob radius in dp.
pub const DEFAULT_RADIUS_DP: f32 = 8.0;
/// Default padding between knob and track edge in dp.
pub const DEFAULT_INNER_PADDING_DP: f32 = 2.0;
/// Default duration of a full-travel transition.
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;
/// Default unchecked track color (`#777777`).
pub const DEFAULT_BACKGROUND_ARGB: u32 = 0xff77_7777;

// =============================================================================
// SwitchConfig
// =============================================================================

/// Resolved switch configuration in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchConfig {
    /// Knob radius
    pub radius: f32,
    /// Gap between knob and track edge
    pub inner_padding: f32,
    /// Knob color when checked
    pub checked_color: Color,
    /// Knob color when unchecked
    pub unchecked_color: Color,
    /// Track color when unchecked
    pub background_color: Color,
    /// Track color when checked; falls back to `background_color`
    pub checked_background_color: Option<Color>,
    /// Initial logical state
    pub is_checked: bool,
    /// Duration of a full-travel transition
    pub animation_duration_ms: u32,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl SwitchConfig {
    /// Defaults with dp dimensions scaled by `density`.
    #[must_use]
    pub fn with_density(density: f32) -> Self {
        Self {
            radius: DEFAULT_RADIUS_DP * density,
            inner_padding: DEFAULT_INNER_PADDING_DP * density,
            checked_color: Color::WHITE,
            unchecked_color: Color::WHITE,
            background_color: Color::from_argb(DEFAULT_BACKGROUND_ARGB),
            checked_background_color: None,
            is_checked: false,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }

    /// Configured knob color for a logical state.
    #[must_use]
    pub const fn knob_color(&self, checked: bool) -> Color {
        if checked {
            self.checked_color
        } else {
            self.unchecked_color
        }
    }

    /// Configured track color for a logical state.
    #[must_use]
    pub fn track_color(&self, checked: bool) -> Color {
        if checked {
            self.checked_background_color
                .unwrap_or(self.background_color)
        } else {
            self.background_color
        }
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A length with a unit, as written in a style.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawDimension")]
pub enum Dimension {
    /// Physical pixels
    Px(f32),
    /// Density-independent pixels
    Dp(f32),
    /// Scale-independent pixels (treated as dp)
    Sp(f32),
}

impl Dimension {
    /// Convert to pixels at the given display density.
    #[must_use]
    pub fn to_px(self, density: f32) -> f32 {
        match self {
            Self::Px(v) => v,
            Self::Dp(v) | Self::Sp(v) => v * density,
        }
    }
}

impl FromStr for Dimension {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);
        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| StyleError::InvalidDimension(s.to_string()))?;

        match unit.to_ascii_lowercase().as_str() {
            "" | "px" => Ok(Self::Px(value)),
            "dp" | "dip" => Ok(Self::Dp(value)),
            "sp" => Ok(Self::Sp(value)),
            _ => Err(StyleError::InvalidDimension(s.to_string())),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Dp(v) => write!(f, "{v}dp"),
            Self::Sp(v) => write!(f, "{v}sp"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Number(f32),
    Text(String),
}

impl TryFrom<RawDimension> for Dimension {
    type Error = StyleError;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        match raw {
            RawDimension::Number(v) => Ok(Self::Px(v)),
            RawDimension::Text(s) => s.parse(),
        }
    }
}

// =============================================================================
// SwitchStyle
// =============================================================================

/// Host-authored switch attributes, all optional.
///
/// Field names accept both `snake_case` and the camelCase attribute names
/// (`innerPadding`, `checkedBackgroundColor`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchStyle {
    /// Knob radius
    pub radius: Option<Dimension>,
    /// Gap between knob and track edge
    #[serde(alias = "innerPadding")]
    pub inner_padding: Option<Dimension>,
    /// Knob color when checked
    #[serde(alias = "checkedColor")]
    pub checked_color: Option<String>,
    /// Knob color when unchecked
    #[serde(alias = "uncheckedColor")]
    pub unchecked_color: Option<String>,
    /// Track color when unchecked
    #[serde(alias = "backgroundColor")]
    pub background_color: Option<String>,
    /// Track color when checked
    #[serde(alias = "checkedBackgroundColor")]
    pub checked_background_color: Option<String>,
    /// Initial logical state
    #[serde(alias = "isChecked")]
    pub is_checked: Option<bool>,
    /// Full-travel duration in milliseconds
    #[serde(alias = "animationDuration")]
    pub animation_duration: Option<u32>,
}

impl SwitchStyle {
    /// Parse a style from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a style from TOML.
    pub fn from_toml(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    /// Apply defaults and validate, producing a pixel configuration.
    pub fn resolve(&self, density: f32) -> Result<SwitchConfig, StyleError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(StyleError::InvalidDensity(density));
        }
        let defaults = SwitchConfig::with_density(density);

        let config = SwitchConfig {
            radius: resolve_dimension("radius", self.radius, defaults.radius, density)?,
            inner_padding: resolve_dimension(
                "inner_padding",
                self.inner_padding,
                defaults.inner_padding,
                density,
            )?,
            checked_color: resolve_color("checked_color", self.checked_color.as_deref())?
                .unwrap_or(defaults.checked_color),
            unchecked_color: resolve_color("unchecked_color", self.unchecked_color.as_deref())?
                .unwrap_or(defaults.unchecked_color),
            background_color: resolve_color("background_color", self.background_color.as_deref())?
                .unwrap_or(defaults.background_color),
            checked_background_color: resolve_color(
                "checked_background_color",
                self.checked_background_color.as_deref(),
            )?,
            is_checked: self.is_checked.unwrap_or(defaults.is_checked),
            animation_duration_ms: self
                .animation_duration
                .unwrap_or(defaults.animation_duration_ms),
        };
        log::debug!(
            "resolved switch style at density {density}: radius={} padding={}",
            config.radius,
            config.inner_padding
        );
        Ok(config)
    }
}

fn resolve_dimension(
    field: &'static str,
    value: Option<Dimension>,
    default: f32,
    density: f32,
) -> Result<f32, StyleError> {
    let px = value.map_or(default, |d| d.to_px(density));
    if px.is_finite() && px >= 0.0 {
        Ok(px)
    } else {
        Err(StyleError::NegativeDimension { field, value: px })
    }
}

fn resolve_color(field: &'static str, value: Option<&str>) -> Result<Option<Color>, StyleError> {
    value
        .map(|s| {
            Color::from_hex(s.trim()).map_err(|source| StyleError::InvalidColor {
                field,
                value: s.to_string(),
                source,
            })
        })
        .transpose()
}
