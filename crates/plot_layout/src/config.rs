//! Layout configuration
//!
//! The configuration is owned by the plot layout, survives across layout
//! passes and can be persisted as JSON.

use crate::axis::AxisMap;
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Default distance between the plot components
pub const DEFAULT_SPACING: i32 = 5;

/// Default margin between the canvas border and the scale ticks
pub const DEFAULT_CANVAS_MARGIN: i32 = 4;

/// Where the legend is placed relative to the other components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Left,
    Right,
    Top,
    #[default]
    Bottom,
}

impl LegendPosition {
    /// True for legends beside the plot, false for legends above or below
    pub fn is_beside(self) -> bool {
        matches!(self, LegendPosition::Left | LegendPosition::Right)
    }

    /// Ratio used when none (or a non-positive one) is given
    pub fn default_ratio(self) -> f64 {
        if self.is_beside() {
            0.5
        } else {
            0.33
        }
    }

    /// Clamp a legend ratio into `(0, 1]` for this position
    pub fn clamp_ratio(self, ratio: f64) -> f64 {
        if ratio > 1.0 {
            1.0
        } else if ratio > 0.0 {
            ratio
        } else {
            // also catches NaN
            self.default_ratio()
        }
    }
}

impl FromStr for LegendPosition {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(LegendPosition::Left),
            "right" => Ok(LegendPosition::Right),
            "top" => Ok(LegendPosition::Top),
            "bottom" => Ok(LegendPosition::Bottom),
            other => Err(LayoutError::Config(format!(
                "unknown legend position '{}'",
                other
            ))),
        }
    }
}

/// Stored configuration of a plot layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Position of the legend
    pub legend_position: LegendPosition,
    /// Maximum fraction of the layout the legend may take, in `(0, 1]`
    pub legend_ratio: f64,
    /// Distance between the components, never negative
    pub spacing: i32,
    /// Margin between canvas border and scale ticks; -1 means no margin
    pub canvas_margins: AxisMap<i32>,
    /// Whether the canvas border is aligned to the scale backbone
    pub align_canvas_to_scales: AxisMap<bool>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            legend_position: LegendPosition::Bottom,
            legend_ratio: LegendPosition::Bottom.default_ratio(),
            spacing: DEFAULT_SPACING,
            canvas_margins: AxisMap::splat(DEFAULT_CANVAS_MARGIN),
            align_canvas_to_scales: AxisMap::splat(false),
        }
    }
}

impl LayoutConfig {
    /// Apply the same clamping rules the layout setters use
    pub fn sanitized(mut self) -> Self {
        self.legend_ratio = self.legend_position.clamp_ratio(self.legend_ratio);
        self.spacing = self.spacing.max(0);
        self.canvas_margins = self.canvas_margins.map(|_, margin| (*margin).max(-1));
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file, or return defaults if it doesn't exist
    ///
    /// A file that cannot be parsed is reported and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match Self::from_json_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse layout configuration {:?}, using defaults: {}",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }
}
