//! Host defaults.

use crate::alignment::{Alignment, Axis, HorizontalAlignment, VerticalAlignment};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// Defaults the renderer falls back to when a node doesn't specify a property.
///
/// Passed explicitly into the renderer so rendering doesn't depend on ambient state. Every field
/// is optional when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Stack spacing; `None` leaves it to the host toolkit.
    pub spacing: Option<f64>,
    /// Child alignment of vertical stacks.
    pub horizontal_alignment: HorizontalAlignment,
    /// Child alignment of horizontal stacks.
    pub vertical_alignment: VerticalAlignment,
    /// Overlay alignment and frame alignment.
    pub alignment: Alignment,
    /// Scroll direction.
    pub axis: Axis,
    pub shows_indicators: bool,
    /// Shown in place of an image whose source kind is missing.
    pub parsing_error_text: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            spacing: None,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
            alignment: Alignment::Center,
            axis: Axis::Vertical,
            shows_indicators: true,
            parsing_error_text: "Parsing error.".to_string(),
        }
    }
}

impl RenderConfig {
    /// Reads a configuration from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<RenderConfig, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}
