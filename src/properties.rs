//! Style properties.
//!
//! Every property is optional; an absent property means "use the host default". Unknown fields
//! are ignored so that newer documents still decode.

use crate::alignment::{Alignment, Axis, HorizontalAlignment, VerticalAlignment};
use crate::error::{DecodeError, RenderSkip};
use crate::insets::EdgeInsets;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The sentinel accepted in place of a number for flexible maximum dimensions.
const INFINITY: &str = "infinity";

/// The full property set of a view node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_frame: Option<PositionFrame>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,

    /// Hex color string; not validated here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,
    /// Hex color string; not validated here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shows_indicators: Option<bool>,
}

impl Properties {
    /// Strictly decodes a property object.
    pub fn from_value(value: &Value) -> Result<Properties, DecodeError> {
        if !value.is_object() {
            return Err(DecodeError::malformed("properties must be an object"));
        }
        Ok(Properties::deserialize(value)?)
    }

    /// Encodes the properties, omitting absent fields.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }

    /// Decodes a property object, dropping each entry that fails validation instead of failing
    /// the whole object.
    pub fn from_value_lenient(value: Value) -> Option<Properties> {
        let entries = match value {
            Value::Object(entries) => entries,
            Value::Null => return None,
            other => {
                tracing::warn!(
                    "{}",
                    RenderSkip::MalformedProperty {
                        name: "properties".to_string(),
                        reason: format!("expected an object, found {}", other),
                    }
                );
                return None;
            }
        };

        let mut accepted = Map::new();
        for (name, entry) in entries {
            // unknown names pass through here and are ignored by the final decode
            let mut single = Map::new();
            single.insert(name.clone(), entry);
            let single = Value::Object(single);

            if let Err(err) = Properties::deserialize(&single) {
                tracing::warn!(
                    "{}",
                    RenderSkip::MalformedProperty {
                        name,
                        reason: err.to_string(),
                    }
                );
                continue;
            }
            if let Value::Object(single) = single {
                accepted.extend(single);
            }
        }

        match Properties::deserialize(&Value::Object(accepted)) {
            Ok(properties) => Some(properties),
            Err(err) => {
                tracing::warn!("dropping properties: {}", err);
                None
            }
        }
    }
}

/// A border drawn inside the padding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Border {
    /// Hex color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Per-side padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl Padding {
    /// Converts to insets; absent sides are zero.
    pub fn insets(&self) -> EdgeInsets {
        EdgeInsets::new(
            self.top.unwrap_or(0.),
            self.left.unwrap_or(0.),
            self.bottom.unwrap_or(0.),
            self.right.unwrap_or(0.),
        )
    }
}

/// A fixed-size frame.
///
/// Unlike [`PositionFrame`], this does not accept `"infinity"`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// A flexible frame.
///
/// `max_width` and `max_height` may be given on the wire as the string `"infinity"`, in which case
/// the corresponding `is_*_infinite` flag is set and the numeric field stays absent. Encoding does
/// the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawPositionFrame", into = "RawPositionFrame")]
pub struct PositionFrame {
    pub min_width: Option<f64>,
    pub ideal_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub ideal_height: Option<f64>,
    pub max_height: Option<f64>,
    pub alignment: Option<Alignment>,
    pub is_width_infinite: bool,
    pub is_height_infinite: bool,
}

impl PositionFrame {
    /// The effective maximum width, with the infinite flag folded in.
    pub fn resolved_max_width(&self) -> Option<f64> {
        if self.is_width_infinite {
            Some(f64::INFINITY)
        } else {
            self.max_width
        }
    }

    /// The effective maximum height, with the infinite flag folded in.
    pub fn resolved_max_height(&self) -> Option<f64> {
        if self.is_height_infinite {
            Some(f64::INFINITY)
        } else {
            self.max_height
        }
    }
}

/// Wire shape of a flexible maximum: a number, or a keyword string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum MaxLength {
    Keyword(String),
    Points(f64),
}

impl MaxLength {
    /// Splits into `(points, is_infinite)`. Keywords other than `"infinity"` are ignored.
    fn split(length: Option<MaxLength>) -> (Option<f64>, bool) {
        match length {
            Some(MaxLength::Keyword(keyword)) => (None, keyword == INFINITY),
            Some(MaxLength::Points(points)) => (Some(points), false),
            None => (None, false),
        }
    }

    fn join(points: Option<f64>, is_infinite: bool) -> Option<MaxLength> {
        if is_infinite {
            Some(MaxLength::Keyword(INFINITY.to_string()))
        } else {
            points.map(MaxLength::Points)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPositionFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_width: Option<MaxLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_height: Option<MaxLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ideal_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ideal_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alignment: Option<Alignment>,
}

impl From<RawPositionFrame> for PositionFrame {
    fn from(raw: RawPositionFrame) -> PositionFrame {
        let (max_width, is_width_infinite) = MaxLength::split(raw.max_width);
        let (max_height, is_height_infinite) = MaxLength::split(raw.max_height);
        PositionFrame {
            min_width: raw.min_width,
            ideal_width: raw.ideal_width,
            max_width,
            min_height: raw.min_height,
            ideal_height: raw.ideal_height,
            max_height,
            alignment: raw.alignment,
            is_width_infinite,
            is_height_infinite,
        }
    }
}

impl From<PositionFrame> for RawPositionFrame {
    fn from(frame: PositionFrame) -> RawPositionFrame {
        RawPositionFrame {
            max_width: MaxLength::join(frame.max_width, frame.is_width_infinite),
            max_height: MaxLength::join(frame.max_height, frame.is_height_infinite),
            min_width: frame.min_width,
            min_height: frame.min_height,
            ideal_width: frame.ideal_width,
            ideal_height: frame.ideal_height,
            alignment: frame.alignment,
        }
    }
}

/// Text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Font {
    LargeTitle,
    Title,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption,
}

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// The numeric weight on the usual 100-900 scale.
    pub fn weight(self) -> u16 {
        match self {
            FontWeight::UltraLight => 100,
            FontWeight::Thin => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
            FontWeight::Black => 900,
        }
    }
}
