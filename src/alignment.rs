//! Alignment enumerations and their toolkit-neutral counterparts.
//!
//! The wire enumerations speak in terms of left/right; the resolved types speak in terms of
//! leading/trailing, which is what host toolkits lay out with. Every conversion is a total
//! match so adding a variant is a compile error until it is mapped.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a vertical stack's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Vertical alignment of a horizontal stack's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    Top,
    Bottom,
    Center,
    FirstTextBaseline,
    LastTextBaseline,
}

/// Two-dimensional alignment, used by overlays and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Bottom,
    BottomLeft,
    BottomRight,
    Center,
    Left,
    Top,
    TopLeft,
    TopRight,
    Right,
}

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Resolved horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAlign {
    Leading,
    Center,
    Trailing,
}

/// Resolved vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
    FirstTextBaseline,
    LastTextBaseline,
}

/// Resolved two-dimensional alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameAlignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl FrameAlignment {
    pub const CENTER: FrameAlignment = FrameAlignment::new(HAlign::Center, VAlign::Center);

    pub const fn new(horizontal: HAlign, vertical: VAlign) -> FrameAlignment {
        FrameAlignment {
            horizontal,
            vertical,
        }
    }
}

impl HorizontalAlignment {
    pub fn resolve(self) -> HAlign {
        match self {
            HorizontalAlignment::Left => HAlign::Leading,
            HorizontalAlignment::Center => HAlign::Center,
            HorizontalAlignment::Right => HAlign::Trailing,
        }
    }
}

impl VerticalAlignment {
    pub fn resolve(self) -> VAlign {
        match self {
            VerticalAlignment::Top => VAlign::Top,
            VerticalAlignment::Bottom => VAlign::Bottom,
            VerticalAlignment::Center => VAlign::Center,
            VerticalAlignment::FirstTextBaseline => VAlign::FirstTextBaseline,
            VerticalAlignment::LastTextBaseline => VAlign::LastTextBaseline,
        }
    }
}

impl Alignment {
    pub fn resolve(self) -> FrameAlignment {
        use HAlign::*;
        use VAlign::*;

        match self {
            Alignment::Bottom => FrameAlignment::new(HAlign::Center, Bottom),
            Alignment::BottomLeft => FrameAlignment::new(Leading, Bottom),
            Alignment::BottomRight => FrameAlignment::new(Trailing, Bottom),
            Alignment::Center => FrameAlignment::CENTER,
            Alignment::Left => FrameAlignment::new(Leading, VAlign::Center),
            Alignment::Top => FrameAlignment::new(HAlign::Center, Top),
            Alignment::TopLeft => FrameAlignment::new(Leading, Top),
            Alignment::TopRight => FrameAlignment::new(Trailing, Top),
            Alignment::Right => FrameAlignment::new(Trailing, VAlign::Center),
        }
    }
}
