use serde::{Deserialize, Serialize};

/// A layout rectangle as reported by the DOM (CSS pixels, may be fractional
/// or transiently negative).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RawRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel-aligned container geometry, recomputed from scratch on every
/// layout change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GeometrySnapshot {
    /// Floor every component to a non-negative integer.
    pub fn from_rect(rect: &RawRect) -> Self {
        Self {
            x: floor_px(rect.x),
            y: floor_px(rect.y),
            width: floor_px(rect.width),
            height: floor_px(rect.height),
        }
    }
}

/// NaN and negatives collapse to zero; `as` saturates at `u32::MAX`.
fn floor_px(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.floor() as u32
    }
}
