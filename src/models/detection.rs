//! Detection model
//!
//! Output of the external object detector for one object instance. Only
//! `label` is consumed by the lookup; the rest is carried for display.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).max(0.0)
    }
}

/// One detected object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class name in the detector's vocabulary (e.g. "pizza")
    pub label: String,
    /// Detector score; never used for filtering
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    #[serde(default)]
    pub class_id: Option<u32>,
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}

fn default_confidence() -> f32 { 1.0 }

impl Detection {
    /// A detection known only by its label
    pub fn from_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            confidence: default_confidence(),
            class_id: None,
            bounding_box: None,
        }
    }
}
