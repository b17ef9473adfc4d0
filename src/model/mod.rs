//! Detection data model.
//!
//! Plain data types shared by every format implementation: a bounding box in
//! min/max-corner form, a weighted category classification, a detection
//! record, and the per-frame detection set. Serialization lives with the
//! individual formats, not here.

mod bounding_box;
mod detection;

pub use bounding_box::BoundingBox;
pub use detection::{Classification, DetectedObject, DetectedObjectSet};
