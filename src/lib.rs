//! detset - per-frame object-detection set I/O.
//!
//! A library for reading and writing ordered sequences of per-frame
//! detection sets, with COCO-style JSON as the built-in format. Readers
//! serve one detection set per frame number in increasing order, including
//! empty sets for frame numbers with no declared image.

pub mod format;
pub mod model;

pub use format::{DetectionReader, DetectionWriter, FormatConfig, FormatError, FormatRegistry};
pub use model::{BoundingBox, Classification, DetectedObject, DetectedObjectSet};
