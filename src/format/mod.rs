//! Detection format input/output system.
//!
//! This module provides a trait-based system for reading and writing
//! per-frame detection sets in external formats. New formats are added by
//! implementing the [`DetectionReader`] and/or [`DetectionWriter`] traits
//! and registering a factory with the [`FormatRegistry`].
//!
//! ## Supported formats
//!
//! - **COCO JSON**: industry standard for object detection datasets
//!
//! ## Usage
//!
//! ```rust,ignore
//! use detset::format::FormatRegistry;
//!
//! let registry = FormatRegistry::new();
//! let mut reader = registry.create_reader("coco").unwrap();
//! reader.open(path)?;
//! while let Some((detections, file_name)) = reader.read_set()? {
//!     // one detection set per frame, in increasing frame order
//! }
//! ```

mod config;
mod error;
pub mod formats;
mod registry;
mod traits;

pub use config::FormatConfig;
pub use error::FormatError;
pub use registry::{FormatRegistry, ReaderFactory, WriterFactory};
pub use traits::{DetectionReader, DetectionWriter};
