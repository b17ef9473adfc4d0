//! Trait definitions for detection format implementations.

use std::path::Path;

use crate::format::config::FormatConfig;
use crate::format::error::FormatError;
use crate::model::DetectedObjectSet;

/// Pull-based reader of per-frame detection sets.
///
/// A reader owns at most one open resource at a time. `open` associates it
/// with a file without parsing; `read_set` serves frames in increasing
/// frame-number order, one per call, until the sequence is exhausted.
/// Readers are not safe to share across threads without external
/// synchronization; independent instances share nothing.
pub trait DetectionReader: Send {
    /// Unique identifier for this format (e.g., "coco").
    fn id(&self) -> &'static str;

    /// Human-readable name for display.
    fn display_name(&self) -> &'static str;

    /// File extensions this format uses (e.g., `["json"]` for COCO).
    fn extensions(&self) -> &[&'static str];

    /// Associate the reader with the file at `path`.
    ///
    /// Does not parse. Any previously loaded state is discarded, so the
    /// next `read_set` call re-parses from the start.
    fn open(&mut self, path: &Path) -> Result<(), FormatError>;

    /// Release the underlying resource and any loaded state.
    ///
    /// Safe to call when nothing is open.
    fn close(&mut self);

    /// Read the next (detection set, image file name) pair.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted. Frame numbers
    /// with no declared image still consume one call and yield an empty
    /// set paired with an empty file name.
    fn read_set(&mut self) -> Result<Option<(DetectedObjectSet, String)>, FormatError>;

    /// Current configuration. Formats with no tunables return an empty block.
    fn configuration(&self) -> FormatConfig {
        FormatConfig::new()
    }

    /// Apply a configuration block. Ignored by formats with no tunables.
    fn set_configuration(&mut self, _config: &FormatConfig) {}

    /// Check whether a configuration block is acceptable.
    fn check_configuration(&self, _config: &FormatConfig) -> bool {
        true
    }
}

/// Push-based writer of per-frame detection sets.
///
/// The counterpart to [`DetectionReader`]: frames are appended one
/// `write_set` call at a time and the output is finalized by `close`.
pub trait DetectionWriter: Send {
    /// Unique identifier for this format (e.g., "coco").
    fn id(&self) -> &'static str;

    /// Human-readable name for display.
    fn display_name(&self) -> &'static str;

    /// File extensions this format uses.
    fn extensions(&self) -> &[&'static str];

    /// Associate the writer with the output file at `path`.
    ///
    /// Discards any frames buffered for a previous path.
    fn open(&mut self, path: &Path) -> Result<(), FormatError>;

    /// Append one frame's detections.
    ///
    /// `file_name` may be empty for frames with no source image; such
    /// frames still consume a frame number.
    fn write_set(&mut self, set: &DetectedObjectSet, file_name: &str) -> Result<(), FormatError>;

    /// Finalize and release the output.
    ///
    /// Document-oriented formats serialize here. Safe to call when nothing
    /// is open.
    fn close(&mut self) -> Result<(), FormatError>;

    /// Current configuration. Formats with no tunables return an empty block.
    fn configuration(&self) -> FormatConfig {
        FormatConfig::new()
    }

    /// Apply a configuration block. Ignored by formats with no tunables.
    fn set_configuration(&mut self, _config: &FormatConfig) {}

    /// Check whether a configuration block is acceptable.
    fn check_configuration(&self, _config: &FormatConfig) -> bool {
        true
    }
}
