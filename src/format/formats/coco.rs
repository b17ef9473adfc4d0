//! COCO JSON detection format.
//!
//! Implements reading and writing of COCO (Common Objects in Context)
//! annotation documents. Image ids are treated as frame numbers, so the
//! reader emits one detection set per frame number between the smallest and
//! largest declared image id, gaps included.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::error::FormatError;
use crate::format::traits::{DetectionReader, DetectionWriter};
use crate::model::{BoundingBox, Classification, DetectedObject, DetectedObjectSet};

/// Reader for COCO-style JSON detection documents.
///
/// The whole document is parsed and indexed on the first `read_set` call;
/// subsequent calls serve frames from the in-memory index. Reopening
/// discards the index and forces a fresh parse.
pub struct CocoReader {
    file: Option<File>,
    index: Option<FrameIndex>,
}

impl CocoReader {
    /// Create a reader with nothing open.
    pub fn new() -> Self {
        Self {
            file: None,
            index: None,
        }
    }

    fn ensure_loaded(&mut self) -> Result<&mut FrameIndex, FormatError> {
        if self.index.is_none() {
            let file = self.file.as_mut().ok_or(FormatError::NotOpen)?;
            let mut json = String::new();
            file.read_to_string(&mut json)?;
            self.index = Some(FrameIndex::build(&json)?);
        }
        Ok(self.index.as_mut().expect("index populated above"))
    }
}

impl Default for CocoReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionReader for CocoReader {
    fn id(&self) -> &'static str {
        "coco"
    }

    fn display_name(&self) -> &'static str {
        "COCO (JSON)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn open(&mut self, path: &Path) -> Result<(), FormatError> {
        self.file = Some(File::open(path)?);
        self.index = None;
        Ok(())
    }

    fn close(&mut self) {
        self.file = None;
        self.index = None;
    }

    fn read_set(&mut self) -> Result<Option<(DetectedObjectSet, String)>, FormatError> {
        let index = self.ensure_loaded()?;
        if index.frame >= index.stop_frame {
            return Ok(None);
        }

        // Frame numbers with no declared image are legal (image ids may be
        // sparse) and yield an empty set rather than an error.
        let result = match index.frames.get(&index.frame) {
            Some(entry) => {
                let objects = entry
                    .annotations
                    .iter()
                    .map(|ann| ann.to_detection(&index.categories))
                    .collect();
                (objects, entry.file_name.clone())
            }
            None => (DetectedObjectSet::new(), String::new()),
        };

        index.frame += 1;
        Ok(Some(result))
    }
}

/// Fully loaded document state: category table, frame table, and read
/// cursor. Built once per open session and replaced as a unit.
struct FrameIndex {
    categories: HashMap<u64, String>,
    frames: BTreeMap<u64, FrameEntry>,
    frame: u64,
    stop_frame: u64,
}

struct FrameEntry {
    file_name: String,
    annotations: Vec<CocoAnnotation>,
}

impl FrameIndex {
    fn build(json: &str) -> Result<Self, FormatError> {
        let doc: CocoDocument = serde_json::from_str(json)?;

        let mut categories = HashMap::new();
        let mut seen_names = HashSet::new();
        for category in &doc.categories {
            if categories.contains_key(&category.id) {
                return Err(FormatError::DuplicateCategoryId { id: category.id });
            }
            if !seen_names.insert(category.name.clone()) {
                return Err(FormatError::DuplicateCategoryName {
                    name: category.name.clone(),
                });
            }
            categories.insert(category.id, category.name.clone());
        }

        let mut frames = BTreeMap::new();
        for image in doc.images {
            let id = image.id;
            let entry = FrameEntry {
                file_name: image.file_name,
                annotations: Vec::new(),
            };
            if frames.insert(id, entry).is_some() {
                return Err(FormatError::DuplicateImageId { id });
            }
        }

        // Annotations append to their owning frame in document order.
        for annotation in doc.annotations {
            if !categories.contains_key(&annotation.category_id) {
                return Err(FormatError::CategoryNotFound {
                    category_id: annotation.category_id,
                });
            }
            let entry = frames
                .get_mut(&annotation.image_id)
                .ok_or(FormatError::ImageNotFound {
                    image_id: annotation.image_id,
                })?;
            entry.annotations.push(annotation);
        }

        let (frame, stop_frame) = match (frames.first_key_value(), frames.last_key_value()) {
            (Some((&first, _)), Some((&last, _))) => (first, last + 1),
            _ => (0, 0),
        };

        log::info!(
            "loaded COCO document: {} categories, {} images, frames {}..{}",
            categories.len(),
            frames.len(),
            frame,
            stop_frame
        );

        Ok(Self {
            categories,
            frames,
            frame,
            stop_frame,
        })
    }
}

/// Writer producing a COCO-style JSON document.
///
/// Frames are buffered in memory and serialized as one document when the
/// writer is closed. Frame numbers are assigned sequentially starting at 1;
/// category ids are assigned per label on first sight.
pub struct CocoWriter {
    path: Option<PathBuf>,
    images: Vec<CocoImage>,
    annotations: Vec<CocoAnnotation>,
    category_ids: HashMap<String, u64>,
    next_frame: u64,
}

impl CocoWriter {
    /// Create a writer with nothing open.
    pub fn new() -> Self {
        Self {
            path: None,
            images: Vec::new(),
            annotations: Vec::new(),
            category_ids: HashMap::new(),
            next_frame: 1,
        }
    }

    fn category_id(&mut self, label: &str) -> u64 {
        if let Some(&id) = self.category_ids.get(label) {
            return id;
        }
        let id = self.category_ids.len() as u64 + 1;
        self.category_ids.insert(label.to_string(), id);
        id
    }

    fn reset(&mut self) {
        self.path = None;
        self.images.clear();
        self.annotations.clear();
        self.category_ids.clear();
        self.next_frame = 1;
    }
}

impl Default for CocoWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionWriter for CocoWriter {
    fn id(&self) -> &'static str {
        "coco"
    }

    fn display_name(&self) -> &'static str {
        "COCO (JSON)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn open(&mut self, path: &Path) -> Result<(), FormatError> {
        self.reset();
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    fn write_set(&mut self, set: &DetectedObjectSet, file_name: &str) -> Result<(), FormatError> {
        if self.path.is_none() {
            return Err(FormatError::NotOpen);
        }

        let frame = self.next_frame;
        self.next_frame += 1;

        // A frame with no source image and no detections consumes a frame
        // number without declaring an image, so gaps survive a round trip.
        if file_name.is_empty() && set.is_empty() {
            return Ok(());
        }

        self.images.push(CocoImage {
            id: frame,
            file_name: file_name.to_string(),
            width: 0,
            height: 0,
        });

        for object in set {
            let Some(classification) = &object.classification else {
                log::warn!("skipping unclassified detection on frame {}", frame);
                continue;
            };
            let category_id = self.category_id(&classification.label);
            let bbox = object.bounding_box.extent();
            self.annotations.push(CocoAnnotation {
                id: self.annotations.len() as u64 + 1,
                image_id: frame,
                category_id,
                bbox,
                area: bbox[2] * bbox[3],
                iscrowd: 0,
                score: Some(object.confidence),
            });
        }

        Ok(())
    }

    fn close(&mut self) -> Result<(), FormatError> {
        let Some(path) = self.path.take() else {
            return Ok(());
        };

        let mut categories: Vec<CocoCategory> = self
            .category_ids
            .iter()
            .map(|(name, &id)| CocoCategory {
                id,
                name: name.clone(),
            })
            .collect();
        categories.sort_by_key(|category| category.id);

        let doc = CocoDocument {
            categories,
            images: std::mem::take(&mut self.images),
            annotations: std::mem::take(&mut self.annotations),
        };

        let json = serde_json::to_string_pretty(&doc)?;
        std::fs::write(&path, json)?;

        log::info!(
            "wrote COCO document to {:?}: {} images, {} annotations",
            path,
            doc.images.len(),
            doc.annotations.len()
        );

        self.reset();
        Ok(())
    }
}

// COCO wire structures. Unknown keys in the input are ignored; the three
// top-level arrays are required.

#[derive(Debug, Serialize, Deserialize)]
struct CocoDocument {
    categories: Vec<CocoCategory>,
    images: Vec<CocoImage>,
    annotations: Vec<CocoAnnotation>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CocoCategory {
    id: u64,
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct CocoImage {
    id: u64,
    file_name: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct CocoAnnotation {
    #[serde(default)]
    id: u64,
    image_id: u64,
    category_id: u64,
    /// Top-left corner and extents, `[x, y, width, height]`.
    bbox: [f64; 4],
    #[serde(default)]
    area: f64,
    #[serde(default)]
    iscrowd: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

impl CocoAnnotation {
    /// Category ids are validated against the table at load time, so the
    /// lookup here always succeeds for indexed annotations.
    fn to_detection(&self, categories: &HashMap<u64, String>) -> DetectedObject {
        let [x, y, width, height] = self.bbox;
        let score = self.score.unwrap_or(1.0);
        let mut detection =
            DetectedObject::new(BoundingBox::from_extent(x, y, width, height), score);
        if let Some(label) = categories.get(&self.category_id) {
            detection = detection.with_classification(Classification::new(label, score));
        }
        detection
    }
}
