//! Detection records and per-frame detection sets.

use crate::model::BoundingBox;

/// A category label with an associated weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Category label.
    pub label: String,
    /// Weight assigned to the label, usually in `[0, 1]`.
    pub score: f64,
}

impl Classification {
    /// Create a new classification.
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A single detected object: location, confidence, and an optional
/// category classification.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedObject {
    /// Location of the object in the image.
    pub bounding_box: BoundingBox,
    /// Detector confidence for this object.
    pub confidence: f64,
    /// Category classification, when the source provides one.
    pub classification: Option<Classification>,
}

impl DetectedObject {
    /// Create a detection with no classification.
    pub fn new(bounding_box: BoundingBox, confidence: f64) -> Self {
        Self {
            bounding_box,
            confidence,
            classification: None,
        }
    }

    /// Attach a classification.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Label of the attached classification, if any.
    pub fn label(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.label.as_str())
    }
}

/// Ordered collection of detections for one frame.
///
/// Insertion order is preserved; consumers rely on it for reproducible
/// output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedObjectSet {
    objects: Vec<DetectedObject>,
}

impl DetectedObjectSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from an ordered list of detections.
    pub fn from_objects(objects: Vec<DetectedObject>) -> Self {
        Self { objects }
    }

    /// Append a detection.
    pub fn add(&mut self, object: DetectedObject) {
        self.objects.push(object);
    }

    /// Number of detections in the set.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the set holds no detections.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the detections in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DetectedObject> {
        self.objects.iter()
    }
}

impl IntoIterator for DetectedObjectSet {
    type Item = DetectedObject;
    type IntoIter = std::vec::IntoIter<DetectedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a> IntoIterator for &'a DetectedObjectSet {
    type Item = &'a DetectedObject;
    type IntoIter = std::slice::Iter<'a, DetectedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl FromIterator<DetectedObject> for DetectedObjectSet {
    fn from_iter<I: IntoIterator<Item = DetectedObject>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}
