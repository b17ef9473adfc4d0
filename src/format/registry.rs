//! Registry mapping format names to reader and writer factories.

use std::collections::HashMap;

use crate::format::formats::{CocoReader, CocoWriter};
use crate::format::traits::{DetectionReader, DetectionWriter};

/// Factory producing a fresh reader instance.
pub type ReaderFactory = fn() -> Box<dyn DetectionReader>;

/// Factory producing a fresh writer instance.
pub type WriterFactory = fn() -> Box<dyn DetectionWriter>;

/// Registry of available detection formats.
///
/// This provides a central location to discover formats and construct
/// reader/writer instances by name. All built-in formats are registered on
/// creation. Readers carry a cursor, so the registry hands out fresh
/// instances rather than sharing one.
pub struct FormatRegistry {
    readers: HashMap<&'static str, ReaderFactory>,
    writers: HashMap<&'static str, WriterFactory>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            readers: HashMap::new(),
            writers: HashMap::new(),
        };

        // Register all built-in formats
        registry.register_reader("coco", || Box::new(CocoReader::new()));
        registry.register_writer("coco", || Box::new(CocoWriter::new()));

        registry
    }

    /// Register a reader factory under a format name.
    ///
    /// A name that is already taken is left untouched.
    pub fn register_reader(&mut self, id: &'static str, factory: ReaderFactory) {
        if self.readers.contains_key(id) {
            log::warn!("reader format '{}' already registered, ignoring", id);
            return;
        }
        self.readers.insert(id, factory);
    }

    /// Register a writer factory under a format name.
    ///
    /// A name that is already taken is left untouched.
    pub fn register_writer(&mut self, id: &'static str, factory: WriterFactory) {
        if self.writers.contains_key(id) {
            log::warn!("writer format '{}' already registered, ignoring", id);
            return;
        }
        self.writers.insert(id, factory);
    }

    /// Construct a fresh reader for the named format.
    pub fn create_reader(&self, id: &str) -> Option<Box<dyn DetectionReader>> {
        self.readers.get(id).map(|factory| factory())
    }

    /// Construct a fresh writer for the named format.
    pub fn create_writer(&self, id: &str) -> Option<Box<dyn DetectionWriter>> {
        self.writers.get(id).map(|factory| factory())
    }

    /// Names of all registered reader formats.
    pub fn reader_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.readers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Names of all registered writer formats.
    pub fn writer_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.writers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_formats_are_registered() {
        let registry = FormatRegistry::new();

        assert!(registry.create_reader("coco").is_some());
        assert!(registry.create_writer("coco").is_some());
        assert!(registry.create_reader("kw18").is_none());

        assert_eq!(registry.reader_ids(), ["coco"]);
        assert_eq!(registry.writer_ids(), ["coco"]);
    }

    #[test]
    fn created_readers_are_independent() {
        let registry = FormatRegistry::new();
        let a = registry.create_reader("coco").unwrap();
        let b = registry.create_reader("coco").unwrap();

        // Two distinct boxed instances, not a shared one.
        let a_addr = a.as_ref() as *const dyn DetectionReader as *const ();
        let b_addr = b.as_ref() as *const dyn DetectionReader as *const ();
        assert_ne!(a_addr, b_addr);
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut registry = FormatRegistry::new();
        let before = registry.reader_ids();
        registry.register_reader("coco", || Box::new(CocoReader::new()));
        assert_eq!(registry.reader_ids(), before);
    }

    #[test]
    fn reader_metadata_matches_id() {
        let registry = FormatRegistry::new();
        let reader = registry.create_reader("coco").unwrap();
        assert_eq!(reader.id(), "coco");
        assert!(reader.extensions().contains(&"json"));
    }
}
