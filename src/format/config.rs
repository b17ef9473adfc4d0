//! Key-value configuration blocks for format implementations.

use std::collections::HashMap;

/// Flat string key-value configuration for a reader or writer.
///
/// The built-in COCO formats take no tunable parameters, so their accessors
/// return an empty block and ignore incoming values; the type exists so
/// hosts can drive every format through one configuration interface.
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    values: HashMap<String, String>,
}

impl FormatConfig {
    /// Create an empty configuration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any existing one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Merge another block into this one; incoming values win.
    pub fn merge(&mut self, other: &FormatConfig) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the block has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_incoming_values() {
        let mut base = FormatConfig::new();
        base.set("path", "old");
        base.set("keep", "yes");

        let mut incoming = FormatConfig::new();
        incoming.set("path", "new");

        base.merge(&incoming);
        assert_eq!(base.get("path"), Some("new"));
        assert_eq!(base.get("keep"), Some("yes"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn empty_block_reports_empty() {
        let config = FormatConfig::new();
        assert!(config.is_empty());
        assert_eq!(config.get("anything"), None);
    }
}
