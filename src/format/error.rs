//! Error types for detection format operations.

use thiserror::Error;

/// Errors that can occur while reading or writing detection documents.
///
/// Every error is fatal to the current open session; callers retry by
/// closing and reopening the reader or writer.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Read or write attempted with no open file
    #[error("no file is open")]
    NotOpen,

    /// Two categories share the same id
    #[error("duplicate category id: {id}")]
    DuplicateCategoryId {
        /// The repeated category id
        id: u64,
    },

    /// Two categories share the same name
    #[error("duplicate category name: {name:?}")]
    DuplicateCategoryName {
        /// The repeated category name
        name: String,
    },

    /// Two images share the same id
    #[error("duplicate image id: {id}")]
    DuplicateImageId {
        /// The repeated image id
        id: u64,
    },

    /// Annotation references an image id with no declared image
    #[error("annotation references unknown image id: {image_id}")]
    ImageNotFound {
        /// The missing image id
        image_id: u64,
    },

    /// Annotation references a category id with no declared category
    #[error("annotation references unknown category id: {category_id}")]
    CategoryNotFound {
        /// The missing category id
        category_id: u64,
    },
}
