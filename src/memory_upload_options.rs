use crate::{DEFAULT_ITEM_CAPACITY, DEFAULT_MULTI_MARKER};

/// Options for parsing multipart/form-data into memory.
#[derive(Debug)]
pub struct MemoryUploadOptions {
    /// The max number of bytes to read from the request body.
    pub max_data_bytes: u64,
    /// The buffer capacity of every field item. A field whose data exceeds this is rejected.
    pub item_capacity: usize,
    /// The multi-value marker stripped from field names when deriving unique item names.
    pub multi_marker: String,
}

impl MemoryUploadOptions {
    /// Create a default `MemoryUploadOptions` instance.
    #[inline]
    pub fn new() -> MemoryUploadOptions {
        MemoryUploadOptions {
            max_data_bytes: u64::MAX,
            item_capacity: DEFAULT_ITEM_CAPACITY,
            multi_marker: String::from(DEFAULT_MULTI_MARKER),
        }
    }
}

impl Default for MemoryUploadOptions {
    #[inline]
    fn default() -> Self {
        MemoryUploadOptions::new()
    }
}
