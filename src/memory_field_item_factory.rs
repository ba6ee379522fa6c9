use std::collections::HashMap;
use std::sync::Arc;

use crate::mime::Mime;

use crate::{FieldItemFactory, MemoryFieldItem};

/// The default buffer capacity of created items, 4 MiB.
pub const DEFAULT_ITEM_CAPACITY: usize = 4 * 1024 * 1024;

/// The default marker a client appends to a field name to mark it as a file-array field.
pub const DEFAULT_MULTI_MARKER: &str = "[]";

/// This factory stores the data of uploaded fields in memory.
///
/// It doesn't support large files. Useful for systems where writing to the file system is not allowed.
///
/// One factory serves one upload request. Its per-field-name counters are what make derived names unique, so an instance reused across requests produces non-reproducible names. Fields within a request are parsed sequentially; `create_item` takes `&mut self` and there is no internal locking.
#[derive(Debug)]
pub struct MemoryFieldItemFactory {
    capacity: usize,
    multi_marker: String,
    counters: HashMap<Arc<str>, usize>,
}

impl MemoryFieldItemFactory {
    /// Create a factory whose items hold up to `DEFAULT_ITEM_CAPACITY` bytes.
    #[inline]
    pub fn new() -> MemoryFieldItemFactory {
        MemoryFieldItemFactory::with_capacity(DEFAULT_ITEM_CAPACITY)
    }

    /// Create a factory whose items hold up to `capacity` bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> MemoryFieldItemFactory {
        MemoryFieldItemFactory {
            capacity,
            multi_marker: String::from(DEFAULT_MULTI_MARKER),
            counters: HashMap::new(),
        }
    }

    /// Set the multi-value marker stripped from field names when deriving unique names.
    #[inline]
    pub fn multi_marker<S: Into<String>>(mut self, multi_marker: S) -> MemoryFieldItemFactory {
        self.multi_marker = multi_marker.into();
        self
    }

    /// The buffer capacity applied to every item this factory creates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Create an item for one field.
    ///
    /// Repeated calls with the same `field_name` yield the derived names `{stripped}-0`, `{stripped}-1`, ... in call order, where `{stripped}` is `field_name` with every occurrence of the multi-value marker removed.
    ///
    /// `field_name` must not be empty.
    pub fn create_item(
        &mut self,
        field_name: &str,
        content_type: Option<Mime>,
        is_form_field: bool,
        file_name: Option<String>,
    ) -> MemoryFieldItem {
        debug_assert!(!field_name.is_empty());

        let count = match self.counters.get_mut(field_name) {
            Some(count) => {
                *count += 1;

                *count
            },
            None => {
                self.counters.insert(Arc::from(field_name), 0);

                0
            },
        };

        let derived_name = format!("{}-{}", field_name.replace(&self.multi_marker, ""), count);

        MemoryFieldItem::new(
            self.capacity,
            Arc::from(derived_name),
            Arc::from(field_name),
            content_type,
            is_form_field,
            file_name,
        )
    }
}

impl Default for MemoryFieldItemFactory {
    #[inline]
    fn default() -> Self {
        MemoryFieldItemFactory::new()
    }
}

impl FieldItemFactory for MemoryFieldItemFactory {
    type Item = MemoryFieldItem;

    #[inline]
    fn create_item(
        &mut self,
        field_name: &str,
        content_type: Option<Mime>,
        is_form_field: bool,
        file_name: Option<String>,
    ) -> MemoryFieldItem {
        MemoryFieldItemFactory::create_item(self, field_name, content_type, is_form_field, file_name)
    }
}
