use std::path::Path;

use crate::mime::Mime;

use crate::FieldStoreError;

/// The contract a multipart parsing engine consumes: one call per field encountered in the request body, made before any byte of that field is streamed.
pub trait FieldItemFactory {
    /// The item type produced by this factory.
    type Item: FieldItem;

    /// Create an item bound to the upcoming byte stream of one field.
    ///
    /// `field_name` is the name as it appears on the wire and must not be empty. `file_name` is `None` for plain form fields.
    fn create_item(
        &mut self,
        field_name: &str,
        content_type: Option<Mime>,
        is_form_field: bool,
        file_name: Option<String>,
    ) -> Self::Item;
}

/// The uniform streaming sink/source for one field's content.
///
/// Bytes are written in parse order by a single logical writer; once writing has ceased the item stays readable for the rest of the request.
pub trait FieldItem {
    /// Append bytes at the current fill offset.
    fn write_all(&mut self, buf: &[u8]) -> Result<(), FieldStoreError>;

    /// Append a single byte at the current fill offset.
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), FieldStoreError> {
        self.write_all(&[byte])
    }

    /// The bytes written so far.
    fn bytes(&self) -> &[u8];

    /// The number of bytes written so far.
    fn size(&self) -> usize;

    /// Reset the fill size to zero without releasing the buffer.
    fn delete(&mut self);

    /// Write the content to the file system. Implementors without a disk-backed mode always fail.
    fn persist_to(&self, path: &Path) -> Result<(), FieldStoreError>;

    /// Whether the content is held in memory.
    fn is_in_memory(&self) -> bool;
}
