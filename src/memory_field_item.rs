use std::fmt::{self, Debug, Formatter};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use crate::mime::Mime;

use crate::{FieldItem, FieldStoreError};

/// In-memory storage for one multipart/form-data field.
///
/// The buffer is allocated once, at the capacity configured on the factory, and is never resized. A write that would exceed it fails with `FieldStoreError::CapacityExceededError`; nothing is spilled to disk. Reads are scoped to the written prefix, so unwritten buffer bytes are never observable.
pub struct MemoryFieldItem {
    field_name: Arc<str>,
    original_name: Arc<str>,
    content_type: Option<Mime>,
    file_name: Option<String>,
    form_field: bool,
    buf: Box<[u8]>,
    size: usize,
}

impl MemoryFieldItem {
    pub(crate) fn new(
        capacity: usize,
        field_name: Arc<str>,
        original_name: Arc<str>,
        content_type: Option<Mime>,
        form_field: bool,
        file_name: Option<String>,
    ) -> MemoryFieldItem {
        MemoryFieldItem {
            field_name,
            original_name,
            content_type,
            file_name,
            form_field,
            buf: vec![0u8; capacity].into_boxed_slice(),
            size: 0,
        }
    }

    /// Append bytes at the current fill offset.
    ///
    /// The write is all-or-nothing: if it would exceed the buffer length, no byte of `buf` is stored and the fill size is unchanged.
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), FieldStoreError> {
        if buf.len() > self.buf.len() - self.size {
            return Err(FieldStoreError::CapacityExceededError(Arc::clone(&self.field_name)));
        }

        self.buf[self.size..self.size + buf.len()].copy_from_slice(buf);
        self.size += buf.len();

        Ok(())
    }

    /// Append a single byte at the current fill offset.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<(), FieldStoreError> {
        self.write_all(&[byte])
    }

    /// The bytes written so far.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.size]
    }

    /// A `Read` view over the bytes written so far.
    #[inline]
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes())
    }

    /// Consume the item, keeping only the bytes written so far.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.buf.into_vec();

        bytes.truncate(self.size);

        bytes
    }

    /// The number of bytes written so far, not the buffer capacity.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The fixed buffer capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Decode the bytes written so far as UTF-8. Invalid sequences are replaced.
    #[inline]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.bytes()).into_owned()
    }

    /// Decode the bytes written so far with a named character encoding.
    ///
    /// The name is resolved through the WHATWG encoding label registry, so labels like `UTF-8`, `ISO-8859-1` or `Shift_JIS` are accepted case-insensitively. An unknown label fails with `FieldStoreError::UnsupportedEncodingError`; no fallback encoding is substituted.
    pub fn text_with_charset(&self, charset: &str) -> Result<String, FieldStoreError> {
        let encoding = match encoding_rs::Encoding::for_label(charset.as_bytes()) {
            Some(encoding) => encoding,
            None => {
                return Err(FieldStoreError::UnsupportedEncodingError(String::from(charset)));
            },
        };

        let (text, _, _) = encoding.decode(self.bytes());

        Ok(text.into_owned())
    }

    /// Write the content to the file system.
    ///
    /// Always fails with `FieldStoreError::PersistNotSupportedError`: this item has no disk-backed mode.
    pub fn persist_to<P: AsRef<Path>>(&self, _path: P) -> Result<(), FieldStoreError> {
        Err(FieldStoreError::PersistNotSupportedError)
    }

    /// Reset the fill size to zero. The buffer is kept allocated and its contents are not zeroed; a subsequent write sequence behaves like one against a fresh item.
    #[inline]
    pub fn delete(&mut self) {
        self.size = 0;
    }

    /// Always `true`.
    #[inline]
    pub fn is_in_memory(&self) -> bool {
        true
    }

    /// The derived unique name, not the name the field had on the wire.
    #[inline]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Overwrite the derived unique name. The previous name is not recoverable.
    #[inline]
    pub fn set_field_name<S: Into<Arc<str>>>(&mut self, field_name: S) {
        self.field_name = field_name.into();
    }

    /// The field name as it appeared on the wire, before the multi-value marker was stripped.
    #[inline]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// The declared content type.
    #[inline]
    pub fn content_type(&self) -> Option<&Mime> {
        self.content_type.as_ref()
    }

    /// The declared file name. `None` for plain form fields.
    #[inline]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Whether this field is a plain form field rather than a file.
    #[inline]
    pub fn is_form_field(&self) -> bool {
        self.form_field
    }

    #[inline]
    pub fn set_form_field(&mut self, form_field: bool) {
        self.form_field = form_field;
    }
}

impl FieldItem for MemoryFieldItem {
    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> Result<(), FieldStoreError> {
        MemoryFieldItem::write_all(self, buf)
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        MemoryFieldItem::bytes(self)
    }

    #[inline]
    fn size(&self) -> usize {
        MemoryFieldItem::size(self)
    }

    #[inline]
    fn delete(&mut self) {
        MemoryFieldItem::delete(self)
    }

    #[inline]
    fn persist_to(&self, path: &Path) -> Result<(), FieldStoreError> {
        MemoryFieldItem::persist_to(self, path)
    }

    #[inline]
    fn is_in_memory(&self) -> bool {
        MemoryFieldItem::is_in_memory(self)
    }
}

impl Debug for MemoryFieldItem {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        // The buffer itself is omitted; dumping up to the full capacity is useless.
        f.debug_struct("MemoryFieldItem")
            .field("field_name", &self.field_name)
            .field("original_name", &self.original_name)
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .field("form_field", &self.form_field)
            .field("size", &self.size)
            .field("capacity", &self.buf.len())
            .finish()
    }
}
