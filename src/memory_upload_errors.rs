use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    sync::Arc,
};

use crate::multer;

/// Faults raised by a field item itself.
#[derive(Debug)]
pub enum FieldStoreError {
    /// A write would exceed the item's fixed buffer length. Carries the derived unique name of the offending item.
    CapacityExceededError(Arc<str>),
    /// A text decoding was requested with an unrecognized encoding label.
    UnsupportedEncodingError(String),
    /// Disk persistence was invoked on an in-memory item.
    PersistNotSupportedError,
}

impl Display for FieldStoreError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            FieldStoreError::CapacityExceededError(field) => f.write_fmt(format_args!(
                "The data of field `{}` exceeds its buffer capacity.",
                field
            )),
            FieldStoreError::UnsupportedEncodingError(encoding) => {
                f.write_fmt(format_args!("The encoding `{}` is not supported.", encoding))
            },
            FieldStoreError::PersistNotSupportedError => {
                f.write_str("Writing to the file system is not supported.")
            },
        }
    }
}

impl Error for FieldStoreError {}

/// Faults raised while parsing multipart/form-data into memory.
#[derive(Debug)]
pub enum MemoryUploadError {
    NotFormDataError,
    BoundaryNotFoundError,
    MulterError(multer::Error),
    FieldStoreError(FieldStoreError),
}

impl From<multer::Error> for MemoryUploadError {
    #[inline]
    fn from(err: multer::Error) -> MemoryUploadError {
        MemoryUploadError::MulterError(err)
    }
}

impl From<FieldStoreError> for MemoryUploadError {
    #[inline]
    fn from(err: FieldStoreError) -> MemoryUploadError {
        MemoryUploadError::FieldStoreError(err)
    }
}

impl Display for MemoryUploadError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            MemoryUploadError::NotFormDataError => {
                f.write_str("The content type is not `multipart/form-data`.")
            },
            MemoryUploadError::BoundaryNotFoundError => f.write_str(
                "The boundary cannot be found. Maybe the multipart form data is incorrect.",
            ),
            MemoryUploadError::MulterError(err) => Display::fmt(err, f),
            MemoryUploadError::FieldStoreError(err) => Display::fmt(err, f),
        }
    }
}

impl Error for MemoryUploadError {}
