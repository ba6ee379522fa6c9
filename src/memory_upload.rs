extern crate rocket;
extern crate tokio_util;

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    MemoryFieldItem, MemoryFieldItemFactory, MemoryUploadError, MemoryUploadOptions,
};

use rocket::http::ContentType;
use rocket::Data;

use crate::multer::Multipart;

/// Parsed multipart/form-data, stored in memory.
#[derive(Debug)]
pub struct MemoryUpload {
    /// Field items keyed by their derived unique names.
    pub items: HashMap<Arc<str>, MemoryFieldItem>,
}

impl MemoryUpload {
    /// Parse multipart/form-data from the HTTP body.
    pub async fn parse(
        content_type: &ContentType,
        data: Data<'_>,
        options: MemoryUploadOptions,
    ) -> Result<MemoryUpload, MemoryUploadError> {
        if !content_type.is_form_data() {
            return Err(MemoryUploadError::NotFormDataError);
        }

        let (_, boundary) = match content_type.params().find(|&(k, _)| k == "boundary") {
            Some(s) => s,
            None => return Err(MemoryUploadError::BoundaryNotFoundError),
        };

        let stream = data.open(options.max_data_bytes.into());

        let multipart = Multipart::new(tokio_util::io::ReaderStream::new(stream), boundary);

        MemoryUpload::from_multipart(multipart, options).await
    }

    /// Parse fields from a prepared `Multipart` instance.
    ///
    /// A fresh `MemoryFieldItemFactory` is constructed per call, so the derived-name counters restart from zero for every request. On a fault the remaining fields are read out before the error is returned, leaving the request body fully consumed.
    pub async fn from_multipart(
        mut multipart: Multipart<'_>,
        options: MemoryUploadOptions,
    ) -> Result<MemoryUpload, MemoryUploadError> {
        let mut factory = MemoryFieldItemFactory::with_capacity(options.item_capacity)
            .multi_marker(options.multi_marker);

        let mut items: HashMap<Arc<str>, MemoryFieldItem> = HashMap::new();

        let mut output_err: Option<MemoryUploadError> = None;

        'outer: while let Some(mut entry) = multipart.next_field().await? {
            let field_name = match entry.name() {
                Some(name) => String::from(name),
                None => continue,
            };

            let content_type = entry.content_type().cloned();
            let file_name = entry.file_name().map(String::from);

            // A plain form field carries no filename parameter in its Content-Disposition header.
            let is_form_field = file_name.is_none();

            // To deal with the weird behavior of web browsers
            // If the client wants to upload an empty file, it should not set the filename to empty string.
            // The HTTP request body of an empty file input in a HTML form sent by web browsers:
            // Content-Disposition: form-data; name="???"; filename=""
            // Content-Type: application/octet-stream
            let might_be_empty_file_input_in_html = matches!(file_name.as_deref(), Some(""));

            // The first non-empty chunk is fetched before the factory is called, so a skipped empty file input consumes no counter value.
            let mut first_chunk = None;

            loop {
                match entry.chunk().await {
                    Ok(Some(bytes)) => {
                        if !bytes.is_empty() {
                            first_chunk = Some(bytes);

                            break;
                        }
                    },
                    Ok(None) => break,
                    Err(err) => {
                        output_err = Some(err.into());

                        break 'outer;
                    },
                }
            }

            if might_be_empty_file_input_in_html && first_chunk.is_none() {
                // This field might be from an empty file input in the HTML form, so ignore it.
                continue;
            }

            let mut item = factory.create_item(&field_name, content_type, is_form_field, file_name);

            if let Some(bytes) = first_chunk {
                if let Err(err) = item.write_all(bytes.as_ref()) {
                    output_err = Some(err.into());

                    break;
                }
            }

            loop {
                match entry.chunk().await {
                    Ok(bytes) => {
                        match bytes {
                            Some(bytes) => {
                                if let Err(err) = item.write_all(bytes.as_ref()) {
                                    output_err = Some(err.into());

                                    break 'outer;
                                }
                            },
                            None => break,
                        }
                    },
                    Err(err) => {
                        output_err = Some(err.into());

                        break 'outer;
                    },
                }
            }

            items.insert(Arc::from(item.field_name()), item);
        }

        if let Some(err) = output_err {
            loop {
                if multipart.next_field().await?.is_none() {
                    break;
                }
            }

            Err(err)
        } else {
            Ok(MemoryUpload {
                items,
            })
        }
    }
}
