/*!
# In-Memory Multipart Upload for Rocket Framework

This crate stores the data of uploaded multipart/form-data fields in memory.

It doesn't support large files. Useful for systems where writing to the file system is not allowed.

Every field of an upload request is materialized as a `MemoryFieldItem`: a byte buffer of a fixed capacity, filled while the request body is parsed and readable afterwards. Files submitted repeatedly under one field name receive distinct derived names, so a multi-file input named `photos[]` yields the items `photos-0`, `photos-1`, and so on.

## Example

```rust
#[macro_use] extern crate rocket;
extern crate rocket_memory_upload;

use rocket::Data;
use rocket::http::ContentType;

use rocket_memory_upload::{MemoryUpload, MemoryUploadError, MemoryUploadOptions};

#[post("/", data = "<data>")]
async fn index(content_type: &ContentType, data: Data<'_>) -> &'static str {
    let options = MemoryUploadOptions::new();

    let mut upload = match MemoryUpload::parse(content_type, data, options).await {
        Ok(upload) => upload,
        Err(MemoryUploadError::FieldStoreError(_)) => return "An uploaded file is too large.",
        Err(_) => return "The upload request is malformed.",
    };

    let photo = upload.items.remove("photos-0"); // Use the remove method to move items out of the MemoryUpload instance.

    if let Some(photo) = photo {
        let _content_type = photo.content_type();
        let _file_name = photo.file_name();
        let _data = photo.bytes();

        // You can now deal with the uploaded file.
    }

    if let Some(name) = upload.items.get("name-0") {
        let _name = name.text();

        // You can now deal with the text data.
    }

    "ok"
}
```
*/

pub extern crate mime;
pub extern crate multer;

mod field_item;
mod memory_field_item;
mod memory_field_item_factory;
mod memory_upload;
mod memory_upload_errors;
mod memory_upload_options;

pub use field_item::*;
pub use memory_field_item::*;
pub use memory_field_item_factory::*;
pub use memory_upload::*;
pub use memory_upload_errors::*;
pub use memory_upload_options::*;
