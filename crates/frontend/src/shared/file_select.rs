//! Files picked by the user (input or drag-and-drop)
//!
//! The browser `File` is kept as-is so the exact bytes the user picked are
//! what gets uploaded. In-memory files exist for tests and generated content.

use contracts::shared::api_error::ApiError;
use contracts::shared::file_info::FileInfo;
use std::rc::Rc;
use web_sys::{Blob, BlobPropertyBag, DragEvent, Event, File, HtmlInputElement, Url};

#[derive(Debug, Clone)]
enum FileSource {
    Browser(File),
    Memory(Rc<Vec<u8>>),
}

#[derive(Debug, Clone)]
pub struct SelectedFile {
    info: FileInfo,
    source: FileSource,
}

impl SelectedFile {
    pub fn from_browser(file: File) -> Self {
        let info = FileInfo::new(file.name(), file.type_(), file.size() as u64);
        Self {
            info,
            source: FileSource::Browser(file),
        }
    }

    pub fn from_bytes(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let info = FileInfo::new(name, media_type, bytes.len() as u64);
        Self {
            info,
            source: FileSource::Memory(Rc::new(bytes)),
        }
    }

    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn to_blob(&self) -> Result<Blob, ApiError> {
        match &self.source {
            FileSource::Browser(file) => Ok(file.clone().into()),
            FileSource::Memory(bytes) => {
                let parts = js_sys::Array::new();
                parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
                let properties = BlobPropertyBag::new();
                properties.set_type(&self.info.media_type);
                Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
                    .map_err(|e| ApiError::Client(format!("Failed to create blob: {:?}", e)))
            }
        }
    }

    /// Object URL for `<img src>` previews; revoke with [`revoke_preview`].
    pub fn preview_url(&self) -> Result<String, ApiError> {
        let blob = self.to_blob()?;
        Url::create_object_url_with_blob(&blob)
            .map_err(|e| ApiError::Client(format!("Failed to create object URL: {:?}", e)))
    }
}

pub fn revoke_preview(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}

/// First file of an `<input type="file">` change event
pub fn file_from_input(ev: &Event) -> Option<SelectedFile> {
    let input: HtmlInputElement = leptos::prelude::event_target(ev);
    let file = input.files()?.get(0)?;
    Some(SelectedFile::from_browser(file))
}

/// First file of a drop event
pub fn file_from_drop(ev: &DragEvent) -> Option<SelectedFile> {
    let file = ev.data_transfer()?.files()?.get(0)?;
    Some(SelectedFile::from_browser(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_file_info() {
        let file = SelectedFile::from_bytes("products.csv", "text/csv", vec![b'a'; 2048]);
        assert_eq!(file.info().size, 2048);
        assert_eq!(file.info().media_type, "text/csv");
        assert_eq!(file.name(), "products.csv");
    }
}
