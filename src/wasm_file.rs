//! WASM file loading utilities.
//!
//! Wraps browser `File`s as widget candidates and reads them into data URLs
//! with `FileReader`, awaited through a `Promise`.

use image_input_core::CandidateFile;
use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, FileReader};

use crate::error::{Result, WidgetError};

/// A browser file offered by the picker or a drop.
#[derive(Debug, Clone)]
pub struct WebFile(pub File);

impl CandidateFile for WebFile {
    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn name(&self) -> String {
        self.0.name()
    }
}

/// Collect a (possibly missing) `FileList` in order.
pub fn files_from_list(list: Option<FileList>) -> Vec<WebFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(WebFile)
        .collect()
}

/// Read a file into a base64 data URL.
pub async fn read_as_data_url(file: &File) -> Result<String> {
    let reader = FileReader::new().map_err(WidgetError::from_js)?;
    let done = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(file).map_err(WidgetError::from_js)?;
    JsFuture::from(done).await.map_err(WidgetError::from_js)?;

    let result = reader.result().map_err(WidgetError::from_js)?;
    log::debug!("read {} into a data URL", file.name());
    result.as_string().ok_or(WidgetError::NotDataUrl)
}
