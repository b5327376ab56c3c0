//! Native host: the widget without a browser.
//!
//! Files come from disk, data URLs are encoded with `base64`, and the browser's
//! event loop is replaced by a queue of pending reads and image loads that
//! [`NativeWidget::run_until_idle`] drains.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use image_input_core::prelude::*;
use image_input_core::{data_url, mime_from_filename};

use crate::error::{Result, WidgetError};

/// A file on disk with the MIME type a browser would guess for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFile {
    pub path: PathBuf,
    pub mime_type: String,
}

impl NativeFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            mime_type: mime_from_filename(&name).to_string(),
            path,
        }
    }

    /// Read the file into a data URL.
    pub fn read_data_url(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|source| WidgetError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(data_url::encode(&self.mime_type, &bytes))
    }
}

impl CandidateFile for NativeFile {
    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// What the page would show: image source, classes, link visibility, alerts.
#[derive(Debug, Default)]
pub struct NativeHost {
    pub source: String,
    pub drag_over: bool,
    pub reset_visible: bool,
    pub alerts: Vec<String>,
    pending_reads: VecDeque<NativeFile>,
    pending_loads: usize,
}

impl Host for NativeHost {
    type File = NativeFile;

    fn set_drag_over(&mut self, on: bool) {
        self.drag_over = on;
    }

    fn set_source(&mut self, src: &str) {
        self.source = src.to_string();
        self.pending_loads += 1;
    }

    fn focus(&mut self) {}

    fn alert(&mut self, message: &str) {
        log::warn!("alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn open_picker(&mut self, accept: &str) {
        log::info!("no file dialog on native (accept={}); pass files as arguments", accept);
    }

    fn close_picker(&mut self) {}

    fn read_as_data_url(&mut self, file: NativeFile) {
        self.pending_reads.push_back(file);
    }

    fn set_reset_visible(&mut self, visible: bool) {
        self.reset_visible = visible;
    }
}

/// A widget bound to a [`NativeHost`].
pub struct NativeWidget {
    widget: ImageInput<NativeFile>,
    host: NativeHost,
}

impl NativeWidget {
    /// An image showing its default source (or nothing) with the widget attached.
    pub fn new(config: WidgetConfig, default_source: Option<String>) -> Self {
        let source = default_source.clone().unwrap_or_default();
        let widget = ImageInput::new(config, source.clone(), default_source);
        let mut host = NativeHost {
            source,
            ..NativeHost::default()
        };
        dispatch(&mut host, widget.attach());
        Self { widget, host }
    }

    pub fn widget(&self) -> &ImageInput<NativeFile> {
        &self.widget
    }

    pub fn host(&self) -> &NativeHost {
        &self.host
    }

    /// Drag the given paths over the image and drop them.
    pub fn drop_paths<P: AsRef<Path>>(&mut self, paths: &[P]) {
        let files = paths
            .iter()
            .map(|p| NativeFile::from_path(p.as_ref()))
            .collect();
        let entered = self.widget.drag_enter();
        dispatch(&mut self.host, entered.commands);
        let dropped = self.widget.drop(files);
        dispatch(&mut self.host, dropped.commands);
    }

    /// Activate the remove-image link.
    pub fn reset(&mut self) {
        let reaction = self.widget.reset();
        dispatch(&mut self.host, reaction.commands);
    }

    /// Finish pending reads and deliver the resulting load events.
    pub fn run_until_idle(&mut self) {
        loop {
            if let Some(file) = self.host.pending_reads.pop_front() {
                let commands = match file.read_data_url() {
                    Ok(url) => self.widget.read_completed(url),
                    Err(e) => self.widget.read_failed(&e.to_string()),
                };
                dispatch(&mut self.host, commands);
            } else if self.host.pending_loads > 0 {
                self.host.pending_loads -= 1;
                let commands = self.widget.image_loaded();
                dispatch(&mut self.host, commands);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("image_input_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_native_file_mime() {
        assert_eq!(NativeFile::from_path("a/b/photo.JPEG").mime_type, "image/jpeg");
        assert_eq!(NativeFile::from_path("logo.png").mime_type, "image/png");
        assert_eq!(NativeFile::from_path("noext").mime_type, "");
    }

    #[test]
    fn test_drop_jpeg_from_disk() {
        let dir = scratch_dir("drop_jpeg");
        let path = dir.join("photo.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF]).unwrap();

        let mut native = NativeWidget::new(WidgetConfig::default(), Some("unknown.png".into()));
        assert!(!native.host().reset_visible);

        native.drop_paths(&[&path]);
        native.run_until_idle();

        assert_eq!(native.host().source, "data:image/jpeg;base64,/9j/");
        assert!(!native.host().drag_over);
        assert!(native.host().reset_visible);

        native.reset();
        native.run_until_idle();
        assert_eq!(native.host().source, "unknown.png");
        assert!(!native.host().reset_visible);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_drop_png_alerts() {
        let mut native = NativeWidget::new(WidgetConfig::default(), Some("unknown.png".into()));
        native.drop_paths(&["logo.png"]);
        native.run_until_idle();

        assert_eq!(native.host().alerts.len(), 1);
        assert_eq!(native.host().source, "unknown.png");
        assert!(!native.host().drag_over);
    }

    #[test]
    fn test_missing_file_keeps_default() {
        let dir = scratch_dir("missing");
        let mut native = NativeWidget::new(WidgetConfig::default(), None);
        native.drop_paths(&[dir.join("does-not-exist.jpg")]);
        native.run_until_idle();

        assert_eq!(native.host().source, "");
        assert!(!native.host().drag_over);
        assert!(native.host().alerts.is_empty());

        std::fs::remove_dir_all(dir).ok();
    }
}
