//! A scripted page for driving widgets in tests.
//!
//! `FakeHost` records what the widget asked for. Reads and image loads are
//! queued and only happen in `Page::run_until_idle`, like callbacks waiting
//! on the browser's event loop.

#![allow(dead_code)]

use std::collections::VecDeque;

use image_input_core::data_url;
use image_input_core::prelude::*;
use image_input_core::MemoryFile;

#[derive(Debug, Default)]
pub struct FakeHost {
    pub source: String,
    pub drag_over: bool,
    pub reset_visible: Option<bool>,
    pub alerts: Vec<String>,
    pub pickers_opened: usize,
    pub picker_present: bool,
    pub focus_count: usize,
    pub fail_reads: bool,
    pending_reads: VecDeque<MemoryFile>,
    pending_loads: usize,
}

impl Host for FakeHost {
    type File = MemoryFile;

    fn set_drag_over(&mut self, on: bool) {
        self.drag_over = on;
    }

    fn set_source(&mut self, src: &str) {
        self.source = src.to_string();
        self.pending_loads += 1;
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn open_picker(&mut self, _accept: &str) {
        assert!(!self.picker_present, "a second picker was opened");
        self.picker_present = true;
        self.pickers_opened += 1;
    }

    fn close_picker(&mut self) {
        self.picker_present = false;
    }

    fn read_as_data_url(&mut self, file: MemoryFile) {
        self.pending_reads.push_back(file);
    }

    fn set_reset_visible(&mut self, visible: bool) {
        self.reset_visible = Some(visible);
    }
}

pub struct Page {
    pub widget: ImageInput<MemoryFile>,
    pub host: FakeHost,
}

impl Page {
    /// An image showing its default (or nothing) with the widget attached.
    pub fn new(default: Option<&str>) -> Self {
        let source = default.unwrap_or("").to_string();
        let widget = ImageInput::new(
            WidgetConfig::default(),
            source.clone(),
            default.map(str::to_string),
        );
        let mut host = FakeHost {
            source,
            ..FakeHost::default()
        };
        dispatch(&mut host, widget.attach());
        Self { widget, host }
    }

    fn apply(&mut self, reaction: Reaction<MemoryFile>) -> EventOutcome {
        dispatch(&mut self.host, reaction.commands);
        reaction.outcome
    }

    pub fn click(&mut self) -> EventOutcome {
        let reaction = self.widget.click();
        self.apply(reaction)
    }

    pub fn press(&mut self, key: Key) -> EventOutcome {
        let reaction = self.widget.key_down(key);
        self.apply(reaction)
    }

    pub fn release(&mut self, key: Key) -> EventOutcome {
        let reaction = self.widget.key_up(key);
        self.apply(reaction)
    }

    pub fn pick(&mut self, files: Vec<MemoryFile>) -> EventOutcome {
        let reaction = self.widget.picker_changed(files);
        self.apply(reaction)
    }

    pub fn cancel_picker(&mut self) -> EventOutcome {
        let reaction = self.widget.picker_cancelled();
        self.apply(reaction)
    }

    pub fn drop_files(&mut self, files: Vec<MemoryFile>) -> EventOutcome {
        let entered = self.widget.drag_enter();
        self.apply(entered);
        let reaction = self.widget.drop(files);
        self.apply(reaction)
    }

    pub fn reset(&mut self) -> EventOutcome {
        let reaction = self.widget.reset();
        self.apply(reaction)
    }

    /// Deliver queued read completions and load events until nothing is left.
    pub fn run_until_idle(&mut self) {
        loop {
            if let Some(file) = self.host.pending_reads.pop_front() {
                let commands = if self.host.fail_reads {
                    self.widget.read_failed("simulated read error")
                } else {
                    let url = data_url::encode(&file.mime_type, &file.bytes);
                    self.widget.read_completed(url)
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

pub fn jpeg(name: &str) -> MemoryFile {
    MemoryFile::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
}

pub fn jpg_upper(name: &str) -> MemoryFile {
    MemoryFile::new(name, "IMAGE/JPG", vec![0xFF, 0xD8, 0xFF, 0xDB])
}

pub fn png(name: &str) -> MemoryFile {
    MemoryFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

pub fn text(name: &str) -> MemoryFile {
    MemoryFile::new(name, "text/plain", b"hello".to_vec())
}
