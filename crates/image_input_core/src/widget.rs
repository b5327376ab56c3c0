//! The image-input widget state machine.
//!
//! One [`ImageInput`] is bound to one image element. Input events from the
//! host (clicks, keys, drag-and-drop, picker changes, image loads) are turned
//! into [`Reaction`]s. Two paths lead to a file: the transient picker and a
//! drop. Both end in the same acceptance routine, which picks the first JPEG,
//! warns once for every non-JPEG in front of it and asks the host to read the
//! JPEG into a data URL.

use std::marker::PhantomData;

use crate::command::{Command, Reaction};
use crate::config::WidgetConfig;
use crate::event::{DropEffect, EventOutcome, Key};
use crate::file::{is_jpeg_mime, CandidateFile};

/// State of one widget instance.
#[derive(Debug, Clone)]
pub struct ImageInput<F> {
    config: WidgetConfig,
    source: String,
    default_source: Option<String>,
    drag_over: bool,
    picker_open: bool,
    /// Swallow Escape key-ups that may come from cancelling the native dialog.
    escape_guard: bool,
    /// One-time cleanup for the next image load after a JPEG was accepted.
    clear_on_load: bool,
    _file: PhantomData<fn() -> F>,
}

impl<F: CandidateFile> ImageInput<F> {
    /// Bind a widget to an image currently showing `source`.
    pub fn new(
        config: WidgetConfig,
        source: impl Into<String>,
        default_source: Option<String>,
    ) -> Self {
        Self {
            config,
            source: source.into(),
            default_source,
            drag_over: false,
            picker_open: false,
            escape_guard: false,
            clear_on_load: false,
            _file: PhantomData,
        }
    }

    /// Currently displayed source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source the reset link restores: the default, or `""` without one.
    pub fn reset_source(&self) -> &str {
        self.default_source.as_deref().unwrap_or("")
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Whether the remove-image link should be visible. Always derived from the source.
    pub fn reset_visible(&self) -> bool {
        self.source != self.reset_source()
    }

    /// Commands to run once the host has inserted the widget's controls.
    pub fn attach(&self) -> Vec<Command<F>> {
        vec![Command::SetResetVisible(self.reset_visible())]
    }

    // ------------------------------------------------------------------
    // Activation surface
    // ------------------------------------------------------------------

    /// The image was clicked: open a fresh transient picker.
    pub fn click(&mut self) -> Reaction<F> {
        let mut commands = Vec::with_capacity(3);
        if self.picker_open {
            log::debug!("closing stale file picker before opening a new one");
            commands.push(Command::ClosePicker);
        }
        self.picker_open = true;
        self.escape_guard = true;
        commands.push(Command::OpenPicker {
            accept: self.config.accept.clone(),
        });
        // Keep the focus ring on the image, not on the invisible input
        commands.push(Command::Focus);
        Reaction::new(EventOutcome::pass(), commands)
    }

    /// Key pressed while the image has focus. Only the space bar activates.
    pub fn key_down(&mut self, key: Key) -> Reaction<F> {
        if key != Key::Space {
            return Reaction::ignore();
        }
        let activation = self.click();
        Reaction::new(EventOutcome::suppress(), activation.commands)
    }

    /// Key released on the image or the picker.
    pub fn key_up(&mut self, key: Key) -> Reaction<F> {
        if key == Key::Escape && self.escape_guard {
            log::trace!("swallowing Escape from the file dialog");
            return Reaction::new(EventOutcome::suppress(), Vec::new());
        }
        Reaction::ignore()
    }

    /// The picker delivered files.
    pub fn picker_changed(&mut self, files: Vec<F>) -> Reaction<F> {
        self.picker_open = false;
        self.escape_guard = false;
        let mut reaction = self.accept_files(files);
        reaction.commands.push(Command::ClosePicker);
        reaction.commands.push(Command::Focus);
        reaction
    }

    /// The picker was dismissed without a selection.
    pub fn picker_cancelled(&mut self) -> Reaction<F> {
        if !self.picker_open {
            return Reaction::ignore();
        }
        self.picker_open = false;
        Reaction::new(EventOutcome::pass(), vec![Command::ClosePicker])
    }

    // ------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------

    pub fn drag_over(&mut self) -> Reaction<F> {
        Reaction::new(
            EventOutcome::suppress().with_drop_effect(DropEffect::Copy),
            Vec::new(),
        )
    }

    pub fn drag_enter(&mut self) -> Reaction<F> {
        self.drag_over = true;
        Reaction::new(EventOutcome::suppress(), vec![Command::SetDragOver(true)])
    }

    pub fn drag_leave(&mut self) -> Reaction<F> {
        self.drag_over = false;
        Reaction::new(EventOutcome::suppress(), vec![Command::SetDragOver(false)])
    }

    pub fn drop(&mut self, files: Vec<F>) -> Reaction<F> {
        self.accept_files(files)
    }

    // ------------------------------------------------------------------
    // File acceptance and reading
    // ------------------------------------------------------------------

    /// Accept the first JPEG among `files`.
    ///
    /// Every non-JPEG ahead of it raises its own alert. Without any JPEG the
    /// drag-over state is cleared right away, since no load event will follow.
    pub fn accept_files(&mut self, files: Vec<F>) -> Reaction<F> {
        let mut commands = vec![Command::SetDragOver(true)];
        self.drag_over = true;

        for file in files {
            let mime = file.mime_type();
            if is_jpeg_mime(&mime) {
                log::info!("accepting {:?} ({})", file.name(), mime);
                self.clear_on_load = true;
                commands.push(Command::ReadAsDataUrl(file));
                return Reaction::new(EventOutcome::suppress(), commands);
            }
            log::warn!("rejecting {:?}: unsupported type {:?}", file.name(), mime);
            commands.push(Command::Alert(self.config.unsupported_message.clone()));
        }

        self.drag_over = false;
        commands.push(Command::SetDragOver(false));
        Reaction::new(EventOutcome::suppress(), commands)
    }

    /// A read finished. Stale reads are not detected; the last one to finish wins.
    pub fn read_completed(&mut self, data_url: String) -> Vec<Command<F>> {
        log::debug!("read completed ({} bytes of data URL)", data_url.len());
        self.source = data_url.clone();
        vec![Command::SetSource(data_url)]
    }

    /// A read failed. Nothing is shown to the user; the widget drops back to its prior state.
    pub fn read_failed(&mut self, reason: &str) -> Vec<Command<F>> {
        log::warn!("reading the selected file failed: {}", reason);
        self.clear_on_load = false;
        self.drag_over = false;
        vec![Command::SetDragOver(false)]
    }

    /// The image finished loading its current source.
    pub fn image_loaded(&mut self) -> Vec<Command<F>> {
        let mut commands = Vec::with_capacity(2);
        if self.clear_on_load {
            self.clear_on_load = false;
            self.drag_over = false;
            commands.push(Command::SetDragOver(false));
        }
        commands.push(Command::SetResetVisible(self.reset_visible()));
        commands
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// The remove-image link was activated.
    pub fn reset(&mut self) -> Reaction<F> {
        self.source = self.reset_source().to_string();
        Reaction::new(
            EventOutcome::suppress(),
            vec![
                Command::SetSource(self.source.clone()),
                Command::Focus,
                Command::SetResetVisible(self.reset_visible()),
            ],
        )
    }
}
