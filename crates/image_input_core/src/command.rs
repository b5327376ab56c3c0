//! Commands produced by the widget and the host that carries them out.
//!
//! The widget never touches the platform directly. Each input event yields a
//! [`Reaction`]; the host applies its [`EventOutcome`] to the native event and
//! then runs the commands in order with [`dispatch`].

use crate::event::EventOutcome;

/// One side effect the host must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<F> {
    /// Add or remove the drag-over class on the image
    SetDragOver(bool),
    /// Assign the image's `src` attribute
    SetSource(String),
    /// Move focus to the image
    Focus,
    /// Show a blocking message to the user
    Alert(String),
    /// Create the transient file input, place it off-screen and invoke it
    OpenPicker { accept: String },
    /// Remove the transient file input
    ClosePicker,
    /// Start reading a file into a data URL
    ReadAsDataUrl(F),
    /// Show or hide the remove-image link
    SetResetVisible(bool),
}

/// Result of feeding one event to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction<F> {
    pub outcome: EventOutcome,
    pub commands: Vec<Command<F>>,
}

impl<F> Reaction<F> {
    /// A reaction that ignores the event.
    pub fn ignore() -> Self {
        Self {
            outcome: EventOutcome::pass(),
            commands: Vec::new(),
        }
    }

    pub fn new(outcome: EventOutcome, commands: Vec<Command<F>>) -> Self {
        Self { outcome, commands }
    }

    /// Whether the widget did anything with the event.
    pub fn is_ignored(&self) -> bool {
        self.outcome.is_pass() && self.commands.is_empty()
    }
}

/// Platform that owns the image element and its sibling controls.
pub trait Host {
    type File;

    fn set_drag_over(&mut self, on: bool);
    fn set_source(&mut self, src: &str);
    fn focus(&mut self);
    fn alert(&mut self, message: &str);
    fn open_picker(&mut self, accept: &str);
    fn close_picker(&mut self);
    /// Begin an asynchronous read. Completion is reported back to the widget
    /// through [`crate::ImageInput::read_completed`] or
    /// [`crate::ImageInput::read_failed`].
    fn read_as_data_url(&mut self, file: Self::File);
    fn set_reset_visible(&mut self, visible: bool);
}

/// Run commands against a host, in order.
pub fn dispatch<H: Host>(host: &mut H, commands: Vec<Command<H::File>>) {
    for command in commands {
        log::trace!("dispatch: {:?}", CommandKind::of(&command));
        match command {
            Command::SetDragOver(on) => host.set_drag_over(on),
            Command::SetSource(src) => host.set_source(&src),
            Command::Focus => host.focus(),
            Command::Alert(message) => host.alert(&message),
            Command::OpenPicker { accept } => host.open_picker(&accept),
            Command::ClosePicker => host.close_picker(),
            Command::ReadAsDataUrl(file) => host.read_as_data_url(file),
            Command::SetResetVisible(visible) => host.set_reset_visible(visible),
        }
    }
}

/// Payload-free discriminant, for logging commands whose file type is not `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    SetDragOver,
    SetSource,
    Focus,
    Alert,
    OpenPicker,
    ClosePicker,
    ReadAsDataUrl,
    SetResetVisible,
}

impl CommandKind {
    pub fn of<F>(command: &Command<F>) -> Self {
        match command {
            Command::SetDragOver(_) => CommandKind::SetDragOver,
            Command::SetSource(_) => CommandKind::SetSource,
            Command::Focus => CommandKind::Focus,
            Command::Alert(_) => CommandKind::Alert,
            Command::OpenPicker { .. } => CommandKind::OpenPicker,
            Command::ClosePicker => CommandKind::ClosePicker,
            Command::ReadAsDataUrl(_) => CommandKind::ReadAsDataUrl,
            Command::SetResetVisible(_) => CommandKind::SetResetVisible,
        }
    }
}
