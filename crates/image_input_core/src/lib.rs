//! image_input_core - the image-input widget without a browser
//!
//! An image element that can be clicked, dropped onto, or activated with the
//! space bar to pick a local JPEG, preview it as a data URL, and be reset to a
//! default source. This crate holds the widget's behavior as a state machine;
//! hosts (the DOM binding, the native harness, tests) feed it events and carry
//! out the [`Command`]s it returns.

mod command;
mod config;
pub mod data_url;
mod error;
mod event;
mod file;
mod widget;

pub use command::{dispatch, Command, CommandKind, Host, Reaction};
pub use config::{
    LogLevel, WidgetConfig, DEFAULT_ACCEPT, DEFAULT_DRAG_OVER_CLASS, DEFAULT_RESET_CLASS,
    DEFAULT_RESET_LABEL, DEFAULT_SOURCE_ATTRIBUTE, DEFAULT_UNSUPPORTED_MESSAGE,
};
pub use error::{ConfigError, Result};
pub use event::{DropEffect, EventOutcome, Key, ESCAPE_KEY_CODE, SPACE_KEY_CODE};
pub use file::{is_jpeg_mime, mime_from_filename, CandidateFile, MemoryFile};
pub use widget::ImageInput;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::command::{dispatch, Command, Host, Reaction};
    pub use crate::config::WidgetConfig;
    pub use crate::event::{EventOutcome, Key};
    pub use crate::file::CandidateFile;
    pub use crate::widget::ImageInput;
}
