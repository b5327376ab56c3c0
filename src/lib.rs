//! image_input - an image you can click, drop a JPEG onto, or activate with the
//! space bar to preview a local file as a data URL.
//!
//! The widget logic lives in `image_input_core`. This crate binds it to the
//! browser DOM (wasm32) or to the filesystem (native harness).

mod error;

pub use error::{Result, WidgetError};
pub use image_input_core::{
    CandidateFile, Command, ConfigError, EventOutcome, Host, ImageInput, Key, LogLevel, Reaction,
    WidgetConfig, data_url, dispatch,
};

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
mod wasm_dom;
#[cfg(target_arch = "wasm32")]
mod wasm_file;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
