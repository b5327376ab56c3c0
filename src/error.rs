use image_input_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("No window object")]
    NoWindow,

    #[error("No document object")]
    NoDocument,

    #[error("Invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("Failed to create <{0}> element")]
    CreateElement(&'static str),

    #[error("Element is not an {0}")]
    NotA(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("File reader returned a non-string result")]
    NotDataUrl,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(target_arch = "wasm32")]
mod js {
    use super::WidgetError;
    use wasm_bindgen::{JsCast, JsValue};

    /// Best-effort message from a thrown JS value.
    pub fn js_message(value: &JsValue) -> String {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return String::from(error.message());
        }
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }

    impl WidgetError {
        pub fn from_js(value: JsValue) -> Self {
            WidgetError::Js(js_message(&value))
        }
    }

    impl From<WidgetError> for JsValue {
        fn from(error: WidgetError) -> Self {
            js_sys::Error::new(&error.to_string()).into()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use js::js_message;
