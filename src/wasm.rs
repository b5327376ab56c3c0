use image_input_core::{LogLevel, WidgetConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::error::{Result, WidgetError, js_message};
use crate::wasm_dom;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Log everything to the console; the configured level filters it below
    console_log::init_with_level(log::Level::Trace).ok();
    log::set_max_level(LogLevel::default().to_level_filter());
}

/// Turn every `<img>` matching `selector` into an image-input widget.
///
/// Returns the number of widgets attached.
#[wasm_bindgen(js_name = imageInput)]
pub fn image_input(selector: &str) -> std::result::Result<u32, JsValue> {
    Ok(attach_all(selector, &WidgetConfig::default())?)
}

/// Like `imageInput`, with a JSON configuration object (see `WidgetConfig`).
#[wasm_bindgen(js_name = imageInputWithConfig)]
pub fn image_input_with_config(selector: &str, config: &str) -> std::result::Result<u32, JsValue> {
    let config = WidgetConfig::from_json(config).map_err(WidgetError::from)?;
    log::set_max_level(config.log_level.to_level_filter());
    Ok(attach_all(selector, &config)?)
}

fn attach_all(selector: &str, config: &WidgetConfig) -> Result<u32> {
    let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| WidgetError::Selector {
            selector: selector.to_string(),
            message: js_message(&e),
        })?;

    let mut attached = 0;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        match node.dyn_into::<HtmlImageElement>() {
            Ok(image) => {
                wasm_dom::attach(&document, image, config)?;
                attached += 1;
            }
            Err(_) => log::warn!("Skipping non-image element matched by {:?}", selector),
        }
    }

    log::info!("Attached {} image input(s) for {:?}", attached, selector);
    Ok(attached)
}
