//! DOM binding for the image-input widget.
//!
//! [`attach`] makes an `<img>` focusable, inserts the remove-image link after
//! it and wires the image's events into an [`ImageInput`]. Widget state lives
//! in an `Rc<RefCell<_>>` shared by the event closures; each closure borrows it
//! only to compute a [`Reaction`] and releases it before commands run.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use image_input_core::{EventOutcome, Key, WidgetConfig, dispatch};
use image_input_core::{Host, ImageInput, Reaction};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, DragEvent, Event, EventTarget, HtmlAnchorElement, HtmlImageElement,
    HtmlInputElement, KeyboardEvent,
};

use crate::error::{Result, WidgetError};
use crate::wasm_file::{WebFile, files_from_list, read_as_data_url};

type SharedWidget = Rc<RefCell<ImageInput<WebFile>>>;
type Listener = Closure<dyn FnMut(Event)>;

/// The transient file input and the listeners that only it uses.
struct Picker {
    input: HtmlInputElement,
    _listeners: Vec<Listener>,
}

/// The elements one widget controls.
#[derive(Clone)]
struct DomHost {
    document: Document,
    image: HtmlImageElement,
    reset_link: HtmlAnchorElement,
    picker: Rc<RefCell<Option<Picker>>>,
    widget: Weak<RefCell<ImageInput<WebFile>>>,
    drag_over_class: String,
}

impl DomHost {
    fn create_picker(&self, accept: &str) -> Result<Picker> {
        let input: HtmlInputElement = self
            .document
            .create_element("input")
            .map_err(|_| WidgetError::CreateElement("input"))?
            .dyn_into()
            .map_err(|_| WidgetError::NotA("HtmlInputElement"))?;

        input.set_type("file");
        input.set_accept(accept);
        // Off-screen instead of display:none, some browsers refuse to click hidden inputs
        let style = input.style();
        for (name, value) in [("position", "absolute"), ("left", "-9999px"), ("top", "0")] {
            style
                .set_property(name, value)
                .map_err(WidgetError::from_js)?;
        }

        let Some(widget) = self.widget.upgrade() else {
            return Err(WidgetError::Js("widget was dropped".to_string()));
        };

        let mut listeners = Vec::with_capacity(3);

        let (shared, host, picked) = (widget.clone(), self.clone(), input.clone());
        listeners.push(listen(&input, "change", move |event| {
            let files = files_from_list(picked.files());
            log::debug!("picker delivered {} file(s)", files.len());
            react(&shared, &host, event, |w| w.picker_changed(files));
        })?);

        let (shared, host) = (widget.clone(), self.clone());
        listeners.push(listen(&input, "cancel", move |event| {
            react(&shared, &host, event, |w| w.picker_cancelled());
        })?);

        let (shared, host) = (widget, self.clone());
        listeners.push(listen(&input, "keyup", move |event| {
            if let Some(key) = key_of(event) {
                react(&shared, &host, event, |w| w.key_up(key));
            }
        })?);

        self.image
            .after_with_node_1(&input)
            .map_err(WidgetError::from_js)?;
        Ok(Picker {
            input,
            _listeners: listeners,
        })
    }
}

impl Host for DomHost {
    type File = WebFile;

    fn set_drag_over(&mut self, on: bool) {
        let classes = self.image.class_list();
        let result = if on {
            classes.add_1(&self.drag_over_class)
        } else {
            classes.remove_1(&self.drag_over_class)
        };
        if let Err(e) = result {
            log::error!("Failed to toggle drag-over class: {:?}", e);
        }
    }

    fn set_source(&mut self, src: &str) {
        if let Err(e) = self.image.set_attribute("src", src) {
            log::error!("Failed to set image source: {:?}", e);
        }
    }

    fn focus(&mut self) {
        self.image.focus().ok();
    }

    fn alert(&mut self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window object for alert: {}", message);
            return;
        };
        window.alert_with_message(message).ok();
    }

    fn open_picker(&mut self, accept: &str) {
        let picker = match self.create_picker(accept) {
            Ok(picker) => picker,
            Err(e) => {
                log::error!("Failed to create file picker: {}", e);
                return;
            }
        };
        let input = picker.input.clone();
        *self.picker.borrow_mut() = Some(picker);

        log::debug!("opening file dialog (accept={})", accept);
        input.focus().ok();
        input.click();
        input.set_tab_index(-1);
    }

    fn close_picker(&mut self) {
        // Dropping the picker releases its listeners; one may be the caller,
        // wasm-bindgen defers freeing it until that call returns
        let picker = self.picker.borrow_mut().take();
        if let Some(picker) = picker {
            picker.input.remove();
        }
    }

    fn read_as_data_url(&mut self, file: WebFile) {
        let widget = self.widget.clone();
        let mut host = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = read_as_data_url(&file.0).await;
            let Some(widget) = widget.upgrade() else {
                return;
            };
            let commands = match result {
                Ok(url) => widget.borrow_mut().read_completed(url),
                Err(e) => widget.borrow_mut().read_failed(&e.to_string()),
            };
            dispatch(&mut host, commands);
        });
    }

    fn set_reset_visible(&mut self, visible: bool) {
        let value = if visible { "visible" } else { "hidden" };
        if let Err(e) = self.reset_link.style().set_property("visibility", value) {
            log::error!("Failed to update remove-image link: {:?}", e);
        }
    }
}

/// Add an event listener. It stays callable for as long as the returned closure lives.
fn listen(
    target: &EventTarget,
    event_type: &str,
    mut handler: impl FnMut(&Event) + 'static,
) -> Result<Listener> {
    let closure =
        Closure::wrap(Box::new(move |event: Event| handler(&event)) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(WidgetError::from_js)?;
    Ok(closure)
}

/// Feed one event to the widget, apply the outcome, then run the commands.
fn react<F>(widget: &SharedWidget, host: &DomHost, event: &Event, handle: F)
where
    F: FnOnce(&mut ImageInput<WebFile>) -> Reaction<WebFile>,
{
    let reaction = handle(&mut widget.borrow_mut());
    apply_outcome(event, reaction.outcome);
    dispatch(&mut host.clone(), reaction.commands);
}

fn apply_outcome(event: &Event, outcome: EventOutcome) {
    if let Some(effect) = outcome.drop_effect {
        if let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer) {
            transfer.set_drop_effect(effect.as_str());
        }
    }
    if outcome.prevent_default {
        event.prevent_default();
    }
    if outcome.stop_propagation {
        event.stop_propagation();
    }
}

fn key_of(event: &Event) -> Option<Key> {
    event
        .dyn_ref::<KeyboardEvent>()
        .map(|e| Key::from_code(e.key_code()))
}

fn create_reset_link(document: &Document, config: &WidgetConfig) -> Result<HtmlAnchorElement> {
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| WidgetError::CreateElement("a"))?
        .dyn_into()
        .map_err(|_| WidgetError::NotA("HtmlAnchorElement"))?;
    link.set_href("#");
    link.set_text_content(Some(config.reset_label.as_str()));
    link.class_list()
        .add_1(&config.reset_class)
        .map_err(WidgetError::from_js)?;
    Ok(link)
}

/// Turn one `<img>` into an image-input widget.
pub fn attach(document: &Document, image: HtmlImageElement, config: &WidgetConfig) -> Result<()> {
    let source = image.get_attribute("src").unwrap_or_default();
    let default_source = image.get_attribute(&config.default_attribute);
    log::debug!(
        "attaching image input (src={:?}, default={:?})",
        source,
        default_source
    );

    image.set_tab_index(0);
    let reset_link = create_reset_link(document, config)?;
    image
        .after_with_node_1(&reset_link)
        .map_err(WidgetError::from_js)?;

    let widget: SharedWidget = Rc::new(RefCell::new(ImageInput::new(
        config.clone(),
        source,
        default_source,
    )));
    let host = DomHost {
        document: document.clone(),
        image: image.clone(),
        reset_link: reset_link.clone(),
        picker: Rc::new(RefCell::new(None)),
        widget: Rc::downgrade(&widget),
        drag_over_class: config.drag_over_class.clone(),
    };

    // The image and link keep their listeners for the life of the page
    let (shared, h) = (widget.clone(), host.clone());
    listen(&image, "click", move |event| {
        react(&shared, &h, event, |w| w.click());
    })?
    .forget();

    let (shared, h) = (widget.clone(), host.clone());
    listen(&image, "keydown", move |event| {
        if let Some(key) = key_of(event) {
            react(&shared, &h, event, |w| w.key_down(key));
        }
    })?
    .forget();

    let (shared, h) = (widget.clone(), host.clone());
    listen(&image, "keyup", move |event| {
        if let Some(key) = key_of(event) {
            react(&shared, &h, event, |w| w.key_up(key));
        }
    })?
    .forget();

    let (shared, h) = (widget.clone(), host.clone());
    listen(&image, "dragover", move |event| {
        react(&shared, &h, event, |w| w.drag_over());
    })?
    .forget();

    let (shared, h) = (widget.clone(), host.clone());
    listen(&image, "dragenter", move |event| {
        react(&shared, &h, event, |w| w.drag_enter());
    })?
    .forget();

    let (shared, h) = (widget.clone(), host.clone());
    listen(&image, "dragleave", move |event| {
        react(&shared, &h, event, |w| w.drag_leave());
    })?
    .forget();

    let (shared, h) = (widget.clone(), host.clone());
    listen(&image, "drop", move |event| {
        let files = files_from_list(
            event
                .dyn_ref::<DragEvent>()
                .and_then(DragEvent::data_transfer)
                .and_then(|transfer| transfer.files()),
        );
        log::debug!("{} file(s) dropped", files.len());
        react(&shared, &h, event, |w| w.drop(files));
    })?
    .forget();

    let (shared, mut h) = (widget.clone(), host.clone());
    listen(&image, "load", move |_event| {
        let commands = shared.borrow_mut().image_loaded();
        dispatch(&mut h, commands);
    })?
    .forget();

    let (shared, h) = (widget.clone(), host.clone());
    listen(&reset_link, "click", move |event| {
        react(&shared, &h, event, |w| w.reset());
    })?
    .forget();

    let commands = widget.borrow().attach();
    dispatch(&mut host.clone(), commands);
    Ok(())
}
