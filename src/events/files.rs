use crate::constants::FILE_INPUT_ID;
use crate::dom::EventListener;
use crate::input;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Route files from drag-and-drop and the `#file-input` picker to `on_file`.
///
/// No filtering happens here; `on_file` decides whether the file is usable.
pub fn wire_file_sources(
    document: &web::Document,
    on_file: Rc<dyn Fn(web::File)>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(3);

    if let Some(window) = web::window() {
        // Without this the browser navigates to the dropped file.
        listeners.push(EventListener::typed(
            &window,
            "dragover",
            |ev: &web::DragEvent| ev.prevent_default(),
        ));
        let on_drop = on_file.clone();
        listeners.push(EventListener::typed(
            &window,
            "drop",
            move |ev: &web::DragEvent| {
                ev.prevent_default();
                if let Some(file) = input::dropped_file(ev) {
                    on_drop(file);
                }
            },
        ));
    }

    if let Some(picker) = document
        .get_element_by_id(FILE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        let picker_c = picker.clone();
        listeners.push(EventListener::new(&picker, "change", move |_| {
            if let Some(file) = input::picked_file(&picker_c) {
                on_file(file);
            }
        }));
    } else {
        log::debug!("[files] no #{} element; drag-and-drop only", FILE_INPUT_ID);
    }

    listeners
}
