use crate::constants::HINT_ID;
use crate::core::TrackKind;
use web_sys as web;

const IDLE_HINT: &str = "Drop an .mp3 or .mid file (or use the picker)";

/// Show what is loaded, or the idle prompt when nothing is.
pub fn update_hint(document: &web::Document, track: Option<(&str, TrackKind)>) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let text = match track {
            Some((name, kind)) => format!("{}: {}", kind.status_label(), name),
            None => IDLE_HINT.to_string(),
        };
        el.set_text_content(Some(&text));
    }
}

#[inline]
pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.set_text_content(Some(&format!("Could not load: {}", message)));
    }
}
