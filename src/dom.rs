use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// An attached DOM listener. Dropping it detaches the callback, so a `Vec` of
/// these is all the teardown bookkeeping a mount needs.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("[dom] add {} listener failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }

    /// Like `new`, but only calls `handler` for events of type `E`.
    pub fn typed<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(&E) + 'static,
    ) -> Self {
        Self::new(target, event, move |ev| {
            if let Some(ev) = ev.dyn_ref::<E>() {
                handler(ev);
            }
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
