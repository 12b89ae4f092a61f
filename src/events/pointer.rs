use crate::camera;
use crate::constants::{CAMERA_Z, POINTER_RAY_DISTANCE};
use crate::core::SharedPointer;
use crate::dom::EventListener;
use crate::input;
use glam::Vec3;
use web_sys as web;

const PRIMARY_BUTTON: i16 = 0;

fn project(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec3 {
    let px = input::pointer_canvas_px(ev, canvas);
    camera::pointer_world(
        canvas.width() as f32,
        canvas.height() as f32,
        px.x,
        px.y,
        CAMERA_Z,
        POINTER_RAY_DISTANCE,
    )
}

/// Attach pointer listeners that write into `pointer`. The frame loop reads the
/// same cell once per tick.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, pointer: &SharedPointer) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(5);

    {
        let canvas_m = canvas.clone();
        let pointer = pointer.clone();
        listeners.push(EventListener::typed(
            canvas,
            "pointermove",
            move |ev: &web::PointerEvent| {
                pointer.set_position(project(ev, &canvas_m));
            },
        ));
    }
    {
        let canvas_d = canvas.clone();
        let pointer = pointer.clone();
        listeners.push(EventListener::typed(
            canvas,
            "pointerdown",
            move |ev: &web::PointerEvent| {
                if ev.button() != PRIMARY_BUTTON {
                    return;
                }
                pointer.set_position(project(ev, &canvas_d));
                pointer.set_engaged(true);
                _ = canvas_d.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            },
        ));
    }
    if let Some(window) = web::window() {
        let pointer = pointer.clone();
        listeners.push(EventListener::typed(
            &window,
            "pointerup",
            move |ev: &web::PointerEvent| {
                if ev.button() == PRIMARY_BUTTON {
                    pointer.set_engaged(false);
                }
            },
        ));
    }
    for event in ["pointerleave", "pointercancel"] {
        let pointer = pointer.clone();
        listeners.push(EventListener::new(canvas, event, move |_| pointer.clear()));
    }

    listeners
}
