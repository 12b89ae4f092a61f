use glam::Vec2;
use web_sys as web;

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// First file carried by a drop, if any.
pub fn dropped_file(ev: &web::DragEvent) -> Option<web::File> {
    ev.data_transfer()?.files()?.get(0)
}

/// First file selected in an `<input type=file>`.
pub fn picked_file(input: &web::HtmlInputElement) -> Option<web::File> {
    input.files()?.get(0)
}
