use crate::audio::AudioSession;
use crate::core::{ParticleField, SharedPointer};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation tick reads or writes.
pub struct FrameContext {
    pub field: ParticleField,
    pub pointer: SharedPointer,
    pub session: Rc<RefCell<Option<AudioSession>>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub started: Instant,
}

impl FrameContext {
    /// Read inputs, recompute the field, hand buffers to the renderer.
    pub fn frame(&mut self) {
        let time_sec = self.started.elapsed().as_secs_f32();

        let features = self
            .session
            .borrow_mut()
            .as_mut()
            .map(|session| session.snapshot());
        let rotation = self.field.rotation(time_sec);
        let pointer = self.pointer.snapshot().map(|p| p.to_model(rotation));

        self.field.update(features.as_ref(), pointer, time_sec);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_ambient_clear(features.map(|f| f.amplitude).unwrap_or(0.0));
            if let Err(e) = g.render(self.field.positions(), self.field.colors(), rotation) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    camera_z: f32,
    capacity: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, camera_z, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owner of a running requestAnimationFrame loop.
///
/// The tick closure re-schedules itself through `tick`; `cancel` cancels the
/// pending frame and drops the closure, which breaks that cycle.
pub struct LoopHandle {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);

    LoopHandle { tick, pending }
}
