#![cfg(target_arch = "wasm32")]
use crate::audio::AudioSession;
use crate::constants::{CAMERA_Z, CANVAS_ID};
use crate::core::{FieldParams, ParticleField, SharedPointer, TrackKind};
use crate::dom::EventListener;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

/// A running visualizer. Dropping it tears everything down.
struct Mounted {
    frame_loop: frame::LoopHandle,
    session: Rc<RefCell<Option<AudioSession>>>,
    listeners: Vec<EventListener>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        if let Some(session) = self.session.borrow_mut().take() {
            session.close();
        }
        self.listeners.clear();
        log::info!("[app] unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
    static MOUNTING: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-swarm starting");
    mount();
    Ok(())
}

/// Build the visualizer on `#app-canvas` if it is not already running.
#[wasm_bindgen]
pub fn mount() {
    if MOUNTED.with(|m| m.borrow().is_some()) || MOUNTING.with(|m| m.replace(true)) {
        return;
    }
    spawn_local(async move {
        match init().await {
            Ok(mounted) => MOUNTED.with(|m| *m.borrow_mut() = Some(mounted)),
            Err(e) => log::error!("init error: {:?}", e),
        }
        MOUNTING.with(|m| m.set(false));
    });
}

/// Stop the frame loop, release audio and detach every listener.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|m| m.borrow_mut().take());
    drop(mounted);
}

fn page_query(window: &web::Window) -> String {
    window.location().search().unwrap_or_default()
}

async fn init() -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let params = FieldParams::from_query(&page_query(&window));
    log::info!(
        "[field] {} particles, radius {:.2}, rotation {:.3} rad/s",
        params.count,
        params.base_radius,
        params.rotation_rate
    );
    let field = ParticleField::new(params);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let mut listeners = Vec::new();
    {
        let canvas_resize = canvas.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas_resize);
        }));
    }

    let pointer = SharedPointer::new();
    listeners.extend(events::wire_pointer(&canvas, &pointer));

    let session: Rc<RefCell<Option<AudioSession>>> = Rc::new(RefCell::new(None));
    let on_file: Rc<dyn Fn(web::File)> = {
        let session = session.clone();
        let generation = Rc::new(Cell::new(0u64));
        let document = document.clone();
        Rc::new(move |file| load_track(file, &session, &generation, &document))
    };
    listeners.extend(events::wire_file_sources(&document, on_file));
    // Deferred: unmounting drops this very listener.
    listeners.push(EventListener::new(&window, "pagehide", |_| {
        spawn_local(async { unmount() })
    }));
    overlay::update_hint(&document, None);

    let gpu = frame::init_gpu(&canvas, CAMERA_Z, field.len()).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        pointer,
        session: session.clone(),
        canvas,
        gpu,
        started: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Mounted {
        frame_loop,
        session,
        listeners,
    })
}

/// Replace the current session with one for `file`. Unsupported files are
/// ignored and leave the current track playing.
fn load_track(
    file: web::File,
    session: &Rc<RefCell<Option<AudioSession>>>,
    generation: &Rc<Cell<u64>>,
    document: &web::Document,
) {
    let name = file.name();
    let Some(kind) = TrackKind::from_file_name(&name) else {
        log::debug!("[files] ignoring {}", name);
        return;
    };
    if let Some(old) = session.borrow_mut().take() {
        old.close();
    }
    let ticket = generation.get().wrapping_add(1);
    generation.set(ticket);

    let session = session.clone();
    let generation = generation.clone();
    let document = document.clone();
    spawn_local(async move {
        let opened = AudioSession::open(&file, kind).await;
        if generation.get() != ticket {
            // a newer file arrived while this one was decoding
            return;
        }
        match opened {
            Ok(s) => {
                let kind = s.kind();
                log::info!("[audio] loaded {} as {:?}", name, kind);
                *session.borrow_mut() = Some(s);
                overlay::update_hint(&document, Some((&name, kind)));
            }
            Err(e) => {
                log::error!("[audio] {}: {}", name, e);
                overlay::show_error(&document, &name);
            }
        }
    });
}
