//! WASM bindings for the confetti engine.
//!
//! Exports [`Confetti`], a fire-and-forget overlay bound to one host
//! container element. Construction creates a full-bleed, non-interactive
//! `<canvas>` as the container's first child and registers a window resize
//! listener that resyncs canvas pixel size and field bounds (dimensions
//! only — never particles). `start()` drives the field through a
//! self-rescheduling `requestAnimationFrame` loop; `stop()` cancels the
//! pending frame and leaves the last-drawn pixels in place.
//!
//! Teardown: the resize listener and any pending frame are released when
//! the exported handle is freed from JS (`Drop`), not on `stop`, so
//! stop/start cycles keep the overlay correctly sized. The canvas itself
//! stays in the DOM in its last-drawn state.

mod surface;

pub use surface::CanvasSurface;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use confetti_core::{Effect, Palette};
use confetti_fall::{ConfettiFall, FallParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

/// Shared slot for the self-rescheduling frame callback.
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A falling-confetti overlay bound to one host container.
#[wasm_bindgen]
pub struct Confetti {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<ConfettiFall>>,
    surface: Rc<RefCell<CanvasSurface>>,
    raf_id: Rc<Cell<Option<i32>>>,
    frame: FrameClosure,
    on_resize: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl Confetti {
    /// Creates an overlay on `container`, seeded from the current time.
    ///
    /// Fails loudly if the document is unavailable or the canvas cannot
    /// provide a 2D context — the effect has no fallback rendering path.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement) -> Result<Confetti, JsValue> {
        Self::build(container, Palette::festive(), js_sys::Date::now() as u64)
    }

    /// Creates an overlay with a fixed seed, for reproducible showers.
    pub fn with_seed(container: HtmlElement, seed: u64) -> Result<Confetti, JsValue> {
        Self::build(container, Palette::festive(), seed)
    }

    /// Creates an overlay with a named built-in palette and a fixed seed.
    pub fn with_palette(
        container: HtmlElement,
        palette: &str,
        seed: u64,
    ) -> Result<Confetti, JsValue> {
        let palette = Palette::from_name(palette).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(container, palette, seed)
    }

    /// Seeds a fresh batch of particles and begins the frame loop.
    ///
    /// Any stale pending frame is cancelled first, so calling `start`
    /// twice never double-drives the loop.
    pub fn start(&self) {
        self.cancel_frame();
        self.field.borrow_mut().start();
        self.raf_id.set(request_frame(&self.frame));
    }

    /// Cancels the pending frame, if any. Idempotent, and callable before
    /// any `start`. The canvas retains the last-drawn frame.
    pub fn stop(&self) {
        self.cancel_frame();
        self.field.borrow_mut().stop();
    }

    /// Returns whether a frame is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    /// The overlay canvas element.
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }

    /// Current effect parameters as a JSON string.
    pub fn params(&self) -> String {
        self.field.borrow().params().to_string()
    }
}

impl Confetti {
    fn build(container: HtmlElement, palette: Palette, seed: u64) -> Result<Confetti, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let (width, height) = container_size(&container);
        canvas.set_width(width);
        canvas.set_height(height);

        // Full-bleed overlay that never intercepts pointer input.
        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("pointer-events", "none")?;
        container.insert_before(&canvas, container.first_child().as_ref())?;

        // No 2D context is a fatal configuration error: no retry, no
        // degraded mode.
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into()?;

        let field = ConfettiFall::new(
            width as f64,
            height as f64,
            seed,
            palette,
            FallParams::default(),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let field = Rc::new(RefCell::new(field));
        let surface = Rc::new(RefCell::new(CanvasSurface::new(
            ctx,
            width as f64,
            height as f64,
        )));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frame: FrameClosure = Rc::new(RefCell::new(None));

        *frame.borrow_mut() = Some(Closure::new({
            let field = Rc::clone(&field);
            let surface = Rc::clone(&surface);
            let raf_id = Rc::clone(&raf_id);
            let frame = Rc::clone(&frame);
            move || {
                let result = field.borrow_mut().tick(&mut *surface.borrow_mut());
                if let Err(e) = result {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "confetti tick failed: {e}"
                    )));
                }
                raf_id.set(request_frame(&frame));
            }
        }));

        // Resize only resyncs dimensions; particles are never repositioned.
        // A particle briefly outside smaller bounds is culled next tick.
        let on_resize: Closure<dyn FnMut()> = Closure::new({
            let container = container.clone();
            let canvas = canvas.clone();
            let field = Rc::clone(&field);
            let surface = Rc::clone(&surface);
            move || {
                let (w, h) = container_size(&container);
                canvas.set_width(w);
                canvas.set_height(h);
                field.borrow_mut().resize(w as f64, h as f64);
                surface.borrow_mut().set_size(w as f64, h as f64);
            }
        });
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        Ok(Confetti {
            canvas,
            field,
            surface,
            raf_id,
            frame,
            on_resize,
        })
    }

    fn cancel_frame(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for Confetti {
    fn drop(&mut self) {
        self.cancel_frame();
        // The frame closure holds an Rc back to its own slot so it can
        // reschedule itself; taking it out breaks that cycle and frees the
        // field and surface with it.
        self.frame.borrow_mut().take();
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
    }
}

/// The container's current rendered size, clamped to at least 1x1 so a
/// collapsed container still yields a constructible field.
fn container_size(container: &HtmlElement) -> (u32, u32) {
    let width = container.offset_width().max(1) as u32;
    let height = container.offset_height().max(1) as u32;
    (width, height)
}

/// Schedules the stored frame closure, returning the new handle, or `None`
/// if scheduling is impossible (no window, no closure).
fn request_frame(frame: &FrameClosure) -> Option<i32> {
    let window = web_sys::window()?;
    let slot = frame.borrow();
    let closure = slot.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            web_sys::console::error_1(&e);
            None
        }
    }
}
