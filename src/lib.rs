// WebAssembly backend for the hero section's particle decoration. The
// simulation and drawing live here in Rust; the host page only creates the
// effect, forwards container resizes, and keeps the returned handle around
// to stop the animation when the section goes away.

mod color;
mod config;
mod field;
mod particle;
mod surface;
mod utils;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

pub use crate::color::Color;
pub use crate::config::{FieldConfig, InvalidConfiguration};
pub use crate::field::ParticleField;
pub use crate::surface::{CanvasSurface, Surface};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// One particle decoration attached to a host container. Owns the canvas it
// created, the field state, and the cancellation flag for the frame loop.
#[wasm_bindgen]
pub struct ParticleEffect {
    field: Rc<RefCell<ParticleField>>,
    canvas: HtmlCanvasElement,
    container: HtmlElement,
    context: Option<CanvasRenderingContext2d>,
    running: Cell<bool>,
    stopped: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl ParticleEffect {
    // Create a canvas overlay inside `container`, sized to it, and seed the
    // particle field. Mirrors the styling the themes give the decoration:
    // pinned to the container, ignoring pointer events, at 30% opacity.
    pub fn attach(container: HtmlElement, config: &FieldConfig) -> Result<ParticleEffect, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("opacity", "0.3")?;

        container.style().set_property("position", "relative")?;
        container.append_child(&canvas)?;

        let width = container.offset_width().max(0) as u32;
        let height = container.offset_height().max(0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // A canvas without a 2d context still renders the rest of the page
        // fine; the effect just no-ops every frame.
        let context = canvas
            .get_context("2d")?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

        let field = ParticleField::new(config, width, height)?;

        console::log_1(
            &format!(
                "ParticleEffect attached: {} particles over {}x{}",
                field.particle_count(),
                width,
                height
            )
            .into(),
        );

        Ok(ParticleEffect {
            field: Rc::new(RefCell::new(field)),
            canvas,
            container,
            context,
            running: Cell::new(false),
            stopped: Rc::new(Cell::new(false)),
        })
    }

    // Resize the drawing surface. Particle coordinates are untouched.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.borrow_mut().resize(width, height);
    }

    // Convenience for the host page's resize listener
    pub fn resize_to_container(&self) {
        let width = self.container.offset_width().max(0) as u32;
        let height = self.container.offset_height().max(0) as u32;
        self.resize(width, height);
    }

    // One simulation step plus one draw. Exposed so a page can drive frames
    // itself instead of using `start`.
    pub fn frame(&self) {
        self.field.borrow_mut().step();
        if let Some(context) = &self.context {
            let mut surface = CanvasSurface::new(context);
            self.field.borrow().render(&mut surface);
        }
    }

    // Run step+render once per display refresh until `stop` is called.
    // Only one frame chain per effect; a second `start` while running
    // would double the animation speed.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.stopped.get() {
            return Err(JsValue::from_str("ParticleEffect is stopped"));
        }
        if self.running.get() {
            return Err(JsValue::from_str("ParticleEffect is already running"));
        }

        let field = self.field.clone();
        let context = self.context.clone();
        let stopped = self.stopped.clone();

        // The usual self-rescheduling requestAnimationFrame closure: the
        // closure owns itself through `frame_holder` and drops itself once
        // the stop flag is set.
        let frame_holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
            Rc::new(RefCell::new(None));
        let frame_keeper = frame_holder.clone();

        *frame_keeper.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if stopped.get() {
                let _ = frame_holder.borrow_mut().take();
                return;
            }

            field.borrow_mut().step();
            if let Some(context) = &context {
                let mut surface = CanvasSurface::new(context);
                field.borrow().render(&mut surface);
            }

            if let Some(frame) = frame_holder.borrow().as_ref() {
                let _ = request_animation_frame(frame);
            }
        }) as Box<dyn FnMut()>));

        if let Some(frame) = frame_keeper.borrow().as_ref() {
            request_animation_frame(frame)?;
        }

        self.running.set(true);
        console::log_1(&"ParticleEffect animation started".into());
        Ok(())
    }

    // Terminal: the loop exits before its next frame and cannot be restarted
    pub fn stop(&self) {
        self.stopped.set(true);
        console::log_1(&"ParticleEffect animation stopped".into());
    }
}

fn request_animation_frame(frame: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(frame.as_ref().unchecked_ref())
}
