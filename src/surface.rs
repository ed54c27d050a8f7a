// Drawing surface contract for the particle field, plus the canvas-backed
// implementation. The field only needs two primitives: clear the whole
// surface, and fill one circle. Keeping it a trait lets the simulation be
// exercised without a DOM.

use web_sys::CanvasRenderingContext2d;

use crate::color::Color;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, opacity: f64);
}

// Surface backed by a 2d canvas context on the DOM
pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> Self {
        CanvasSurface { context }
    }
}

impl<'a> Surface for CanvasSurface<'a> {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, opacity: f64) {
        self.context.begin_path();
        // A full arc never fails; swallow the Result so render stays total
        let _ = self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.context
            .set_fill_style(&color.to_css_rgba(opacity).into());
        self.context.fill();
    }
}
