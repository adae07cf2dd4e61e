//! Canvas 2D implementation of [`Surface`].

use std::f64::consts::TAU;

use particle_field::{DrawCommand, DrawList, HostError, Rgba, Surface, ViewportGeometry};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the canvas' 2D context and mark it as decorative.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HostError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(HostError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::NoContext)?;

        // Background only: hidden from assistive tech, never takes input.
        let _ = canvas.set_attribute("aria-hidden", "true");
        let style = canvas.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("inset", "0");
        let _ = style.set_property("pointer-events", "none");

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn resize(&mut self, geometry: &ViewportGeometry, background: Rgba) {
        let (w, h) = geometry.buffer_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", geometry.css_width));
        let _ = style.set_property("height", &format!("{}px", geometry.css_height));

        // Resizing the buffer resets the context state; reapply the scale.
        let [a, b, c, d, e, f] = geometry.transform();
        let _ = self.ctx.set_transform(a, b, c, d, e, f);

        self.set_background(background);
    }

    fn set_background(&mut self, background: Rgba) {
        let _ = self.canvas.style().set_property("background", &background.to_css());
    }

    fn draw(&mut self, frame: &DrawList) {
        let ctx = &self.ctx;
        for command in frame.iter() {
            match *command {
                DrawCommand::Fade { size, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
                }
                DrawCommand::Circle { center, radius, color } => {
                    ctx.begin_path();
                    let _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                }
                DrawCommand::Line { from, to, width, color } => {
                    ctx.begin_path();
                    ctx.set_stroke_style_str(&color.to_css());
                    ctx.set_line_width(width as f64);
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
            }
        }
    }
}
