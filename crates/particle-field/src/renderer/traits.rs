//! Drawing-surface contract.
//!
//! The engine never talks to a graphics API directly. It produces a
//! [`DrawList`] per frame and hands it to a `Surface`, which owns the
//! backing buffer and the device-pixel transform.

use super::draw_list::DrawList;
use crate::api::types::Rgba;
use crate::core::viewport::ViewportGeometry;

/// A 2D drawing target sized in CSS pixels.
///
/// # Example Implementation
///
/// ```ignore
/// struct CanvasSurface {
///     canvas: web_sys::HtmlCanvasElement,
///     ctx: web_sys::CanvasRenderingContext2d,
/// }
///
/// impl Surface for CanvasSurface {
///     fn backend(&self) -> &'static str { "canvas2d" }
///
///     fn resize(&mut self, geometry: &ViewportGeometry, background: Rgba) {
///         // Set buffer + CSS size, reapply the dpr transform...
///     }
///
///     fn set_background(&mut self, background: Rgba) { /* ... */ }
///
///     fn draw(&mut self, frame: &DrawList) {
///         // Replay commands in order...
///     }
/// }
/// ```
pub trait Surface {
    /// Backend identifier (e.g. "canvas2d").
    fn backend(&self) -> &'static str;

    /// Resize the backing buffer to `geometry.buffer_size()`, set the displayed
    /// size to the CSS size, and reapply the `device_pixel_ratio` scale so later
    /// draws are issued in CSS pixels.
    fn resize(&mut self, geometry: &ViewportGeometry, background: Rgba);

    /// Change the base color shown beneath the drawn frames.
    fn set_background(&mut self, background: Rgba);

    /// Replay a frame's commands in order.
    fn draw(&mut self, frame: &DrawList);
}
