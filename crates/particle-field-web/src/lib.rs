//! WASM bridge: mounts a particle field on a `<canvas>` and drives it from
//! the browser's frame, timer and resize callbacks.
//!
//! # Usage
//!
//! ```ignore
//! import init, { ParticleBackground } from "particle_field_web";
//!
//! await init();
//! const bg = new ParticleBackground(canvas, "dark");
//! // ...on unmount:
//! bg.unmount();
//! ```

pub mod host;
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use particle_field::{DisplayMode, FieldConfig, FieldError, FieldRunner, LifecycleState};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use host::WebHost;
pub use surface::CanvasSurface;

use host::RunnerSlot;

pub type WebRunner = FieldRunner<WebHost, CanvasSurface>;

/// JS-facing handle for one mounted background.
///
/// Mount never throws: if the canvas has no 2D context or the browser
/// refuses a resource, the handle is inert and the page keeps its plain
/// background. Dropping the handle (`free()` from JS) tears everything down.
#[wasm_bindgen]
pub struct ParticleBackground {
    slot: Rc<RunnerSlot>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Mount with default settings. `display_mode` is `"dark"` or `"light"`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, display_mode: &str) -> ParticleBackground {
        Self::mount(canvas, DisplayMode::from_name(display_mode), Ok(FieldConfig::default()))
    }

    /// Mount with a JSON config; unspecified fields keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(canvas: HtmlCanvasElement, display_mode: &str, config_json: &str) -> ParticleBackground {
        Self::mount(canvas, DisplayMode::from_name(display_mode), FieldConfig::from_json(config_json))
    }

    /// Switch the base background color. Particles are unaffected.
    #[wasm_bindgen(js_name = setDisplayMode)]
    pub fn set_display_mode(&self, display_mode: &str) {
        if let Ok(mut guard) = self.slot.try_borrow_mut() {
            if let Some(runner) = guard.as_mut() {
                runner.set_display_mode(DisplayMode::from_name(display_mode));
            }
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.slot
            .try_borrow()
            .map(|guard| guard.as_ref().is_some_and(|r| r.state() == LifecycleState::Running))
            .unwrap_or(false)
    }

    /// Cancel the pending frame and resize timer and detach the listener.
    /// Safe to call more than once.
    pub fn unmount(&self) {
        // Take first so the runner (and its closures) drop with no borrow held.
        let runner = match self.slot.try_borrow_mut() {
            Ok(mut guard) => guard.take(),
            Err(_) => {
                log::warn!("particle background: unmount requested from inside a callback");
                None
            }
        };
        if let Some(mut runner) = runner {
            runner.unmount();
        }
    }
}

impl ParticleBackground {
    fn mount(
        canvas: HtmlCanvasElement,
        mode: DisplayMode,
        config: Result<FieldConfig, FieldError>,
    ) -> ParticleBackground {
        init_logging();

        let slot: Rc<RunnerSlot> = Rc::new(RefCell::new(None));
        match try_mount(&slot, canvas, mode, config) {
            Ok(runner) => *slot.borrow_mut() = Some(runner),
            Err(err) => log::warn!("particle background disabled: {}", err),
        }
        ParticleBackground { slot }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn try_mount(
    slot: &Rc<RunnerSlot>,
    canvas: HtmlCanvasElement,
    mode: DisplayMode,
    config: Result<FieldConfig, FieldError>,
) -> Result<WebRunner, FieldError> {
    let config = config?;
    let surface = CanvasSurface::new(canvas)?;
    let host = WebHost::new(Rc::downgrade(slot))?;
    FieldRunner::mount(host, surface, config, mode)
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already-initialized on later mounts; that error is expected.
    let _ = console_log::init_with_level(log::Level::Info);
}
