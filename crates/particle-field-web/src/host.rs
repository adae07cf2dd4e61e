//! Browser-backed [`Host`]: `requestAnimationFrame`, `setTimeout` and the
//! window `resize` event.

use std::cell::RefCell;
use std::rc::Weak;

use particle_field::{FrameHandle, Host, HostError, TimerHandle, ViewportGeometry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window};

use crate::WebRunner;

/// Shared slot the JS-facing handle and every callback look the runner up in.
pub(crate) type RunnerSlot = RefCell<Option<WebRunner>>;

/// Run `f` against the mounted runner, if it still exists and is not already
/// borrowed by an enclosing callback.
pub(crate) fn with_live_runner(slot: &Weak<RunnerSlot>, f: impl FnOnce(&mut WebRunner)) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        return;
    };
    if let Some(runner) = guard.as_mut() {
        f(runner);
    }
}

pub struct WebHost {
    window: Window,
    performance: Performance,
    on_frame: Closure<dyn FnMut(f64)>,
    on_resize: Closure<dyn FnMut()>,
    on_timer: Closure<dyn FnMut(f64)>,
    /// Live timers: our token and the browser's timeout id.
    timers: Vec<(TimerHandle, i32)>,
    next_token: i32,
}

impl WebHost {
    pub(crate) fn new(slot: Weak<RunnerSlot>) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let performance = window.performance().ok_or(HostError::NoClock)?;

        let on_frame = {
            let slot = slot.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                with_live_runner(&slot, |r| {
                    r.on_frame(timestamp);
                });
            }) as Box<dyn FnMut(f64)>)
        };
        let on_resize = {
            let slot = slot.clone();
            Closure::wrap(Box::new(move || {
                with_live_runner(&slot, |r| r.on_resize());
            }) as Box<dyn FnMut()>)
        };
        let on_timer = Closure::wrap(Box::new(move |token: f64| {
            let handle = TimerHandle(token as i32);
            with_live_runner(&slot, |r| {
                r.host_mut().forget_timer(handle);
                r.on_resize_timer(handle);
            });
        }) as Box<dyn FnMut(f64)>);

        Ok(Self {
            window,
            performance,
            on_frame,
            on_resize,
            on_timer,
            timers: Vec::new(),
            next_token: 1,
        })
    }

    fn forget_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }

    fn dimension(value: Result<JsValue, JsValue>) -> f32 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl Host for WebHost {
    fn now(&self) -> f64 {
        self.performance.now()
    }

    fn viewport(&self) -> ViewportGeometry {
        ViewportGeometry::new(
            Self::dimension(self.window.inner_width()),
            Self::dimension(self.window.inner_height()),
            self.window.device_pixel_ratio() as f32,
        )
    }

    fn entropy(&self) -> u64 {
        let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
        (random << 32) ^ self.performance.now().to_bits()
    }

    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| HostError::FrameRequest(describe(e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }

    fn start_timer(&mut self, delay_ms: f64) -> Result<TimerHandle, HostError> {
        let handle = TimerHandle(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                self.on_timer.as_ref().unchecked_ref(),
                delay_ms.round() as i32,
                &JsValue::from(handle.0),
            )
            .map_err(|e| HostError::TimerRequest(describe(e)))?;
        self.timers.push((handle, id));
        Ok(handle)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        if let Some(idx) = self.timers.iter().position(|(h, _)| *h == handle) {
            let (_, id) = self.timers.swap_remove(idx);
            self.window.clear_timeout_with_handle(id);
        }
    }

    fn listen_resize(&mut self) -> Result<(), HostError> {
        self.window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listener(describe(e)))
    }

    fn unlisten_resize(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}
