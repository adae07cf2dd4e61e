//! In-memory host and surface for exercising the lifecycle without a browser.

use crate::api::error::HostError;
use crate::api::host::Host;
use crate::api::types::{FrameHandle, Rgba, TimerHandle};
use crate::core::viewport::ViewportGeometry;
use crate::renderer::draw_list::{DrawCommand, DrawList};
use crate::renderer::traits::Surface;

/// Host with a manually advanced clock.
pub struct FakeHost {
    pub now: f64,
    pub geometry: ViewportGeometry,
    pub listening: bool,
    pub fail_frames: bool,
    pub fail_timers: bool,
    pub fail_listen: bool,
    pub frames_requested: u32,
    next_handle: i32,
    frames: Vec<FrameHandle>,
    timers: Vec<(TimerHandle, f64)>,
}

impl FakeHost {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            now: 0.0,
            geometry: ViewportGeometry::new(width, height, dpr),
            listening: false,
            fail_frames: false,
            fail_timers: false,
            fail_listen: false,
            frames_requested: 0,
            next_handle: 1,
            frames: Vec::new(),
            timers: Vec::new(),
        }
    }

    fn handle(&mut self) -> i32 {
        let h = self.next_handle;
        self.next_handle += 1;
        h
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.geometry = ViewportGeometry::new(width, height, self.geometry.device_pixel_ratio);
    }

    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn live_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn timer_handles(&self) -> Vec<TimerHandle> {
        self.timers.iter().map(|(h, _)| *h).collect()
    }

    /// Remove and return timers whose deadline has passed, earliest first.
    pub fn take_due_timers(&mut self) -> Vec<TimerHandle> {
        let now = self.now;
        let mut due: Vec<(TimerHandle, f64)> = self.timers.iter().copied().filter(|(_, at)| *at <= now).collect();
        self.timers.retain(|(_, at)| *at > now);
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        due.into_iter().map(|(h, _)| h).collect()
    }

    /// Remove and return the pending frame request, if any.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frames.pop()
    }
}

impl Host for FakeHost {
    fn now(&self) -> f64 {
        self.now
    }

    fn viewport(&self) -> ViewportGeometry {
        self.geometry
    }

    fn entropy(&self) -> u64 {
        0x5eed
    }

    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        if self.fail_frames {
            return Err(HostError::FrameRequest("disabled".into()));
        }
        let h = FrameHandle(self.handle());
        self.frames.push(h);
        self.frames_requested += 1;
        Ok(h)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|h| *h != handle);
    }

    fn start_timer(&mut self, delay_ms: f64) -> Result<TimerHandle, HostError> {
        if self.fail_timers {
            return Err(HostError::TimerRequest("disabled".into()));
        }
        let h = TimerHandle(self.handle());
        self.timers.push((h, self.now + delay_ms));
        Ok(h)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }

    fn listen_resize(&mut self) -> Result<(), HostError> {
        if self.fail_listen {
            return Err(HostError::Listener("disabled".into()));
        }
        self.listening = true;
        Ok(())
    }

    fn unlisten_resize(&mut self) {
        self.listening = false;
    }
}

/// Surface that remembers what it was asked to do.
#[derive(Default)]
pub struct RecordingSurface {
    pub resizes: Vec<ViewportGeometry>,
    pub background: Option<Rgba>,
    pub frames_drawn: u32,
    pub last_frame: Vec<DrawCommand>,
}

impl Surface for RecordingSurface {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn resize(&mut self, geometry: &ViewportGeometry, background: Rgba) {
        self.resizes.push(*geometry);
        self.background = Some(background);
    }

    fn set_background(&mut self, background: Rgba) {
        self.background = Some(background);
    }

    fn draw(&mut self, frame: &DrawList) {
        self.frames_drawn += 1;
        self.last_frame = frame.commands().to_vec();
    }
}
