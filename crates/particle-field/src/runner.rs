use crate::api::config::FieldConfig;
use crate::api::error::FieldError;
use crate::api::host::Host;
use crate::api::types::{DisplayMode, FrameHandle, TimerHandle};
use crate::core::field::ParticleField;
use crate::core::rng::Rng;
use crate::core::time::FrameClock;
use crate::core::viewport::ViewportGeometry;
use crate::renderer::draw_list::DrawList;
use crate::renderer::traits::Surface;
use crate::systems::render::{build_frame, FrameStyle};
use crate::systems::resize::ResizeDebounce;

/// Where a mounted field is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Unmounted,
    Initializing,
    Running,
}

/// Owns one mounted particle field and wires host callbacks to it.
///
/// Frame requests, the debounce timer and the resize listener are acquired in
/// [`FieldRunner::mount`] and released by [`FieldRunner::unmount`], which also
/// runs on drop. Callbacks delivered after teardown are ignored.
pub struct FieldRunner<H: Host, S: Surface> {
    host: H,
    surface: S,
    field: ParticleField,
    geometry: ViewportGeometry,
    clock: FrameClock,
    debounce: ResizeDebounce,
    style: FrameStyle,
    draw_list: DrawList,
    mode: DisplayMode,
    state: LifecycleState,
    pending_frame: Option<FrameHandle>,
    listening: bool,
    frames: u64,
    resizes: u64,
}

impl<H: Host, S: Surface> FieldRunner<H, S> {
    /// Size the surface, seed the particles, attach the resize listener and
    /// schedule the first frame.
    ///
    /// On error every resource acquired so far is released before returning.
    pub fn mount(host: H, mut surface: S, config: FieldConfig, mode: DisplayMode) -> Result<Self, FieldError> {
        config.validate()?;

        let geometry = host.viewport();
        surface.resize(&geometry, mode.background());

        let mut rng = Rng::new(config.seed.unwrap_or_else(|| host.entropy()));
        let field = ParticleField::seed(&config, geometry.bounds(), &mut rng);
        let clock = FrameClock::new(host.now());

        let mut runner = Self {
            host,
            surface,
            field,
            geometry,
            clock,
            debounce: ResizeDebounce::new(config.resize_debounce_ms),
            style: FrameStyle::from_config(&config, mode),
            draw_list: DrawList::with_capacity(1 + config.particle_count * config.particle_count / 2),
            mode,
            state: LifecycleState::Initializing,
            pending_frame: None,
            listening: false,
            frames: 0,
            resizes: 0,
        };

        // Dropping `runner` on `?` tears down whatever was acquired.
        runner.host.listen_resize()?;
        runner.listening = true;
        runner.pending_frame = Some(runner.host.request_frame()?);
        runner.state = LifecycleState::Running;

        log::info!(
            "particle field mounted: {} particles, {}x{} @{}x on {}",
            runner.field.len(),
            geometry.css_width,
            geometry.css_height,
            geometry.device_pixel_ratio,
            runner.surface.backend(),
        );
        Ok(runner)
    }

    /// Display-refresh callback: step, render, schedule the next frame.
    /// Returns false if the frame was ignored.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> bool {
        if self.state != LifecycleState::Running {
            return false;
        }
        self.pending_frame = None;

        let delta = self.clock.tick(timestamp_ms);
        self.field.step(delta);
        build_frame(&self.field, &self.geometry, &self.style, &mut self.draw_list);
        self.surface.draw(&self.draw_list);
        self.frames += 1;

        match self.host.request_frame() {
            Ok(handle) => self.pending_frame = Some(handle),
            Err(err) => log::warn!("particle field stopped: {}", err),
        }
        true
    }

    /// Native resize notification. Restarts the debounce window.
    pub fn on_resize(&mut self) {
        if self.state != LifecycleState::Running {
            return;
        }
        if let Err(err) = self.debounce.notify(&mut self.host) {
            log::warn!("resize debounce unavailable: {}", err);
        }
    }

    /// Debounce timer callback. Applies the resize if `handle` is the live timer.
    /// Returns true if geometry was re-initialized.
    pub fn on_resize_timer(&mut self, handle: TimerHandle) -> bool {
        if self.state != LifecycleState::Running || !self.debounce.fire(handle) {
            return false;
        }
        self.apply_resize();
        true
    }

    fn apply_resize(&mut self) {
        self.geometry = self.host.viewport();
        self.surface.resize(&self.geometry, self.mode.background());
        self.field.resize(self.geometry.bounds());
        self.resizes += 1;
        log::debug!(
            "particle field resized to {}x{} @{}x",
            self.geometry.css_width,
            self.geometry.css_height,
            self.geometry.device_pixel_ratio,
        );
    }

    /// Switch the base background and the fade that settles onto it.
    /// Simulation and particle colors are unaffected.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.style.set_mode(mode);
        if self.state == LifecycleState::Running {
            self.surface.set_background(mode.background());
        }
    }

    /// Cancel the pending frame and debounce timer and remove the resize
    /// listener. Idempotent.
    pub fn unmount(&mut self) {
        if self.state == LifecycleState::Unmounted {
            return;
        }
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
        self.debounce.cancel(&mut self.host);
        if self.listening {
            self.host.unlisten_resize();
            self.listening = false;
        }
        let was_running = self.state == LifecycleState::Running;
        self.state = LifecycleState::Unmounted;
        if was_running {
            log::info!("particle field unmounted after {} frames", self.frames);
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Frames stepped and rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Accepted (post-debounce) resizes so far.
    pub fn resize_count(&self) -> u64 {
        self.resizes
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<H: Host, S: Surface> Drop for FieldRunner<H, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
