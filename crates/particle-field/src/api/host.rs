use super::error::HostError;
use super::types::{FrameHandle, TimerHandle};
use crate::core::viewport::ViewportGeometry;

/// Everything the field needs from its embedding environment.
///
/// The browser bridge implements this on top of `window`; tests implement it
/// with a simulated clock. Callbacks flow the other way: when a requested
/// frame, timer or resize notification arrives, the host calls back into
/// [`FieldRunner`](crate::runner::FieldRunner).
pub trait Host {
    /// Monotonic clock in ms, same timebase as frame timestamps.
    fn now(&self) -> f64;

    /// Current inner viewport size and device pixel ratio.
    fn viewport(&self) -> ViewportGeometry;

    /// Seed material for the particle layout when the config carries none.
    fn entropy(&self) -> u64;

    /// Ask for one callback on the next display refresh.
    fn request_frame(&mut self) -> Result<FrameHandle, HostError>;

    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start a one-shot timer that fires after `delay_ms`.
    fn start_timer(&mut self, delay_ms: f64) -> Result<TimerHandle, HostError>;

    fn cancel_timer(&mut self, handle: TimerHandle);

    /// Begin delivering viewport resize notifications.
    fn listen_resize(&mut self) -> Result<(), HostError>;

    fn unlisten_resize(&mut self);
}
