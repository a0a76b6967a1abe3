use crate::foundation::error::{GaugeError, GaugeResult};

/// Handle for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(pub u64);

/// "Request next frame" / "cancel requested frame" primitives provided by the host.
///
/// The host answers a successful [`FrameScheduler::request_frame`] by calling the driver's
/// `on_frame` with the returned token and a high-resolution timestamp, once.
pub trait FrameScheduler {
    /// Current host time in milliseconds, on the same clock as frame timestamps.
    fn now_ms(&self) -> f64;

    /// Ask for one frame callback. Fails when the host cannot schedule frames.
    fn request_frame(&mut self) -> GaugeResult<FrameToken>;

    /// Withdraw a previously requested frame. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }

    fn request_frame(&mut self) -> GaugeResult<FrameToken> {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        (**self).cancel_frame(token)
    }
}

/// Scheduler backed by a manually advanced clock.
///
/// Requested frames accumulate until the owner collects them with
/// [`ManualScheduler::take_pending`] and delivers them.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: f64,
    next_id: u64,
    pending: Vec<FrameToken>,
}

impl ManualScheduler {
    /// Clock at zero, nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at `now_ms`.
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    /// Set the clock.
    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Move the clock forward by `delta_ms` and return the new time.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        self.now_ms += delta_ms;
        self.now_ms
    }

    /// Requested frames not yet collected or cancelled.
    pub fn pending(&self) -> &[FrameToken] {
        &self.pending
    }

    /// Any frame waiting for delivery.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Collect every pending frame for delivery.
    pub fn take_pending(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn request_frame(&mut self) -> GaugeResult<FrameToken> {
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.pending.push(token);
        Ok(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.retain(|t| *t != token);
    }
}

/// Host without any frame scheduling; drivers using it snap straight to their target.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedScheduler;

impl FrameScheduler for UnsupportedScheduler {
    fn now_ms(&self) -> f64 {
        0.0
    }

    fn request_frame(&mut self) -> GaugeResult<FrameToken> {
        Err(GaugeError::scheduler("frame scheduling is not available"))
    }

    fn cancel_frame(&mut self, _token: FrameToken) {}
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
