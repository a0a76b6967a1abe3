use std::fmt;

use crate::animation::ease::Ease;
use crate::animation::scheduler::{FrameScheduler, FrameToken, ManualScheduler};
use crate::foundation::error::GaugeError;
use crate::foundation::math::{lerp, round_to};

/// What `set_target_value` does while a run is in flight.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RetargetPolicy {
    /// Record the new target; the running animation still lands on the value it started for,
    /// and the new target is used by the next replay.
    #[default]
    Deferred,
    /// Restart the run from the currently displayed value towards the new target.
    Restart,
}

/// Replay parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationOpts {
    /// Value every replay starts from.
    pub start_value: f64,
    /// Run length in milliseconds; `<= 0` completes on the first frame.
    pub duration_ms: f64,
    /// Progress curve.
    pub easing: Ease,
    /// Behavior of target changes during a run.
    pub retarget: RetargetPolicy,
}

impl Default for AnimationOpts {
    fn default() -> Self {
        Self {
            start_value: 0.0,
            duration_ms: 1000.0,
            easing: Ease::Linear,
            retarget: RetargetPolicy::Deferred,
        }
    }
}

/// Observable animation state of one gauge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    /// Value currently shown.
    pub displayed_value: f64,
    /// Value the gauge should end up showing.
    pub target_value: f64,
    /// Value the current or last run started from.
    pub start_value: f64,
    /// A run is in flight.
    pub is_animating: bool,
    /// Host time the current run started at.
    pub start_timestamp: Option<f64>,
}

#[derive(Clone, Copy, Debug)]
struct Run {
    from: f64,
    to: f64,
    duration_ms: f64,
    easing: Ease,
    started_at: f64,
}

/// Drives the displayed value of a gauge from a start value to its target over time.
///
/// The driver owns at most one pending frame request. [`AnimationDriver::replay`] and
/// [`AnimationDriver::stop`] cancel it before doing anything else, and
/// [`AnimationDriver::on_frame`] ignores every token except the pending one, so a frame that
/// belonged to a stopped or superseded run can never touch the displayed value.
pub struct AnimationDriver<S: FrameScheduler> {
    scheduler: S,
    opts: AnimationOpts,
    state: AnimationState,
    run: Option<Run>,
    pending: Option<FrameToken>,
    on_complete: Option<Box<dyn FnMut()>>,
    on_change: Option<Box<dyn FnMut(f64)>>,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    /// Create an idle driver showing `initial_value`.
    pub fn new(initial_value: f64, scheduler: S, opts: AnimationOpts) -> Self {
        Self {
            scheduler,
            opts,
            state: AnimationState {
                displayed_value: initial_value,
                target_value: initial_value,
                start_value: opts.start_value,
                is_animating: false,
                start_timestamp: None,
            },
            run: None,
            pending: None,
            on_complete: None,
            on_change: None,
        }
    }

    /// Replay parameters used by the next run.
    pub fn opts(&self) -> &AnimationOpts {
        &self.opts
    }

    /// Replace the replay parameters. A run already in flight keeps the ones it started with.
    pub fn set_opts(&mut self, opts: AnimationOpts) {
        self.opts = opts;
    }

    /// Snapshot of the observable state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Value currently shown.
    pub fn displayed_value(&self) -> f64 {
        self.state.displayed_value
    }

    /// Displayed value rounded to `precision` decimals, as shown by a value label.
    pub fn rounded_value(&self, precision: u8) -> f64 {
        round_to(self.state.displayed_value, precision)
    }

    /// Value the gauge should end up showing.
    pub fn target_value(&self) -> f64 {
        self.state.target_value
    }

    /// A run is in flight.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// The one frame this driver is waiting for.
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Host scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Host scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Called once each time a run reaches its end value.
    pub fn on_complete(&mut self, f: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    /// Called with the new displayed value whenever it changes.
    pub fn on_change(&mut self, f: impl FnMut(f64) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    /// Change the target. Idle drivers snap to it; running ones follow [`RetargetPolicy`].
    pub fn set_target_value(&mut self, value: f64) {
        self.state.target_value = value;
        if self.run.is_none() {
            self.set_displayed(value);
            return;
        }
        match self.opts.retarget {
            RetargetPolicy::Deferred => {
                tracing::debug!(
                    target_value = value,
                    "target updated mid-run; applies on next replay"
                );
            }
            RetargetPolicy::Restart => {
                let from = self.state.displayed_value;
                self.begin_run(from);
            }
        }
    }

    /// Restart the animation from the configured start value towards the current target.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(target_value = self.state.target_value)
    )]
    pub fn replay(&mut self) {
        self.begin_run(self.opts.start_value);
    }

    /// Cancel the running animation, leaving the displayed value where it is.
    pub fn stop(&mut self) {
        self.cancel_pending();
        if self.run.take().is_some() {
            tracing::debug!(displayed = self.state.displayed_value, "animation stopped");
        }
        self.state.is_animating = false;
        self.state.start_timestamp = None;
    }

    /// Deliver a frame callback. Returns `true` if the frame belonged to the current run.
    pub fn on_frame(&mut self, token: FrameToken, timestamp_ms: f64) -> bool {
        if self.pending != Some(token) {
            tracing::debug!(token = token.0, "ignoring stale frame");
            return false;
        }
        self.pending = None;
        let Some(run) = self.run else {
            return false;
        };

        let elapsed = (timestamp_ms - run.started_at).max(0.0);
        let progress = if run.duration_ms > 0.0 {
            (elapsed / run.duration_ms).min(1.0)
        } else {
            1.0
        };

        if progress < 1.0 {
            self.set_displayed(lerp(run.from, run.to, run.easing.apply(progress)));
            match self.scheduler.request_frame() {
                Ok(next) => self.pending = Some(next),
                Err(err) => self.degrade(err, run.to),
            }
        } else {
            self.complete(run.to);
        }
        true
    }

    fn begin_run(&mut self, from: f64) {
        self.cancel_pending();
        self.run = None;

        let to = self.state.target_value;
        self.state.start_value = from;
        self.set_displayed(from);

        let started_at = self.scheduler.now_ms();
        let run = Run {
            from,
            to,
            duration_ms: self.opts.duration_ms,
            easing: self.opts.easing,
            started_at,
        };
        match self.scheduler.request_frame() {
            Ok(token) => {
                self.pending = Some(token);
                self.run = Some(run);
                self.state.is_animating = true;
                self.state.start_timestamp = Some(started_at);
            }
            Err(err) => self.degrade(err, to),
        }
    }

    fn degrade(&mut self, err: GaugeError, end: f64) {
        tracing::warn!(%err, "frame scheduling unavailable; snapping to target");
        self.complete(end);
    }

    fn complete(&mut self, end: f64) {
        self.run = None;
        self.pending = None;
        self.state.is_animating = false;
        self.state.start_timestamp = None;
        self.set_displayed(end);
        tracing::debug!(value = end, "animation complete");
        if let Some(cb) = self.on_complete.as_mut() {
            cb();
        }
    }

    fn set_displayed(&mut self, value: f64) {
        if self.state.displayed_value == value {
            return;
        }
        self.state.displayed_value = value;
        if let Some(cb) = self.on_change.as_mut() {
            cb(value);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
    }
}

impl AnimationDriver<ManualScheduler> {
    /// Set the manual clock to `now_ms` and deliver every pending frame at that time.
    ///
    /// Returns the number of frames that advanced the current run.
    pub fn pump(&mut self, now_ms: f64) -> usize {
        self.scheduler.set_now(now_ms);
        let tokens = self.scheduler.take_pending();
        tokens
            .into_iter()
            .filter(|token| self.on_frame(*token, now_ms))
            .count()
    }
}

impl<S: FrameScheduler> Drop for AnimationDriver<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<S: FrameScheduler + fmt::Debug> fmt::Debug for AnimationDriver<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("scheduler", &self.scheduler)
            .field("opts", &self.opts)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
