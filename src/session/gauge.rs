use crate::animation::driver::AnimationDriver;
use crate::animation::scheduler::{FrameScheduler, FrameToken, ManualScheduler};
use crate::config::model::GaugeConfig;
use crate::geometry::resolve::{Resolution, resolve, resolve_at};

/// One gauge instance: its current configuration plus the driver animating its value.
///
/// Geometry is recomputed on demand from the displayed value, so callers typically call
/// [`GaugeSession::resolve`] after every delivered frame.
#[derive(Debug)]
pub struct GaugeSession<S: FrameScheduler> {
    config: GaugeConfig,
    driver: AnimationDriver<S>,
}

impl<S: FrameScheduler> GaugeSession<S> {
    /// Create a gauge. With `show_animation` set, it starts animating towards `config.value`.
    pub fn new(config: GaugeConfig, scheduler: S) -> Self {
        report_issues(&config);
        let mut driver = AnimationDriver::new(config.value, scheduler, config.animation);
        if config.show_animation {
            driver.replay();
        }
        Self { config, driver }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// The value animation.
    pub fn driver(&self) -> &AnimationDriver<S> {
        &self.driver
    }

    /// The value animation, mutably (e.g. to attach observers).
    pub fn driver_mut(&mut self) -> &mut AnimationDriver<S> {
        &mut self.driver
    }

    /// Value currently on screen.
    pub fn displayed_value(&self) -> f64 {
        self.driver.displayed_value()
    }

    /// A replay is in flight.
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Change the configured value and the animation target.
    pub fn set_value(&mut self, value: f64) {
        self.config.value = value;
        self.driver.set_target_value(value);
    }

    /// Swap in a new configuration snapshot.
    pub fn set_config(&mut self, config: GaugeConfig) {
        report_issues(&config);
        let value_changed = config.value != self.config.value;
        let animation_toggled = config.show_animation != self.config.show_animation;
        self.driver.set_opts(config.animation);
        self.config = config;

        if animation_toggled && !self.config.show_animation {
            self.snap_to_value();
        } else if value_changed {
            self.driver.set_target_value(self.config.value);
        }
    }

    /// Enable or disable animation. Disabling stops any run and shows the configured value.
    pub fn set_show_animation(&mut self, enabled: bool) {
        self.config.show_animation = enabled;
        if !enabled {
            self.snap_to_value();
        }
    }

    /// Replay the value animation.
    pub fn replay(&mut self) {
        self.driver.replay();
    }

    /// Freeze the animation at the displayed value.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// Deliver a host frame callback; see [`AnimationDriver::on_frame`].
    pub fn on_frame(&mut self, token: FrameToken, timestamp_ms: f64) -> bool {
        self.driver.on_frame(token, timestamp_ms)
    }

    /// Geometry for the value currently on screen.
    pub fn resolve(&self) -> Resolution {
        resolve_at(&self.config, self.driver.displayed_value())
    }

    fn snap_to_value(&mut self) {
        self.driver.stop();
        self.driver.set_target_value(self.config.value);
    }
}

impl GaugeSession<ManualScheduler> {
    /// Deliver every pending frame at `now_ms`; see [`AnimationDriver::pump`].
    pub fn pump(&mut self, now_ms: f64) -> usize {
        self.driver.pump(now_ms)
    }
}

fn report_issues(config: &GaugeConfig) {
    for issue in resolve(config).issues {
        tracing::warn!(%issue, "gauge configuration degraded");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/gauge.rs"]
mod tests;
