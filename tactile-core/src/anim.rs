//! Animation scheduler.
//!
//! Value ramps keyed by the widget that owns them. A widget has at most one
//! ramp in flight: scheduling again overwrites the previous one instead of
//! letting two ramps fight over the same value.
//!
//! The clock only moves when [`Animator::advance`] is called, so the host
//! picks the frame rate and tests stay deterministic.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::widget::WidgetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// One scheduled value ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    pub id: u64,
    pub widget: WidgetId,
    pub from: i32,
    pub to: i32,
    pub started_at: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Ramp {
    fn value_at(&self, now: Duration) -> (i32, bool) {
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let span = (self.to as i64 - self.from as i64) as f64;
        let offset = (span * self.easing.apply(t) as f64).round() as i64;
        let value = (self.from as i64 + offset).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        (value, false)
    }
}

/// Value produced for a widget by one [`Animator::advance`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampFrame {
    pub widget: WidgetId,
    pub value: i32,
    /// Last frame of the ramp; `value` is exactly the target.
    pub finished: bool,
}

#[derive(Debug, Default)]
pub struct Animator {
    now: Duration,
    ramps: Vec<Ramp>,
    next_id: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the animation clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Start a ramp for `widget`, replacing any ramp it already has.
    /// Returns `true` if an in-flight ramp was overwritten.
    pub fn schedule(
        &mut self,
        widget: WidgetId,
        from: i32,
        to: i32,
        duration: Duration,
        easing: Easing,
    ) -> bool {
        let replaced = self.cancel(widget);
        self.next_id += 1;
        self.ramps.push(Ramp {
            id: self.next_id,
            widget,
            from,
            to,
            started_at: self.now,
            duration,
            easing,
        });
        tracing::debug!(%widget, from, to, ?duration, replaced, "ramp scheduled");
        replaced
    }

    /// Drop the ramp owned by `widget`. No-op if there is none.
    pub fn cancel(&mut self, widget: WidgetId) -> bool {
        let before = self.ramps.len();
        self.ramps.retain(|r| r.widget != widget);
        let cancelled = self.ramps.len() != before;
        if cancelled {
            tracing::debug!(%widget, "ramp cancelled");
        }
        cancelled
    }

    pub fn ramp(&self, widget: WidgetId) -> Option<&Ramp> {
        self.ramps.iter().find(|r| r.widget == widget)
    }

    pub fn is_running(&self, widget: WidgetId) -> bool {
        self.ramp(widget).is_some()
    }

    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }

    /// Clock time until the last running ramp finishes.
    pub fn longest_remaining(&self) -> Option<Duration> {
        self.ramps
            .iter()
            .map(|r| r.duration.saturating_sub(self.now.saturating_sub(r.started_at)))
            .max()
    }

    /// Move the clock forward and report the current value of every ramp.
    /// Finished ramps are removed after their final frame.
    pub fn advance(&mut self, dt: Duration) -> Vec<RampFrame> {
        self.now += dt;
        let now = self.now;

        let frames: Vec<RampFrame> = self
            .ramps
            .iter()
            .map(|r| {
                let (value, finished) = r.value_at(now);
                RampFrame {
                    widget: r.widget,
                    value,
                    finished,
                }
            })
            .collect();

        self.ramps.retain(|r| now.saturating_sub(r.started_at) < r.duration);
        tracing::trace!(frames = frames.len(), running = self.ramps.len(), "animator tick");
        frames
    }
}
