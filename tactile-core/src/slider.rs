//! Base slider: an integer range, a value, drag tracking and part geometry.
//!
//! Used directly as a widget and embedded by controls that extend it.

use std::any::Any;
use std::time::Duration;

use crate::draw::DrawList;
use crate::error::{Result, UiError};
use crate::geometry::{PointerEvent, PointerKind, Rect};
use crate::style::{Part, StyleSheet, Theme};
use crate::tree::UpdateCtx;
use crate::widget::{Widget, WidgetEvent, WidgetKind, WidgetType};

/// What a pointer event did to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderResponse {
    Ignored,
    Pressed,
    /// The value moved during a drag.
    Changed,
    /// The gesture ended. `dragged` is false for a plain tap.
    Released { dragged: bool },
}

#[derive(Debug, Clone, Copy)]
struct Press {
    start_x: f32,
    dragged: bool,
}

#[derive(Debug, Clone)]
pub struct Slider {
    min: i32,
    max: i32,
    value: i32,
    anim_time: Duration,
    press: Option<Press>,
}

impl Slider {
    pub const DEFAULT_MIN: i32 = 0;
    pub const DEFAULT_MAX: i32 = 100;

    pub fn new(anim_time: Duration) -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            value: Self::DEFAULT_MIN,
            anim_time,
            press: None,
        }
    }

    pub fn with_range(min: i32, max: i32, anim_time: Duration) -> Result<Self> {
        let mut slider = Self::new(anim_time);
        slider.set_range(min, max)?;
        Ok(slider)
    }

    /// Builder form of an immediate value change, for widgets not yet in a tree.
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value.clamp(self.min, self.max);
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_at_min(&self) -> bool {
        self.value == self.min
    }

    pub fn is_at_max(&self) -> bool {
        self.value == self.max
    }

    pub fn anim_time(&self) -> Duration {
        self.anim_time
    }

    pub fn set_anim_time(&mut self, anim_time: Duration) {
        self.anim_time = anim_time;
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.dragged)
    }

    /// Change the range, clamping the current value into it.
    pub fn set_range(&mut self, min: i32, max: i32) -> Result<()> {
        if min >= max {
            return Err(UiError::InvalidRange { min, max });
        }
        self.min = min;
        self.max = max;
        self.value = self.value.clamp(min, max);
        Ok(())
    }

    /// Move to `value` (clamped). With `animate` and a non-zero duration the
    /// move is scheduled as a ramp from the current value; otherwise any
    /// running ramp is dropped and the value jumps.
    pub fn set_value(&mut self, value: i32, animate: bool, cx: &mut UpdateCtx<'_>) {
        let target = value.clamp(self.min, self.max);
        if animate && !self.anim_time.is_zero() && target != self.value {
            cx.schedule_ramp(self.value, target, self.anim_time);
        } else {
            cx.cancel_ramp();
            self.value = target;
        }
        cx.request_redraw();
    }

    /// Value whose knob would be centred under `x`.
    pub fn value_at(&self, rect: Rect, x: f32) -> i32 {
        let side = rect.h.min(rect.w);
        let travel = rect.w - side;
        if travel <= 0.0 {
            return self.min;
        }
        let frac = ((x - rect.x - side / 2.0) / travel).clamp(0.0, 1.0) as f64;
        let offset = (frac * self.span() as f64).round() as i64;
        (self.min as i64 + offset).clamp(self.min as i64, self.max as i64) as i32
    }

    /// `max - min`, widened so the full `i32` range fits.
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64
    }

    fn fraction(&self) -> f32 {
        ((self.value as i64 - self.min as i64) as f64 / self.span() as f64) as f32
    }

    /// Track a press/drag/release gesture. Value changes caused by the drag
    /// are applied here; what a release means is up to the caller.
    pub fn handle_pointer(&mut self, event: &PointerEvent, cx: &mut UpdateCtx<'_>) -> SliderResponse {
        let rect = cx.rect();
        match event.kind {
            PointerKind::Down => {
                if !rect.contains(event.x, event.y) {
                    return SliderResponse::Ignored;
                }
                // Grabbing the knob stops it where it is.
                cx.cancel_ramp();
                self.press = Some(Press {
                    start_x: event.x,
                    dragged: false,
                });
                SliderResponse::Pressed
            }
            PointerKind::Move => {
                let threshold = cx.config().drag_threshold;
                let Some(press) = self.press.as_mut() else {
                    return SliderResponse::Ignored;
                };
                if !press.dragged && (event.x - press.start_x).abs() > threshold {
                    press.dragged = true;
                }
                if !press.dragged {
                    return SliderResponse::Ignored;
                }
                let value = self.value_at(rect, event.x);
                if value == self.value {
                    return SliderResponse::Ignored;
                }
                self.value = value;
                cx.request_redraw();
                SliderResponse::Changed
            }
            PointerKind::Up => {
                let Some(press) = self.press.take() else {
                    return SliderResponse::Ignored;
                };
                if press.dragged {
                    self.value = self.value_at(rect, event.x);
                    cx.request_redraw();
                }
                SliderResponse::Released {
                    dragged: press.dragged,
                }
            }
            PointerKind::Wheel { .. } => SliderResponse::Ignored,
        }
    }

    pub fn knob_rect(&self, rect: Rect) -> Rect {
        let side = rect.h.min(rect.w);
        let travel = (rect.w - side).max(0.0);
        Rect {
            x: rect.x + travel * self.fraction(),
            y: rect.center_y() - side / 2.0,
            w: side,
            h: side,
        }
    }

    pub fn part_rect(&self, part: Part, rect: Rect) -> Rect {
        match part {
            Part::Background => rect,
            Part::Indicator => {
                let knob = self.knob_rect(rect);
                Rect {
                    w: knob.x + knob.w / 2.0 - rect.x,
                    ..rect
                }
            }
            Part::Knob => self.knob_rect(rect),
        }
    }

    pub fn render_part(&self, part: Part, rect: Rect, sheet: &StyleSheet, out: &mut DrawList) {
        out.push_styled(self.part_rect(part, rect), sheet.part(part));
    }
}

impl Widget for Slider {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Slider
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn on_pointer(&mut self, event: &PointerEvent, cx: &mut UpdateCtx<'_>) {
        let before = self.value;
        if let SliderResponse::Released { dragged: false } = self.handle_pointer(event, cx) {
            // A tap jumps straight to the tapped position.
            let target = self.value_at(cx.rect(), event.x);
            self.set_value(target, false, cx);
        }
        if self.value != before {
            cx.emit(WidgetEvent::ValueChanged {
                id: cx.id(),
                value: self.value,
            });
        }
    }

    fn on_frame(&mut self, value: i32, _cx: &mut UpdateCtx<'_>) {
        self.value = value.clamp(self.min, self.max);
    }

    fn render(&self, rect: Rect, theme: &Theme, out: &mut DrawList) {
        for part in Part::ALL {
            self.render_part(part, rect, &theme.slider, out);
        }
    }
}

impl WidgetType for Slider {
    const KIND: WidgetKind = WidgetKind::Slider;
}
