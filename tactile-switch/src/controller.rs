//! ON/OFF transitions.
//!
//! The only code that writes the switch state. Every path moves the slider
//! value and the state in the same call, so no caller on the control thread
//! can observe one without the other.

use tactile_core::{PointerEvent, SliderResponse, UpdateCtx, WidgetEvent};

use crate::switch::Switch;

impl Switch {
    /// Switch ON. No-op when already ON, an in-flight ramp is left alone.
    pub fn turn_on(&mut self, animate: bool, cx: &mut UpdateCtx<'_>) {
        if self.state() {
            return;
        }
        self.drive_to(true, animate, cx);
    }

    /// Switch OFF. No-op when already OFF.
    pub fn turn_off(&mut self, animate: bool, cx: &mut UpdateCtx<'_>) {
        if !self.state() {
            return;
        }
        self.drive_to(false, animate, cx);
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self, animate: bool, cx: &mut UpdateCtx<'_>) -> bool {
        if self.state() {
            self.turn_off(animate, cx);
        } else {
            self.turn_on(animate, cx);
        }
        self.state()
    }

    /// Re-derive the state from a value resting at an extreme. Values in
    /// between are not a rest position and leave the state untouched.
    pub fn resync(&mut self, cx: &mut UpdateCtx<'_>) {
        if self.base.is_at_max() {
            self.commit(true, cx);
        } else if self.base.is_at_min() {
            self.commit(false, cx);
        }
    }

    /// Move the value to the extreme for `state` even if the state already
    /// matches, then record the state.
    fn drive_to(&mut self, state: bool, animate: bool, cx: &mut UpdateCtx<'_>) {
        let target = if state { self.base.max() } else { self.base.min() };
        self.base.set_value(target, animate, cx);
        self.commit(state, cx);
    }

    fn commit(&mut self, state: bool, cx: &mut UpdateCtx<'_>) {
        if self.store.read() != state {
            self.store.write(state);
            tracing::debug!(id = %cx.id(), state, animating = cx.is_animating(), "switch state changed");
            cx.emit(WidgetEvent::Toggled { id: cx.id(), state });
        }
        cx.request_redraw();
    }

    pub(crate) fn handle_pointer(&mut self, event: &PointerEvent, cx: &mut UpdateCtx<'_>) {
        match self.base.handle_pointer(event, cx) {
            SliderResponse::Released { dragged: false } => {
                self.toggle(true, cx);
            }
            SliderResponse::Released { dragged: true } => self.settle(cx),
            SliderResponse::Ignored | SliderResponse::Pressed | SliderResponse::Changed => {}
        }
    }

    /// The value stopped moving, after a drag or at the end of a ramp. At an
    /// extreme the state follows it; anywhere else the knob snaps to the
    /// nearer side.
    pub(crate) fn settle(&mut self, cx: &mut UpdateCtx<'_>) {
        if self.base.is_at_max() || self.base.is_at_min() {
            self.resync(cx);
            return;
        }
        let half = self.base.span() / 2;
        let on = self.base.value() as i64 - self.base.min() as i64 > half;
        tracing::debug!(id = %cx.id(), value = self.base.value(), on, "value stopped between rests");
        self.drive_to(on, true, cx);
    }
}
