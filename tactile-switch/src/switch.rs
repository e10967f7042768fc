use std::any::Any;
use std::time::Duration;

use tactile_core::{
    DrawList, ImageSource, Part, PointerEvent, Rect, Slider, Theme, UpdateCtx, Widget, WidgetKind,
    WidgetType,
};

use crate::knob;
use crate::store::{KnobImage, SwitchStore};

/// Toggle switch. Extends [`Slider`] by embedding it.
#[derive(Debug, Clone)]
pub struct Switch {
    pub(crate) base: Slider,
    pub(crate) store: SwitchStore,
}

impl Switch {
    /// A switch resting OFF with no knob images.
    pub fn new(anim_time: Duration) -> Self {
        Self {
            base: Slider::new(anim_time),
            store: SwitchStore::default(),
        }
    }

    /// Copy state, knob images and animation time from `template`. The new
    /// switch starts at rest in the copied state.
    pub fn from_template(template: &Switch) -> Self {
        let state = template.state();
        let base = Slider::new(template.anim_time());
        let rest = if state { base.max() } else { base.min() };

        let mut store = SwitchStore::default();
        store.write(state);
        store.set_knob_image(KnobImage::Off, template.knob_off_image().cloned());
        store.set_knob_image(KnobImage::On, template.knob_on_image().cloned());

        Self {
            base: base.with_value(rest),
            store,
        }
    }

    pub fn base(&self) -> &Slider {
        &self.base
    }

    pub fn store(&self) -> &SwitchStore {
        &self.store
    }

    /// Logical state. Mid-animation this is already the target state.
    pub fn state(&self) -> bool {
        self.store.read()
    }

    pub fn anim_time(&self) -> Duration {
        self.base.anim_time()
    }

    pub fn set_anim_time(&mut self, anim_time: Duration) {
        self.base.set_anim_time(anim_time);
    }

    pub fn knob_off_image(&self) -> Option<&ImageSource> {
        self.store.knob_image(KnobImage::Off)
    }

    pub fn knob_on_image(&self) -> Option<&ImageSource> {
        self.store.knob_image(KnobImage::On)
    }

    /// `None` clears the override.
    pub fn set_knob_off_image(&mut self, source: Option<ImageSource>, cx: &mut UpdateCtx<'_>) {
        self.store.set_knob_image(KnobImage::Off, source);
        cx.request_redraw();
    }

    /// `None` clears the override.
    pub fn set_knob_on_image(&mut self, source: Option<ImageSource>, cx: &mut UpdateCtx<'_>) {
        self.store.set_knob_image(KnobImage::On, source);
        cx.request_redraw();
    }

    /// The image the knob shows right now.
    pub fn knob_overlay(&self) -> Option<&ImageSource> {
        knob::resolve(&self.store, self.state())
    }
}

impl Widget for Switch {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Switch
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
        self.handle_pointer(event, cx);
    }

    fn on_frame(&mut self, value: i32, cx: &mut UpdateCtx<'_>) {
        self.base.on_frame(value, cx);
        // Once no ramp is left the value is a rest position.
        if !cx.is_animating() {
            self.settle(cx);
        }
    }

    fn render(&self, rect: Rect, theme: &Theme, out: &mut DrawList) {
        let sheet = &theme.switch;
        self.base.render_part(Part::Background, rect, sheet, out);
        self.base.render_part(Part::Indicator, rect, sheet, out);
        knob::draw_knob(self, rect, sheet, out);
    }
}

impl WidgetType for Switch {
    const KIND: WidgetKind = WidgetKind::Switch;
}
