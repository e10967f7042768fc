//! Tree-level surface of the switch.

use std::time::Duration;

use tactile_core::{ImageSource, Rect, Result, WidgetId, WidgetTree};

use crate::switch::Switch;

/// A widget id known to name a [`Switch`].
///
/// Every call goes back through the tree's registry, so a handle to a
/// removed switch yields `UnknownWidget` rather than touching stale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwitchHandle(WidgetId);

impl SwitchHandle {
    /// Create a switch under `parent`. With a `template`, its state, knob
    /// images and animation time are copied; otherwise the switch starts OFF
    /// with the configured default animation time.
    pub fn create(
        tree: &mut WidgetTree,
        parent: WidgetId,
        rect: Rect,
        template: Option<SwitchHandle>,
    ) -> Result<Self> {
        let switch = match template {
            Some(t) => Switch::from_template(tree.get::<Switch>(t.0)?),
            None => Switch::new(tree.config().anim_time()),
        };
        let state = switch.state();
        let id = tree.insert(parent, rect, switch)?;
        tracing::debug!(%id, state, copied = template.is_some(), "switch created");
        Ok(Self(id))
    }

    /// Check that `id` is a switch in `tree`.
    pub fn from_id(tree: &WidgetTree, id: WidgetId) -> Result<Self> {
        tree.get::<Switch>(id)?;
        Ok(Self(id))
    }

    pub fn id(self) -> WidgetId {
        self.0
    }

    pub fn turn_on(self, tree: &mut WidgetTree, animate: bool) -> Result<()> {
        tree.update::<Switch, _>(self.0, |sw, cx| sw.turn_on(animate, cx))
    }

    pub fn turn_off(self, tree: &mut WidgetTree, animate: bool) -> Result<()> {
        tree.update::<Switch, _>(self.0, |sw, cx| sw.turn_off(animate, cx))
    }

    pub fn toggle(self, tree: &mut WidgetTree, animate: bool) -> Result<bool> {
        tree.update::<Switch, _>(self.0, |sw, cx| sw.toggle(animate, cx))
    }

    pub fn state(self, tree: &WidgetTree) -> Result<bool> {
        Ok(tree.get::<Switch>(self.0)?.state())
    }

    /// Current slider value, which trails the state while a ramp runs.
    pub fn value(self, tree: &WidgetTree) -> Result<i32> {
        Ok(tree.get::<Switch>(self.0)?.base().value())
    }

    pub fn set_knob_off_image(self, tree: &mut WidgetTree, source: Option<ImageSource>) -> Result<()> {
        tree.update::<Switch, _>(self.0, |sw, cx| sw.set_knob_off_image(source, cx))
    }

    pub fn set_knob_on_image(self, tree: &mut WidgetTree, source: Option<ImageSource>) -> Result<()> {
        tree.update::<Switch, _>(self.0, |sw, cx| sw.set_knob_on_image(source, cx))
    }

    pub fn knob_off_image(self, tree: &WidgetTree) -> Result<Option<ImageSource>> {
        Ok(tree.get::<Switch>(self.0)?.knob_off_image().cloned())
    }

    pub fn knob_on_image(self, tree: &WidgetTree) -> Result<Option<ImageSource>> {
        Ok(tree.get::<Switch>(self.0)?.knob_on_image().cloned())
    }

    pub fn knob_overlay(self, tree: &WidgetTree) -> Result<Option<ImageSource>> {
        Ok(tree.get::<Switch>(self.0)?.knob_overlay().cloned())
    }

    pub fn set_anim_time(self, tree: &mut WidgetTree, anim_time: Duration) -> Result<()> {
        tree.update::<Switch, _>(self.0, |sw, _| sw.set_anim_time(anim_time))
    }

    pub fn anim_time(self, tree: &WidgetTree) -> Result<Duration> {
        Ok(tree.get::<Switch>(self.0)?.anim_time())
    }
}
