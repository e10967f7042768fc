//! The widget contract.
//!
//! Concrete widgets embed whatever base state they extend (a switch embeds a
//! slider) and implement [`Widget`]. The tree stores them boxed and tags
//! each with a [`WidgetKind`], which is checked before any typed access.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draw::DrawList;
use crate::geometry::{PointerEvent, Rect};
use crate::style::{Part, Theme};
use crate::tree::UpdateCtx;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Discriminator for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetKind {
    Panel,
    Slider,
    Switch,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetKind::Panel => "panel",
            WidgetKind::Slider => "slider",
            WidgetKind::Switch => "switch",
        };
        f.write_str(name)
    }
}

/// Notifications queued by widgets for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A user gesture changed a slider's value.
    ValueChanged { id: WidgetId, value: i32 },
    /// A switch's logical state changed.
    Toggled { id: WidgetId, state: bool },
}

pub trait Widget: 'static {
    fn kind(&self) -> WidgetKind;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn is_interactive(&self) -> bool {
        false
    }

    fn on_pointer(&mut self, _event: &PointerEvent, _cx: &mut UpdateCtx<'_>) {}

    /// One frame of a ramp this widget scheduled. On the last frame `value`
    /// is the target and `cx.is_animating()` is already false.
    fn on_frame(&mut self, _value: i32, _cx: &mut UpdateCtx<'_>) {}

    fn render(&self, rect: Rect, theme: &Theme, out: &mut DrawList);
}

/// Static tag tying a concrete type to its [`WidgetKind`].
pub trait WidgetType: Widget + Sized {
    const KIND: WidgetKind;
}

/// Plain container. The tree root is one.
#[derive(Debug, Default)]
pub struct Panel;

impl Widget for Panel {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Panel
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn render(&self, rect: Rect, theme: &Theme, out: &mut DrawList) {
        out.push_styled(rect, theme.panel.part(Part::Background));
    }
}

impl WidgetType for Panel {
    const KIND: WidgetKind = WidgetKind::Panel;
}
