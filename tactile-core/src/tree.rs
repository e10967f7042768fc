//! The object tree.
//!
//! Owns every widget, the animation clock, the redraw set and the event
//! queue. Widgets are reached through their [`WidgetId`]; typed access checks
//! the stored [`WidgetKind`] first and fails cleanly on a mismatch.

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

use crate::anim::Animator;
use crate::config::UiConfig;
use crate::draw::DrawList;
use crate::error::{Result, UiError};
use crate::geometry::{PointerEvent, PointerKind, Rect};
use crate::widget::{Panel, Widget, WidgetEvent, WidgetId, WidgetKind, WidgetType};

// ════════════════════════════════════════════════════════════════════
// Update context
// ════════════════════════════════════════════════════════════════════

/// What a widget may touch while it is being mutated: its own ramp, the
/// redraw set and the event queue.
pub struct UpdateCtx<'a> {
    id: WidgetId,
    rect: Rect,
    animator: &'a mut Animator,
    events: &'a mut VecDeque<WidgetEvent>,
    dirty: &'a mut HashSet<WidgetId>,
    config: &'a UiConfig,
}

impl<'a> UpdateCtx<'a> {
    pub fn new(
        id: WidgetId,
        rect: Rect,
        animator: &'a mut Animator,
        events: &'a mut VecDeque<WidgetEvent>,
        dirty: &'a mut HashSet<WidgetId>,
        config: &'a UiConfig,
    ) -> Self {
        Self {
            id,
            rect,
            animator,
            events,
            dirty,
            config,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn config(&self) -> &UiConfig {
        self.config
    }

    pub fn request_redraw(&mut self) {
        self.dirty.insert(self.id);
    }

    pub fn emit(&mut self, event: WidgetEvent) {
        self.events.push_back(event);
    }

    /// Ramp this widget's value, overwriting any ramp already in flight.
    pub fn schedule_ramp(&mut self, from: i32, to: i32, duration: Duration) {
        let easing = self.config.easing;
        self.animator.schedule(self.id, from, to, duration, easing);
    }

    pub fn cancel_ramp(&mut self) -> bool {
        self.animator.cancel(self.id)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running(self.id)
    }

    /// Where the in-flight ramp is heading, if any.
    pub fn ramp_target(&self) -> Option<i32> {
        self.animator.ramp(self.id).map(|r| r.to)
    }
}

// ════════════════════════════════════════════════════════════════════
// Tree
// ════════════════════════════════════════════════════════════════════

struct Node {
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    rect: Rect,
    widget: Box<dyn Widget>,
}

pub struct WidgetTree {
    nodes: HashMap<WidgetId, Node>,
    root: WidgetId,
    animator: Animator,
    events: VecDeque<WidgetEvent>,
    dirty: HashSet<WidgetId>,
    /// Widget that received the last pointer `Down`, until `Up`.
    captured: Option<WidgetId>,
    config: UiConfig,
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("root", &self.root)
            .field("widgets", &self.nodes.len())
            .field("ramps", &self.animator.len())
            .finish()
    }
}

fn typed<W: WidgetType>(id: WidgetId, widget: &dyn Widget) -> Result<&W> {
    let found = widget.kind();
    let mismatch = UiError::KindMismatch {
        id,
        expected: W::KIND,
        found,
    };
    if found != W::KIND {
        return Err(mismatch);
    }
    widget.as_any().downcast_ref::<W>().ok_or(mismatch)
}

fn typed_mut<W: WidgetType>(id: WidgetId, widget: &mut dyn Widget) -> Result<&mut W> {
    let found = widget.kind();
    let mismatch = UiError::KindMismatch {
        id,
        expected: W::KIND,
        found,
    };
    if found != W::KIND {
        return Err(mismatch);
    }
    widget.as_any_mut().downcast_mut::<W>().ok_or(mismatch)
}

impl WidgetTree {
    /// New tree with a root panel covering `viewport`.
    pub fn new(config: UiConfig, viewport: Rect) -> Self {
        let root = WidgetId::new();
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                parent: None,
                children: Vec::new(),
                rect: viewport,
                widget: Box::new(Panel),
            },
        );
        let mut dirty = HashSet::new();
        dirty.insert(root);

        Self {
            nodes,
            root,
            animator: Animator::new(),
            events: VecDeque::new(),
            dirty,
            captured: None,
            config,
        }
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: WidgetId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(UiError::UnknownWidget(id))
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn kind(&self, id: WidgetId) -> Result<WidgetKind> {
        Ok(self.node(id)?.widget.kind())
    }

    pub fn rect(&self, id: WidgetId) -> Result<Rect> {
        Ok(self.node(id)?.rect)
    }

    pub fn parent(&self, id: WidgetId) -> Result<Option<WidgetId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: WidgetId) -> Result<&[WidgetId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) -> Result<()> {
        let node = self.nodes.get_mut(&id).ok_or(UiError::UnknownWidget(id))?;
        node.rect = rect;
        self.dirty.insert(id);
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────
    // Lifecycle
    // ────────────────────────────────────────────────────────────────

    /// Attach `widget` as the last child of `parent`.
    pub fn insert<W: Widget>(&mut self, parent: WidgetId, rect: Rect, widget: W) -> Result<WidgetId> {
        let kind = widget.kind();
        let parent_node = self
            .nodes
            .get_mut(&parent)
            .ok_or(UiError::UnknownWidget(parent))?;

        let id = WidgetId::new();
        parent_node.children.push(id);
        self.nodes.insert(
            id,
            Node {
                parent: Some(parent),
                children: Vec::new(),
                rect,
                widget: Box::new(widget),
            },
        );
        self.dirty.insert(id);
        tracing::debug!(%id, %parent, %kind, "widget created");
        Ok(id)
    }

    /// Destroy `id` and its whole subtree. Ramps owned by removed widgets are
    /// cancelled.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        if id == self.root {
            return Err(UiError::RootRemoval);
        }
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent {
            if let Some(p) = self.nodes.get_mut(&parent) {
                p.children.retain(|c| *c != id);
            }
            self.dirty.insert(parent);
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children);
            }
            self.animator.cancel(next);
            self.dirty.remove(&next);
            if self.captured == Some(next) {
                self.captured = None;
            }
        }
        tracing::debug!(%id, "widget removed");
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────
    // Typed access
    // ────────────────────────────────────────────────────────────────

    pub fn get<W: WidgetType>(&self, id: WidgetId) -> Result<&W> {
        typed::<W>(id, self.node(id)?.widget.as_ref())
    }

    /// Mutate a widget of type `W` with access to its update context.
    pub fn update<W, R>(&mut self, id: WidgetId, f: impl FnOnce(&mut W, &mut UpdateCtx<'_>) -> R) -> Result<R>
    where
        W: WidgetType,
    {
        let node = self.nodes.get_mut(&id).ok_or(UiError::UnknownWidget(id))?;
        let rect = node.rect;
        let widget = typed_mut::<W>(id, node.widget.as_mut())?;
        let mut cx = UpdateCtx::new(
            id,
            rect,
            &mut self.animator,
            &mut self.events,
            &mut self.dirty,
            &self.config,
        );
        Ok(f(widget, &mut cx))
    }

    // ────────────────────────────────────────────────────────────────
    // Input
    // ────────────────────────────────────────────────────────────────

    /// Depth-first, parents before children.
    pub fn paint_order(&self) -> Vec<WidgetId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(&id) {
                order.push(id);
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }

    /// Topmost interactive widget under the point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<WidgetId> {
        self.paint_order().into_iter().rev().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|n| n.widget.is_interactive() && n.rect.contains(x, y))
        })
    }

    /// Route a pointer event. `Down` captures the widget under the pointer;
    /// `Move` and `Up` go to the captured widget, `Up` releases it.
    /// Returns the widget that received the event.
    pub fn dispatch_pointer(&mut self, event: PointerEvent) -> Option<WidgetId> {
        let target = match event.kind {
            PointerKind::Down => {
                self.captured = self.hit_test(event.x, event.y);
                self.captured
            }
            PointerKind::Move => self.captured,
            PointerKind::Up => self.captured.take(),
            PointerKind::Wheel { .. } => None,
        }?;

        let Some(node) = self.nodes.get_mut(&target) else {
            tracing::warn!(%target, "pointer target vanished");
            self.captured = None;
            return None;
        };
        let mut cx = UpdateCtx::new(
            target,
            node.rect,
            &mut self.animator,
            &mut self.events,
            &mut self.dirty,
            &self.config,
        );
        node.widget.on_pointer(&event, &mut cx);
        Some(target)
    }

    // ────────────────────────────────────────────────────────────────
    // Animation
    // ────────────────────────────────────────────────────────────────

    /// Advance the animation clock by `dt` and hand each ramp frame to the
    /// widget that owns it.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let frames = self.animator.advance(dt);
        for frame in &frames {
            let Some(node) = self.nodes.get_mut(&frame.widget) else {
                continue;
            };
            self.dirty.insert(frame.widget);
            let mut cx = UpdateCtx::new(
                frame.widget,
                node.rect,
                &mut self.animator,
                &mut self.events,
                &mut self.dirty,
                &self.config,
            );
            node.widget.on_frame(frame.value, &mut cx);
            if frame.finished {
                tracing::trace!(widget = %frame.widget, value = frame.value, "ramp landed");
            }
        }
        frames.len()
    }

    /// Run every in-flight ramp to completion.
    pub fn finish_animations(&mut self) {
        while !self.animator.is_empty() {
            let Some(longest) = self.animator.longest_remaining() else {
                break;
            };
            self.advance(longest);
        }
    }

    // ────────────────────────────────────────────────────────────────
    // Rendering
    // ────────────────────────────────────────────────────────────────

    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty.contains(&id)
    }

    pub fn take_dirty(&mut self) -> HashSet<WidgetId> {
        std::mem::take(&mut self.dirty)
    }

    /// Paint the whole tree and clear the redraw set.
    pub fn render(&mut self, out: &mut DrawList) {
        for id in self.paint_order() {
            if let Some(node) = self.nodes.get(&id) {
                node.widget.render(node.rect, &self.config.theme, out);
            }
        }
        self.dirty.clear();
    }

    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        self.events.drain(..).collect()
    }
}
