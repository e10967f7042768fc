//! The headless host: one scene, fed by script steps, driven by a frame clock.

use std::time::Duration;

use anyhow::{Context, Result};
use tactile_core::{DrawList, ImageSource, PointerEvent, Rect, Slider, UiConfig, WidgetEvent, WidgetId, WidgetTree};
use tactile_switch::SwitchHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::script::Step;

/// ~60 fps.
pub const FRAME: Duration = Duration::from_millis(16);

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 120.0);
const SWITCH_RECT: Rect = Rect::new(24.0, 24.0, 88.0, 32.0);
const SLIDER_RECT: Rect = Rect::new(24.0, 72.0, 200.0, 20.0);

/// Pointer samples sent between the ends of a scripted drag.
const DRAG_SAMPLES: u32 = 8;

pub struct Host {
    tree: WidgetTree,
    switch: SwitchHandle,
    slider: WidgetId,
    /// Everything the widgets reported, in order.
    events: Vec<WidgetEvent>,
    draw: DrawList,
    frames: u64,
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("tree", &self.tree)
            .field("frames", &self.frames)
            .finish()
    }
}

impl Host {
    pub fn new(config: UiConfig) -> Result<Self> {
        let mut tree = WidgetTree::new(config, VIEWPORT);
        let root = tree.root();
        let switch = SwitchHandle::create(&mut tree, root, SWITCH_RECT, None).context("creating switch")?;
        let anim_time = tree.config().anim_time();
        let slider = tree
            .insert(root, SLIDER_RECT, Slider::new(anim_time))
            .context("creating slider")?;

        tracing::info!(switch = %switch.id(), %slider, "scene ready");
        Ok(Self {
            tree,
            switch,
            slider,
            events: Vec::new(),
            draw: DrawList::new(),
            frames: 0,
        })
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn switch(&self) -> SwitchHandle {
        self.switch
    }

    pub fn slider(&self) -> WidgetId {
        self.slider
    }

    pub fn events(&self) -> &[WidgetEvent] {
        &self.events
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Last painted frame.
    pub fn draw_list(&self) -> &DrawList {
        &self.draw
    }

    /// Pointer x that puts the switch knob's centre at `pct` of its travel.
    fn knob_x(&self, pct: f32) -> Result<f32> {
        let rect = self.tree.rect(self.switch.id())?;
        let side = rect.h.min(rect.w);
        Ok(rect.x + side / 2.0 + (rect.w - side) * pct / 100.0)
    }

    /// Run one non-waiting step.
    pub fn apply(&mut self, step: &Step) -> Result<()> {
        let sw = self.switch;
        match step {
            Step::On { animate } => sw.turn_on(&mut self.tree, *animate)?,
            Step::Off { animate } => sw.turn_off(&mut self.tree, *animate)?,
            Step::Toggle { animate } => {
                sw.toggle(&mut self.tree, *animate)?;
            }
            Step::Tap => {
                let rect = self.tree.rect(sw.id())?;
                let (x, y) = (rect.x + rect.w / 2.0, rect.center_y());
                self.tree.dispatch_pointer(PointerEvent::down(x, y));
                self.tree.dispatch_pointer(PointerEvent::up(x, y));
            }
            Step::Drag { from, to } => {
                let y = self.tree.rect(sw.id())?.center_y();
                let (x0, x1) = (self.knob_x(*from)?, self.knob_x(*to)?);
                self.tree.dispatch_pointer(PointerEvent::down(x0, y));
                for i in 1..=DRAG_SAMPLES {
                    let x = x0 + (x1 - x0) * i as f32 / DRAG_SAMPLES as f32;
                    self.tree.dispatch_pointer(PointerEvent::moved(x, y));
                }
                self.tree.dispatch_pointer(PointerEvent::up(x1, y));
            }
            Step::Wait(_) => {}
            Step::KnobOn(path) => sw.set_knob_on_image(&mut self.tree, Some(ImageSource::path(path.as_str())))?,
            Step::KnobOff(path) => sw.set_knob_off_image(&mut self.tree, Some(ImageSource::path(path.as_str())))?,
            Step::ClearKnob => {
                sw.set_knob_on_image(&mut self.tree, None)?;
                sw.set_knob_off_image(&mut self.tree, None)?;
            }
        }
        self.collect_events();
        Ok(())
    }

    /// Advance animations by `dt` and repaint if anything was invalidated.
    pub fn frame(&mut self, dt: Duration) {
        self.frames += 1;
        self.tree.advance(dt);
        self.collect_events();

        let dirty = self.tree.take_dirty();
        if !dirty.is_empty() {
            self.draw.clear();
            self.tree.render(&mut self.draw);
            tracing::trace!(dirty = dirty.len(), commands = self.draw.len(), "repainted");
        }
    }

    fn collect_events(&mut self) {
        for event in self.tree.drain_events() {
            match event {
                WidgetEvent::Toggled { id, state } => tracing::info!(%id, state, "switch toggled"),
                WidgetEvent::ValueChanged { id, value } => tracing::info!(%id, value, "slider moved"),
            }
            self.events.push(event);
        }
    }

    async fn tick(&mut self, ticker: &mut Interval, last: &mut Instant) {
        ticker.tick().await;
        let now = Instant::now();
        self.frame(now - *last);
        *last = now;
    }

    /// Replay `steps`, then keep ticking until every animation has landed.
    pub async fn run(&mut self, steps: &[Step], frame: Duration) -> Result<()> {
        let mut ticker = tokio::time::interval(frame);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();

        for step in steps {
            match step {
                Step::Wait(duration) => {
                    let deadline = Instant::now() + *duration;
                    while Instant::now() < deadline {
                        self.tick(&mut ticker, &mut last).await;
                    }
                }
                other => {
                    if let Err(e) = self.apply(other) {
                        tracing::warn!("step {:?} failed: {:#}", other, e);
                        return Err(e);
                    }
                }
            }
        }

        while !self.tree.animator().is_empty() {
            self.tick(&mut ticker, &mut last).await;
        }
        // Flush whatever the last step invalidated.
        self.frame(Duration::ZERO);
        Ok(())
    }
}
