//! Backend-neutral draw commands.
//!
//! Widgets push into a [`DrawList`]; whatever owns the GPU (or a test)
//! consumes it. Images are forwarded untouched, decoding is the consumer's job.

use crate::geometry::Rect;
use crate::image::ImageSource;
use crate::style::{PartStyle, Rgba};

/// A single colored rectangle to draw. Coordinates in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadInstance {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Quad(QuadInstance),
    Image { rect: Rect, source: ImageSource },
}

#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, quad: QuadInstance) {
        self.cmds.push(DrawCmd::Quad(quad));
    }

    /// Fill `rect` with a part style, honoring its inset. Fully transparent
    /// or empty parts are skipped.
    pub fn push_styled(&mut self, rect: Rect, style: &PartStyle) {
        let r = rect.inset(style.inset);
        if style.color.a <= 0.0 || r.w <= 0.0 || r.h <= 0.0 {
            return;
        }
        self.push(QuadInstance {
            x: r.x,
            y: r.y,
            w: r.w,
            h: r.h,
            radius: style.radius,
            color: style.color,
        });
    }

    pub fn push_image(&mut self, rect: Rect, source: ImageSource) {
        self.cmds.push(DrawCmd::Image { rect, source });
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn images(&self) -> impl Iterator<Item = (&Rect, &ImageSource)> {
        self.cmds.iter().filter_map(|c| match c {
            DrawCmd::Image { rect, source } => Some((rect, source)),
            DrawCmd::Quad(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }
}
