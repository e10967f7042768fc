//! # Tactile Core
//!
//! The widget runtime every tactile control sits on.
//! Owns the object tree, the animation clock, redraw bookkeeping and the
//! base slider that value-driven controls extend.
//!
//! Everything here runs on one control thread. Nothing blocks: animated
//! value changes are scheduled on the [`anim::Animator`] and progressed by
//! [`WidgetTree::advance`].

pub mod anim;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod image;
pub mod slider;
pub mod style;
pub mod tree;
pub mod widget;

pub use anim::{Animator, Easing, Ramp, RampFrame};
pub use config::UiConfig;
pub use draw::{DrawCmd, DrawList, QuadInstance};
pub use error::{Result, UiError};
pub use geometry::{PointerEvent, PointerKind, Rect};
pub use image::{Bitmap, ImageSource, PixelFormat};
pub use slider::{Slider, SliderResponse};
pub use style::{Part, PartStyle, Rgba, StyleSheet, Theme};
pub use tree::{UpdateCtx, WidgetTree};
pub use widget::{Panel, Widget, WidgetEvent, WidgetId, WidgetKind, WidgetType};
