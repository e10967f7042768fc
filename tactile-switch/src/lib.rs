//! # Tactile Switch
//!
//! A two-state toggle built on the tactile base slider.
//! The switch embeds a [`Slider`](tactile_core::Slider) and keeps one logical
//! state on top of it: ON rests at the slider's maximum, OFF at its minimum.
//! Whatever moves the value (API call, tap, drag, ramp) ends with the two in
//! agreement.
//!
//! Each knob state can carry an image overlay; with none set the knob is
//! painted from the theme.

mod controller;
mod handle;
mod knob;
mod store;
mod switch;

pub use handle::SwitchHandle;
pub use knob::resolve;
pub use store::{KnobImage, SwitchStore};
pub use switch::Switch;
