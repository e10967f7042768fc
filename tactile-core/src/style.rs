//! Part-based styling.
//!
//! Widgets never interpret styles themselves beyond picking the sheet for
//! their kind and asking it for a [`Part`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const TRANSPARENT: Rgba = Rgba::rgba(0.0, 0.0, 0.0, 0.0);
}

/// Drawable parts of a value control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    Background,
    Indicator,
    Knob,
}

impl Part {
    /// Paint order, back to front.
    pub const ALL: [Part; 3] = [Part::Background, Part::Indicator, Part::Knob];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartStyle {
    pub color: Rgba,
    /// Corner radius in pixels.
    pub radius: f32,
    /// Pixels shaved off every side of the part's box.
    pub inset: f32,
}

impl Default for PartStyle {
    fn default() -> Self {
        Self {
            color: Rgba::TRANSPARENT,
            radius: 0.0,
            inset: 0.0,
        }
    }
}

impl PartStyle {
    pub const fn filled(color: Rgba, radius: f32, inset: f32) -> Self {
        Self { color, radius, inset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StyleSheet {
    pub background: PartStyle,
    pub indicator: PartStyle,
    pub knob: PartStyle,
}

impl StyleSheet {
    pub fn part(&self, part: Part) -> &PartStyle {
        match part {
            Part::Background => &self.background,
            Part::Indicator => &self.indicator,
            Part::Knob => &self.knob,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub panel: StyleSheet,
    pub slider: StyleSheet,
    pub switch: StyleSheet,
}

impl Default for Theme {
    fn default() -> Self {
        let track = Rgba::rgb(0.13, 0.14, 0.18);
        let accent = Rgba::rgb(0.25, 0.55, 0.95);
        let knob = Rgba::rgb(0.9, 0.9, 0.9);

        Self {
            panel: StyleSheet {
                background: PartStyle::filled(Rgba::rgb(0.08, 0.085, 0.11), 0.0, 0.0),
                ..StyleSheet::default()
            },
            slider: StyleSheet {
                background: PartStyle::filled(track, 2.0, 6.0),
                indicator: PartStyle::filled(accent, 2.0, 6.0),
                knob: PartStyle::filled(knob, 9.0, 1.0),
            },
            switch: StyleSheet {
                background: PartStyle::filled(track, 12.0, 0.0),
                indicator: PartStyle::filled(accent, 12.0, 0.0),
                knob: PartStyle::filled(knob, 10.0, 2.0),
            },
        }
    }
}
