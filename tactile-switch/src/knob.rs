//! Knob imagery.

use tactile_core::{DrawList, ImageSource, Part, Rect, StyleSheet};

use crate::store::{KnobImage, SwitchStore};
use crate::switch::Switch;

/// Image to overlay on the knob for `state`, or `None` for plain styling.
///
/// Reads the store directly every time, so there is nothing to go stale when
/// the state or the images change.
pub fn resolve(store: &SwitchStore, state: bool) -> Option<&ImageSource> {
    store.knob_image(KnobImage::for_state(state))
}

/// Paint the knob part, then its image overlay if one applies.
pub(crate) fn draw_knob(switch: &Switch, rect: Rect, sheet: &StyleSheet, out: &mut DrawList) {
    let base = switch.base();
    base.render_part(Part::Knob, rect, sheet, out);

    if let Some(source) = resolve(switch.store(), switch.state()) {
        let knob = base.part_rect(Part::Knob, rect).inset(sheet.knob.inset);
        out.push_image(knob, source.clone());
    }
}
