use tactile_core::ImageSource;

/// Which knob image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobImage {
    Off,
    On,
}

impl KnobImage {
    pub fn for_state(state: bool) -> Self {
        if state { KnobImage::On } else { KnobImage::Off }
    }
}

/// Switch-owned data: the logical state and the two knob images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchStore {
    state: bool,
    knob_off: Option<ImageSource>,
    knob_on: Option<ImageSource>,
}

impl SwitchStore {
    pub fn read(&self) -> bool {
        self.state
    }

    // Must move together with the slider value; only the controller calls this.
    pub(crate) fn write(&mut self, state: bool) {
        self.state = state;
    }

    /// Replace a knob image, returning the previous one. Not validated here,
    /// the renderer decodes it when it draws.
    pub(crate) fn set_knob_image(&mut self, which: KnobImage, source: Option<ImageSource>) -> Option<ImageSource> {
        let slot = match which {
            KnobImage::Off => &mut self.knob_off,
            KnobImage::On => &mut self.knob_on,
        };
        std::mem::replace(slot, source)
    }

    pub fn knob_image(&self, which: KnobImage) -> Option<&ImageSource> {
        match which {
            KnobImage::Off => self.knob_off.as_ref(),
            KnobImage::On => self.knob_on.as_ref(),
        }
    }
}
